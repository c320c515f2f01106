pub mod id;
pub mod property;
pub mod reservation;
