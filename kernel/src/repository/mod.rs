pub mod availability;
pub mod health;
pub mod property;
pub mod reservation;
