pub mod calendar_date;
pub mod property;
pub mod reservation;
