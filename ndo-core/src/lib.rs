pub mod country;
pub mod display_date;
pub mod error;
pub mod event;
pub mod hemisphere;
pub mod season;
