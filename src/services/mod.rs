pub mod calendar;
pub mod validation;
