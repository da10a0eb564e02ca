pub mod booking;
pub mod catalog;

pub use booking::{Booking, BookingDraft};
pub use catalog::{Service, ServiceId, SERVICES, TIME_SLOTS};
