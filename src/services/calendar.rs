use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::models::Booking;

/// Render a booking as a single-event ICS file the customer can import
/// into their calendar. Event length comes from the service catalog.
pub fn generate_ics(booking: &Booking, business_name: &str) -> String {
    let service = booking.service.details();

    let start_time = NaiveTime::parse_from_str(&booking.time, "%H:%M").unwrap_or_default();
    let start = NaiveDateTime::new(booking.date, start_time);
    let end = start + Duration::minutes(service.duration_minutes as i64);

    let dtstart = start.format("%Y%m%dT%H%M%S").to_string();
    let dtend = end.format("%Y%m%dT%H%M%S").to_string();
    let uid = format!("{}@slotbook", booking.id);

    let summary = format!("{} at {business_name}", service.name);
    let description = format!("{} ({}) for {}", service.name, service.duration, booking.name);

    format!(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//Slotbook//Booking Widget//EN\r\n\
         BEGIN:VEVENT\r\n\
         UID:{uid}\r\n\
         DTSTART:{dtstart}\r\n\
         DTEND:{dtend}\r\n\
         SUMMARY:{summary}\r\n\
         DESCRIPTION:{description}\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n"
    )
}
