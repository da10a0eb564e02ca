use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::catalog::ServiceId;

/// A confirmed reservation. Field names and types match the persisted
/// layout exactly: `createdAt` is milliseconds since the epoch, `date`
/// is an ISO `YYYY-MM-DD` string on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub email: String,
    pub service: ServiceId,
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Raw form input for a new reservation, not yet validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub service: String,
    pub date: String,
    pub time: String,
}
