use chrono::{Days, NaiveDate};
use uuid::Uuid;

use crate::clock::Clock;
use crate::db::{BlobStore, BOOKINGS_KEY};
use crate::errors::StoreError;
use crate::models::{Booking, BookingDraft};
use crate::services::validation::{self, ValidationError};

/// Single source of truth for the reservation list. Loaded once from the
/// blob store at open; every mutation re-serializes the full list back
/// under the same key.
pub struct BookingStore {
    bookings: Vec<Booking>,
    blob: Box<dyn BlobStore>,
    clock: Box<dyn Clock>,
}

impl BookingStore {
    /// Load the persisted booking list, or start empty. Unreadable or
    /// malformed stored data degrades to an empty list rather than
    /// propagating, so stale garbage can never wedge the widget.
    pub fn open(blob: Box<dyn BlobStore>, clock: Box<dyn Clock>) -> Self {
        let bookings = match blob.get(BOOKINGS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Booking>>(&raw) {
                Ok(bookings) => bookings,
                Err(e) => {
                    tracing::warn!("discarding malformed booking data: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read booking data, starting empty: {e:#}");
                Vec::new()
            }
        };

        tracing::info!("booking store opened with {} booking(s)", bookings.len());

        Self {
            bookings,
            blob,
            clock,
        }
    }

    /// Validate a draft and admit it as a new booking. The slot must be
    /// free; double-booking is rejected here, not just greyed out in the
    /// picker. On a persist failure the booking stays in memory and the
    /// error is surfaced to the caller.
    pub fn create(&mut self, draft: &BookingDraft) -> Result<Booking, StoreError> {
        let validated = validation::validate_draft(draft, self.minimum_selectable_date())?;

        if self.is_slot_taken(validated.date, &validated.time) {
            return Err(ValidationError::SlotTaken {
                date: validated.date,
                time: validated.time,
            }
            .into());
        }

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            name: validated.name,
            email: validated.email,
            service: validated.service,
            date: validated.date,
            time: validated.time,
            created_at: self.clock.now_millis(),
        };

        self.bookings.push(booking.clone());
        self.persist()?;

        Ok(booking)
    }

    /// Delete by id. Unknown ids are a no-op, not an error, and skip the
    /// re-persist entirely.
    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.bookings.len();
        self.bookings.retain(|b| b.id != id);
        if self.bookings.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// True iff some booking already occupies this exact `(date, time)`
    /// pair. Linear scan; the list stays small.
    pub fn is_slot_taken(&self, date: NaiveDate, time: &str) -> bool {
        self.bookings.iter().any(|b| b.date == date && b.time == time)
    }

    /// All bookings ascending by date. Stable, so same-date bookings keep
    /// their insertion order. Re-derived on every call.
    pub fn sorted_for_display(&self) -> Vec<Booking> {
        let mut sorted = self.bookings.clone();
        sorted.sort_by_key(|b| b.date);
        sorted
    }

    /// Earliest bookable date: tomorrow, per the injected clock.
    pub fn minimum_selectable_date(&self) -> NaiveDate {
        self.clock.today() + Days::new(1)
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let value = serde_json::to_string(&self.bookings)
            .map_err(|e| StoreError::Persistence(e.into()))?;
        self.blob.put(BOOKINGS_KEY, &value).map_err(|e| {
            tracing::warn!("failed to persist bookings: {e:#}");
            StoreError::Persistence(e)
        })
    }
}
