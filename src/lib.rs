pub mod clock;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod services;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use db::{BlobStore, MemoryBlobStore, SqliteBlobStore};
pub use errors::StoreError;
pub use models::{Booking, BookingDraft, ServiceId};
pub use store::BookingStore;
