pub mod blob;

pub use blob::{BlobStore, MemoryBlobStore, SqliteBlobStore};

/// Storage key the booking sequence is persisted under.
pub const BOOKINGS_KEY: &str = "bookings";
