pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::models::Booking;

/// Fixed key the booking collection is stored under.
pub const STORAGE_KEY: &str = "ajjubhai_bookings";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Whole-collection persistence for bookings.
///
/// `load` never fails: a missing or unreadable store reads as an empty
/// collection. `save` replaces the stored collection (last writer wins) and
/// surfaces write failures so a booking is never silently lost.
pub trait BookingStore: Send + Sync {
    fn load(&self) -> Vec<Booking>;
    fn save(&self, bookings: &[Booking]) -> Result<(), StoreError>;
}
