use std::sync::Mutex;

use super::{BookingStore, StoreError};
use crate::models::Booking;

/// In-memory store, used by tests in place of the SQLite layer.
#[derive(Default)]
pub struct MemoryStore {
    bookings: Mutex<Vec<Booking>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStore for MemoryStore {
    fn load(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }

    fn save(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        *self.bookings.lock().unwrap() = bookings.to_vec();
        Ok(())
    }
}
