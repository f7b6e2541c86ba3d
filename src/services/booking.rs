use chrono::Utc;
use uuid::Uuid;

use crate::models::{Booking, BookingRequest};
use crate::services::notify::Notifier;
use crate::store::{BookingStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),

    #[error("This time slot is already booked. Please choose another one.")]
    Conflict,

    #[error("could not save booking: {0}")]
    Storage(#[from] StoreError),
}

/// Owns the booking collection. All creation and deletion goes through
/// here; the collection invariant is at most one booking per (date, time).
pub struct BookingRepository {
    store: Box<dyn BookingStore>,
    notifier: Box<dyn Notifier>,
}

impl BookingRepository {
    pub fn new(store: Box<dyn BookingStore>, notifier: Box<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    pub fn list(&self) -> Vec<Booking> {
        self.store.load()
    }

    /// Validates the candidate, checks the slot is free, assigns identity
    /// and creation time, persists, then notifies the operator.
    ///
    /// The notification is best-effort: by the time it runs the booking is
    /// already committed, and a notifier failure is logged and swallowed.
    pub async fn add(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        if request.time.trim().is_empty() {
            return Err(BookingError::Validation(
                "Please select a time slot.".to_string(),
            ));
        }

        let mut bookings = self.store.load();
        let taken = bookings
            .iter()
            .any(|b| b.date == request.date && b.time == request.time);
        if taken {
            return Err(BookingError::Conflict);
        }

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            phone: request.phone,
            service: request.service,
            date: request.date,
            time: request.time,
            created_at: Utc::now().timestamp_millis(),
        };

        bookings.push(booking.clone());
        self.store.save(&bookings)?;

        tracing::info!(id = %booking.id, date = %booking.date, time = %booking.time, "booking created");

        if let Err(e) = self.notifier.notify(&booking).await {
            tracing::warn!("booking notification failed: {e:#}");
        }

        Ok(booking)
    }

    /// Removes the booking with the given id. Unknown ids are a no-op, not
    /// an error.
    pub fn delete(&self, id: &str) -> Result<(), BookingError> {
        let mut bookings = self.store.load();
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        self.store.save(&bookings)?;

        if bookings.len() < before {
            tracing::info!(id = %id, "booking deleted");
        }
        Ok(())
    }
}
