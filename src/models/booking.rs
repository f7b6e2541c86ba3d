use serde::{Deserialize, Serialize};

/// A confirmed appointment. Serialized field names follow the stored
/// format, which uses camelCase (`createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
    /// Epoch milliseconds, used only for sort order in the admin view.
    pub created_at: i64,
}

/// Candidate fields for a new booking. Identity and creation time are
/// assigned by the repository, never by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub service: String,
    pub date: String,
    pub time: String,
}
