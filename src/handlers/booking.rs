use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::catalog::{GalleryItem, Service, GALLERY_ITEMS, SERVICES, TIME_SLOTS};
use crate::models::{Booking, BookingRequest};
use crate::state::AppState;

// GET /api/services
pub async fn get_services() -> Json<Vec<Service>> {
    Json(SERVICES.to_vec())
}

// GET /api/gallery
pub async fn get_gallery() -> Json<Vec<GalleryItem>> {
    Json(GALLERY_ITEMS.to_vec())
}

// GET /api/slots?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct SlotResponse {
    pub time: &'static str,
    pub booked: bool,
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<Vec<SlotResponse>>, AppError> {
    let date = query.date.unwrap_or_default();
    if date.trim().is_empty() {
        return Err(AppError::Validation(
            "A date is required to look up time slots.".to_string(),
        ));
    }

    let taken: Vec<String> = state
        .repo
        .list()
        .into_iter()
        .filter(|b| b.date == date)
        .map(|b| b.time)
        .collect();

    let slots = TIME_SLOTS
        .iter()
        .map(|&time| SlotResponse {
            time,
            booked: taken.iter().any(|t| t == time),
        })
        .collect();

    Ok(Json(slots))
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = state.repo.add(request).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}
