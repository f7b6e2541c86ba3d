use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Booking;
use crate::state::AppState;

/// Admin calls carry the shared password as a bearer credential; there is
/// no server-side session.
fn check_auth(headers: &HeaderMap, state: &AppState) -> Result<(), AppError> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let credential = auth.strip_prefix("Bearer ").unwrap_or("");
    if !state.auth.verify(credential) {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

// POST /api/admin/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !state.auth.verify(&body.password) {
        return Err(AppError::Unauthorized);
    }
    Ok(Json(serde_json::json!({ "ok": true })))
}

// GET /api/admin/bookings
pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<Booking>>, AppError> {
    check_auth(&headers, &state)?;

    let mut bookings = state.repo.list();
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(bookings))
}

// DELETE /api/admin/bookings/:id
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    check_auth(&headers, &state)?;

    state.repo.delete(&id)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
