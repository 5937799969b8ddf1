//! Herd listing endpoint handler.

use crate::api::AppState;
use crate::herd::Goat;
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /api/goats - Return the full herd in insertion order.
pub async fn handle(State(state): State<Arc<AppState>>) -> Json<Vec<Goat>> {
    Json(state.herd.all().to_vec())
}
