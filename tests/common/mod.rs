//! Shared test utilities for Herdboard integration tests.
//!
//! Provides reusable helpers for creating herds and router instances to
//! reduce duplication across test files.

#![allow(dead_code)]

use herdboard::api::{create_router, AppState};
use herdboard::config::HerdboardConfig;
use herdboard::herd::{Gender, Goat, Herd};
use std::sync::Arc;

/// Create a single goat record.
pub fn make_goat(id: &str, weight: u32, gender: Gender) -> Goat {
    Goat::new(id, weight, gender)
}

/// Create a herd from a list of records, panicking on invalid input.
pub fn make_herd(goats: Vec<Goat>) -> Arc<Herd> {
    Arc::new(Herd::new(goats).unwrap())
}

/// Create a router over the starter herd (most common test pattern).
pub fn create_test_app() -> axum::Router {
    create_test_app_with_herd(Arc::new(Herd::starter()))
}

/// Create a router over a specific herd.
pub fn create_test_app_with_herd(herd: Arc<Herd>) -> axum::Router {
    let config = Arc::new(HerdboardConfig::default());
    let state = Arc::new(AppState::new(herd, config));
    create_router(state)
}
