//! # HTTP API
//!
//! Route registration for the Herdboard dashboard service.
//!
//! ## Endpoints
//!
//! - `GET /` - Dashboard page with the herd table
//! - `GET /wifi-manager` - Wi-Fi manager placeholder page
//! - `GET /api/goats` - Herd records as a JSON array
//! - `GET /health` - Liveness status
//! - `GET /assets/*path` - Embedded static assets
//!
//! ## Example
//!
//! ```no_run
//! use herdboard::api::{AppState, create_router};
//! use herdboard::config::HerdboardConfig;
//! use herdboard::herd::Herd;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let herd = Arc::new(Herd::starter());
//! let config = Arc::new(HerdboardConfig::default());
//!
//! let state = Arc::new(AppState::new(herd, config));
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Every route is a pure read of the shared herd followed by a synchronous
//! render or serialize step; there is no request input to validate and no
//! handler-owned failure mode.

mod goats;
mod health;

use crate::config::HerdboardConfig;
use crate::herd::Herd;
use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub herd: Arc<Herd>,
    pub config: Arc<HerdboardConfig>,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state with the given herd and configuration.
    pub fn new(herd: Arc<Herd>, config: Arc<HerdboardConfig>) -> Self {
        Self {
            herd,
            config,
            start_time: Instant::now(),
        }
    }
}

/// Create the main router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(crate::dashboard::dashboard_handler))
        .route("/wifi-manager", get(crate::dashboard::wifi_manager_handler))
        .route("/api/goats", get(goats::handle))
        .route("/health", get(health::handle))
        .route("/assets/*path", get(crate::dashboard::assets_handler))
        .layer(axum::middleware::from_fn(crate::logging::track_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
