//! HTTP handlers for dashboard routes

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use rust_embed::RustEmbed;
use std::sync::Arc;

use crate::api::AppState;

/// Embedded dashboard assets from dashboard/ directory
#[derive(RustEmbed)]
#[folder = "dashboard/"]
struct DashboardAssets;

/// Serves the main dashboard HTML page with the herd injected as initial data
pub async fn dashboard_handler(State(state): State<Arc<AppState>>) -> Response {
    match DashboardAssets::get("index.html") {
        Some(content) => {
            let body = content.data;
            let html = match std::str::from_utf8(&body) {
                Ok(html) => html,
                Err(_) => {
                    return (StatusCode::INTERNAL_SERVER_ERROR, "Invalid HTML encoding")
                        .into_response()
                }
            };

            let goats_json =
                serde_json::to_string(state.herd.all()).unwrap_or_else(|_| "[]".to_string());

            // Inject the herd into the HTML template
            let updated_html = html.replace(
                r#"<script id="initial-data" type="application/json">
        {}
    </script>"#,
                &format!(
                    r#"<script id="initial-data" type="application/json">
        {}
    </script>"#,
                    goats_json
                ),
            );

            Html(updated_html).into_response()
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Dashboard HTML not found",
        )
            .into_response(),
    }
}

/// Serves the Wi-Fi manager placeholder page
pub async fn wifi_manager_handler() -> Response {
    match DashboardAssets::get("wifi-manager.html") {
        Some(content) => {
            let body = content.data;
            match std::str::from_utf8(&body) {
                Ok(html) => Html(html.to_string()).into_response(),
                Err(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Invalid HTML encoding").into_response()
                }
            }
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Wi-Fi manager HTML not found",
        )
            .into_response(),
    }
}

/// Serves static assets (CSS, JS, etc.)
pub async fn assets_handler(Path(path): Path<String>) -> Response {
    match DashboardAssets::get(&path) {
        Some(content) => {
            let body = content.data;
            let mime_type = mime_guess::from_path(&path).first_or_octet_stream();

            ([(header::CONTENT_TYPE, mime_type.as_ref())], body).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Asset not found").into_response(),
    }
}
