//! Web dashboard module
//!
//! Serves the embedded pages at `/` and `/wifi-manager`:
//! - the herd table, populated from the records injected at render time
//! - the Wi-Fi manager placeholder, a static page with no dynamic data
//!
//! Assets (CSS, JS) are embedded in the binary and served under `/assets/`.

pub mod handler;

pub use handler::{assets_handler, dashboard_handler, wifi_manager_handler};
