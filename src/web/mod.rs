//! Thin web UI: a form page for both modes, multipart submission, and the
//! report download.
//!
//! The [`Assistant`] is constructed once at startup and shared through axum
//! state; each request handler is a stateless pass through the service. All
//! failures render as a displayed error message — nothing is retried.

pub mod handlers;
pub mod template;
pub mod upload;

use crate::Assistant;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Maximum upload size. Research-paper PDFs rarely exceed a few megabytes;
/// 50 MB leaves room for scanned documents.
const BODY_LIMIT_BYTES: usize = 50 * 1024 * 1024;

/// Build the application router around a shared assistant service.
pub fn router(assistant: Arc<Assistant>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/find", post(handlers::find))
        .route("/report", post(handlers::report))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(assistant)
}
