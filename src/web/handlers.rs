//! Request handlers for the two modes.

use crate::web::{template, upload};
use crate::Assistant;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;
use tracing::warn;

/// Filename offered for every report download.
const REPORT_FILENAME: &str = "research_report.pdf";

pub async fn index() -> Html<String> {
    Html(template::render_index())
}

/// Finder mode: return the completion text in the page.
pub async fn find(
    State(assistant): State<Arc<Assistant>>,
    multipart: Multipart,
) -> Html<String> {
    let bundle = match upload::parse_multipart(multipart).await {
        Ok(fields) => fields.into_bundle(),
        Err(msg) => return Html(template::render_error(&msg)),
    };

    match assistant.find_paper(&bundle).await {
        Ok(result) => Html(template::render_result(&result)),
        Err(e) => {
            warn!("Finder request failed: {}", e);
            Html(template::render_error(&e.to_string()))
        }
    }
}

/// Report mode: generate the PDF and offer it as a download.
pub async fn report(
    State(assistant): State<Arc<Assistant>>,
    multipart: Multipart,
) -> Response {
    let bundle = match upload::parse_multipart(multipart).await {
        Ok(fields) => fields.into_bundle(),
        Err(msg) => return error_page(&msg),
    };

    let path = match assistant.generate_report_pdf(&bundle, None).await {
        Ok(path) => path,
        Err(e) => {
            warn!("Report request failed: {}", e);
            return error_page(&e.to_string());
        }
    };

    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Failed to read generated report {}: {}", path.display(), e);
            return error_page(&format!("Failed to read generated report: {}", e));
        }
    };

    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", REPORT_FILENAME),
            ),
        ],
        bytes,
    )
        .into_response()
}

fn error_page(message: &str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(template::render_error(message)),
    )
        .into_response()
}
