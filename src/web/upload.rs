//! Multipart form parsing for the two submission endpoints.

use crate::pipeline::input::{InputBundle, PdfSource};
use axum::extract::Multipart;

/// Parsed form fields: optional free text, optional uploaded PDF.
///
/// Presence is decided here; the "at least one usable source" invariant is
/// enforced downstream by the input aggregator, so an all-empty form gets
/// the same rejection as an all-empty library call.
pub struct FormFields {
    pub text: Option<String>,
    pub pdf: Option<Vec<u8>>,
}

impl FormFields {
    pub fn into_bundle(self) -> InputBundle {
        InputBundle::new(self.text, self.pdf.map(PdfSource::Bytes))
    }
}

/// Parse a multipart form upload into structured form fields.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<FormFields, String> {
    let mut text: Option<String> = None;
    let mut pdf: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {}", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "text" => {
                let val = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read text field: {}", e))?;
                if !val.trim().is_empty() {
                    text = Some(val);
                }
            }
            "pdf" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file data: {}", e))?
                    .to_vec();
                // Browsers submit an empty file part when nothing is selected.
                if !data.is_empty() {
                    pdf = Some(data);
                }
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    Ok(FormFields { text, pdf })
}
