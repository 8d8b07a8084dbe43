//! Input aggregation: merge optional free text and optional PDF text into
//! one combined prompt.
//!
//! This is the one contract the whole crate is built around: a request must
//! carry at least one usable source. The combined prompt has a fixed shape —
//! a labelled "User Text" block first, a labelled "PDF Content" block second,
//! blank-line separated — and empty sections are omitted entirely rather than
//! emitted as bare labels. A request whose combined prompt ends up blank is
//! rejected here, before any network call; no further content inspection
//! happens locally.

use crate::error::AssistantError;
use crate::pipeline::extract;
use std::path::PathBuf;
use tracing::debug;

/// A PDF input, either on disk or already in memory (e.g. a web upload).
#[derive(Debug, Clone)]
pub enum PdfSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// The raw inputs of one request: optional free text, optional PDF.
///
/// Invariant enforced by [`combine`]: at least one field must yield non-blank
/// text, otherwise the request fails with
/// [`AssistantError::InvalidInput`].
#[derive(Debug, Clone, Default)]
pub struct InputBundle {
    pub text: Option<String>,
    pub pdf: Option<PdfSource>,
}

impl InputBundle {
    pub fn new(text: Option<String>, pdf: Option<PdfSource>) -> Self {
        Self { text, pdf }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            pdf: None,
        }
    }

    pub fn from_pdf_path(path: impl Into<PathBuf>) -> Self {
        Self {
            text: None,
            pdf: Some(PdfSource::Path(path.into())),
        }
    }

    pub fn from_pdf_bytes(bytes: Vec<u8>) -> Self {
        Self {
            text: None,
            pdf: Some(PdfSource::Bytes(bytes)),
        }
    }

    /// True when neither source is present at all. A bundle that is not
    /// `is_empty` can still fail [`combine`] if every source turns out blank.
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, |t| t.is_empty()) && self.pdf.is_none()
    }
}

/// Build the combined prompt from an input bundle.
///
/// Free text first, PDF content second, in labelled blocks; the result is
/// trimmed of leading/trailing whitespace. Fails with
/// [`AssistantError::InvalidInput`] when the trimmed result is empty — the
/// only validation this layer performs.
pub async fn combine(bundle: &InputBundle) -> Result<String, AssistantError> {
    let mut combined = String::new();

    if let Some(text) = bundle.text.as_deref() {
        if !text.trim().is_empty() {
            combined.push_str("User Text:\n");
            combined.push_str(text);
            combined.push_str("\n\n");
        }
    }

    if let Some(pdf) = &bundle.pdf {
        let pdf_text = extract::extract_text(pdf).await?;
        if !pdf_text.trim().is_empty() {
            combined.push_str("PDF Content:\n");
            combined.push_str(&pdf_text);
        } else {
            debug!("PDF yielded no extractable text; section omitted");
        }
    }

    let combined = combined.trim();
    if combined.is_empty() {
        return Err(AssistantError::InvalidInput);
    }

    Ok(combined.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn both_sources_absent_is_invalid_input() {
        let bundle = InputBundle::default();
        let result = combine(&bundle).await;
        assert!(matches!(result, Err(AssistantError::InvalidInput)));
    }

    #[tokio::test]
    async fn whitespace_only_text_is_invalid_input() {
        let bundle = InputBundle::from_text("   \n\t  ");
        let result = combine(&bundle).await;
        assert!(matches!(result, Err(AssistantError::InvalidInput)));
    }

    #[tokio::test]
    async fn text_only_prompt_has_exact_shape() {
        let bundle = InputBundle::from_text("quantum error correction surface codes");
        let prompt = combine(&bundle).await.unwrap();
        assert_eq!(
            prompt,
            "User Text:\nquantum error correction surface codes"
        );
        assert!(!prompt.contains("PDF Content"));
    }

    #[tokio::test]
    async fn text_block_comes_before_pdf_label_shape() {
        // No PDF attached: the trailing blank-line separator is trimmed away.
        let bundle = InputBundle::from_text("line one\nline two");
        let prompt = combine(&bundle).await.unwrap();
        assert!(prompt.starts_with("User Text:\n"));
        assert!(prompt.ends_with("line two"));
    }

    #[test]
    fn empty_bundle_reports_empty() {
        assert!(InputBundle::default().is_empty());
        assert!(InputBundle::new(Some(String::new()), None).is_empty());
        assert!(!InputBundle::from_text("x").is_empty());
        assert!(!InputBundle::from_pdf_bytes(vec![1, 2, 3]).is_empty());
    }
}
