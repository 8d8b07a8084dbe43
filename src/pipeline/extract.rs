//! PDF text extraction: page-ordered plain text via lopdf.
//!
//! ## Why spawn_blocking?
//!
//! lopdf parses the full cross-reference table and content streams in memory,
//! which is CPU-bound work. `tokio::task::spawn_blocking` moves it onto the
//! blocking thread pool so the async workers never stall on a large upload.
//!
//! ## Boundary semantics
//!
//! Pages are visited in document order and each page's text is concatenated
//! followed by a newline. A page with no extractable text — a scanned image,
//! say — contributes nothing rather than failing the whole document. Only a
//! PDF that cannot be parsed at all is a fatal extraction error. No OCR or
//! repair is attempted.

use crate::error::AssistantError;
use crate::pipeline::input::PdfSource;
use lopdf::Document;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extract plain text from a PDF source, stripped of leading/trailing
/// whitespace. Returns an empty string when no page yields any text.
pub async fn extract_text(source: &PdfSource) -> Result<String, AssistantError> {
    let source = source.clone();
    tokio::task::spawn_blocking(move || extract_text_blocking(&source))
        .await
        .map_err(|e| AssistantError::Internal(format!("Extraction task panicked: {}", e)))?
}

/// Blocking implementation of text extraction.
fn extract_text_blocking(source: &PdfSource) -> Result<String, AssistantError> {
    let document = match source {
        PdfSource::Path(path) => load_from_path(path)?,
        PdfSource::Bytes(bytes) => load_from_bytes(bytes)?,
    };

    let pages = document.get_pages();
    debug!("PDF loaded: {} pages", pages.len());

    let mut text = String::new();
    for (&page_num, _) in pages.iter() {
        match document.extract_text(&[page_num]) {
            Ok(page_text) if !page_text.trim().is_empty() => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Ok(_) => {
                debug!("Page {}: no extractable text, skipping", page_num);
            }
            Err(e) => {
                // Content-stream quirks on a single page are treated the same
                // as a scanned page: the page contributes nothing.
                warn!("Page {}: text extraction failed, skipping: {}", page_num, e);
            }
        }
    }

    Ok(text.trim().to_string())
}

/// Open a PDF from disk, validating existence, readability, and magic bytes
/// before handing it to the parser.
fn load_from_path(path: &Path) -> Result<Document, AssistantError> {
    if !path.exists() {
        return Err(AssistantError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    match std::fs::File::open(path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(AssistantError::NotAPdf {
                    path: path.to_path_buf(),
                    magic,
                });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(AssistantError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        // The path exists but cannot be opened as a file (a directory, say).
        Err(e) => {
            return Err(AssistantError::ExtractionFailed {
                detail: format!("{} ({})", e, path.display()),
            });
        }
    }

    Document::load(path).map_err(|e| AssistantError::ExtractionFailed {
        detail: format!("{} ({})", e, path.display()),
    })
}

/// Parse a PDF from an in-memory byte buffer (e.g. a web upload).
fn load_from_bytes(bytes: &[u8]) -> Result<Document, AssistantError> {
    if bytes.len() < 4 || !bytes.starts_with(b"%PDF") {
        let mut magic = [0u8; 4];
        let n = bytes.len().min(4);
        magic[..n].copy_from_slice(&bytes[..n]);
        return Err(AssistantError::NotAPdf {
            path: PathBuf::from("<uploaded bytes>"),
            magic,
        });
    }

    Document::load_mem(bytes).map_err(|e| AssistantError::ExtractionFailed {
        detail: e.to_string(),
    })
}
