//! Error types for the paperdesk library.
//!
//! All failures are local to one request and fatal for that request: nothing
//! is retried or recovered internally, and remote-API errors surface to the
//! caller unmodified. The variants map directly onto the failure taxonomy of
//! the pipeline stages: input validation, PDF extraction, the model call, and
//! PDF rendering.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the paperdesk library.
#[derive(Debug, Error)]
pub enum AssistantError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Neither free text nor a PDF with extractable text was supplied.
    #[error("Invalid input: provide text, a PDF with extractable text, or both.")]
    InvalidInput,

    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF extraction errors ─────────────────────────────────────────────
    /// The PDF could not be parsed at all.
    #[error("Failed to parse PDF: {detail}\nTry repairing with: qpdf --decrypt input.pdf output.pdf")]
    ExtractionFailed { detail: String },

    // ── Model API errors ──────────────────────────────────────────────────
    /// No API key was found in the config or the environment.
    #[error("No API key configured.\nSet {var} or pass one via AssistantConfig::builder().api_key(...).")]
    ApiKeyMissing { var: &'static str },

    /// The HTTP request to the model API failed at the transport level.
    #[error("Model API request failed: {detail}")]
    ApiRequest { detail: String },

    /// The model API answered with a non-success status (auth, quota, 5xx).
    #[error("Model API error (HTTP {status}): {body}")]
    ApiStatus { status: u16, body: String },

    /// The API answered 200 but carried no completion choice.
    #[error("Model API returned an empty completion")]
    EmptyCompletion,

    // ── Output contract errors ────────────────────────────────────────────
    /// Post-hoc validation was enabled and the completion broke its contract.
    #[error("Model output violates the {contract} contract: {detail}")]
    ContractViolation { contract: &'static str, detail: String },

    // ── Rendering errors ──────────────────────────────────────────────────
    /// The PDF layout library failed while building the report file.
    #[error("Failed to render report PDF: {detail}")]
    RenderFailed { detail: String },

    /// Could not create or write the output PDF file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
