//! # paperdesk
//!
//! Find academic papers and generate structured research reports with LLMs.
//!
//! ## What this crate does
//!
//! Two modes, one request shape. Each request merges optional free text and
//! optional PDF-extracted text into a single combined prompt and makes one
//! chat-completion call against an OpenAI-compatible endpoint (Groq by
//! default):
//!
//! * **Finder** — identify exactly one academic paper matching the input, as
//!   a seven-field citation record, or answer with a literal fallback
//!   sentence when nothing applies.
//! * **Report** — summarize the input into a fixed eleven-section academic
//!   report, returned as text or rendered as a paginated A4 PDF.
//!
//! ## Pipeline Overview
//!
//! ```text
//! text / PDF
//!  │
//!  ├─ 1. Extract   page-ordered plain text from the PDF (lopdf)
//!  ├─ 2. Aggregate labelled "User Text" / "PDF Content" blocks, reject blank
//!  ├─ 3. Complete  one system + one user message → one completion (Groq)
//!  └─ 4. Output    completion text, or a printpdf-rendered report file
//! ```
//!
//! Every request is a stateless, synchronous round trip: no caching, no
//! retries, no shared state between invocations. The model's answer is
//! passed through untouched unless opt-in contract validation is enabled.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paperdesk::{Assistant, AssistantConfig, InputBundle};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // API key read from GROQ_API_KEY
//!     let assistant = Assistant::new(AssistantConfig::default())?;
//!
//!     let bundle = InputBundle::from_pdf_path("paper.pdf");
//!     let pdf_path = assistant.generate_report_pdf(&bundle, None).await?;
//!     println!("report written to {}", pdf_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `paperdesk` binary (clap + anyhow + tracing-subscriber) |
//! | `web`   | off     | Enables the `paperdesk-web` binary (axum form UI with PDF upload/download) |
//!
//! Disable both when using only the library:
//! ```toml
//! paperdesk = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod assistant;
pub mod config;
pub mod contract;
pub mod error;
pub mod pipeline;
pub mod prompts;

#[cfg(feature = "web")]
pub mod web;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use assistant::{Assistant, PromptContract};
pub use config::{AssistantConfig, AssistantConfigBuilder};
pub use error::AssistantError;
pub use pipeline::input::{InputBundle, PdfSource};
pub use pipeline::llm::{ChatClient, ChatMessage};
pub use pipeline::render::Flow;
