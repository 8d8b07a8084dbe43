//! Pipeline stages for one assistant request.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap
//! implementations (e.g. switch the extraction backend) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ llm ──▶ render
//! (text/PDF) (lopdf)   (chat)  (printpdf, report mode only)
//! ```
//!
//! 1. [`input`]   — aggregate optional free text and optional PDF text into
//!    one combined prompt, enforcing "at least one source present"
//! 2. [`extract`] — pull page-ordered plain text out of a PDF; runs in
//!    `spawn_blocking` because lopdf parsing is CPU-bound
//! 3. [`llm`]     — the single chat-completion round trip; the only stage
//!    with network I/O
//! 4. [`render`]  — lay the returned report out as a paginated A4 PDF,
//!    one paragraph per line of model output

pub mod extract;
pub mod input;
pub mod llm;
pub mod render;
