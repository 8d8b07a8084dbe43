//! Report rendering: lay the model's report text out as a paginated A4 PDF.
//!
//! The layout model mirrors a classic "story" document builder: the report is
//! split on line breaks, each non-blank line becomes one paragraph flowable,
//! and each blank line becomes an explicit break marker. [`build_story`] is a
//! pure function so the paragraph sequence can be asserted in tests without
//! parsing PDF output; [`render_report`] then walks the story down the page
//! with greedy word wrapping, starting a new page whenever the cursor passes
//! the bottom margin.
//!
//! Text is drawn literally — angle brackets, ampersands, and markdown
//! punctuation in the model's prose land on the page as-is rather than being
//! interpreted as markup.
//!
//! Each request gets a uniquely named output file unless the caller supplies
//! a path, so concurrent report requests can never clobber each other.

use crate::error::AssistantError;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// A4 with uniform margins; the margin matches the original layout's 40 pt.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 14.0;
const FONT_SIZE_PT: f32 = 11.0;
const LINE_HEIGHT_MM: f32 = 5.0;

/// Maximum characters per wrapped line. Helvetica at 11 pt averages just
/// under 2 mm per character, so 90 characters fit the 182 mm text column.
const MAX_LINE_CHARS: usize = 90;

/// One flowable of the report story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// A non-blank line of the report, rendered as one paragraph.
    Paragraph(String),
    /// A blank line, rendered as vertical space.
    Break,
}

/// Split report text into its paragraph sequence: one [`Flow::Paragraph`]
/// per non-blank line, one [`Flow::Break`] per blank line, in input order.
pub fn build_story(report_text: &str) -> Vec<Flow> {
    report_text
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                Flow::Break
            } else {
                Flow::Paragraph(line.to_string())
            }
        })
        .collect()
}

/// Render report text to a PDF file and return its path.
///
/// When `output_path` is given the file is written there; otherwise a
/// uniquely named `research_report_*.pdf` is created in `output_dir` (or the
/// system temp directory). The file is not cleaned up afterwards — it is the
/// caller's deliverable.
pub async fn render_report(
    report_text: &str,
    output_path: Option<&Path>,
    output_dir: Option<&Path>,
) -> Result<PathBuf, AssistantError> {
    let path = match output_path {
        Some(p) => p.to_path_buf(),
        None => unique_report_path(output_dir)?,
    };

    let story = build_story(report_text);
    debug!("Report story: {} flowables", story.len());

    let render_path = path.clone();
    tokio::task::spawn_blocking(move || render_blocking(&story, &render_path))
        .await
        .map_err(|e| AssistantError::Internal(format!("Render task panicked: {}", e)))??;

    info!("Report PDF written: {}", path.display());
    Ok(path)
}

/// Create a unique output path so concurrent requests never share a file.
fn unique_report_path(output_dir: Option<&Path>) -> Result<PathBuf, AssistantError> {
    let dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(std::env::temp_dir);

    let file = tempfile::Builder::new()
        .prefix("research_report_")
        .suffix(".pdf")
        .tempfile_in(&dir)
        .map_err(|e| AssistantError::OutputWriteFailed {
            path: dir.clone(),
            source: e,
        })?;

    file.into_temp_path()
        .keep()
        .map_err(|e| AssistantError::Internal(format!("Failed to keep temp file: {}", e)))
}

/// Blocking implementation of the page layout.
fn render_blocking(story: &[Flow], path: &Path) -> Result<(), AssistantError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Research Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AssistantError::RenderFailed {
            detail: e.to_string(),
        })?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut cursor = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM;

    for flow in story {
        match flow {
            Flow::Break => {
                cursor -= LINE_HEIGHT_MM;
            }
            Flow::Paragraph(text) => {
                for line in wrap_line(text, MAX_LINE_CHARS) {
                    if cursor < MARGIN_MM {
                        let (page, page_layer) =
                            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
                        layer = doc.get_page(page).get_layer(page_layer);
                        cursor = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM;
                    }
                    layer.use_text(line, FONT_SIZE_PT, Mm(MARGIN_MM), Mm(cursor), &font);
                    cursor -= LINE_HEIGHT_MM;
                }
            }
        }
    }

    let file = File::create(path).map_err(|e| AssistantError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    doc.save(&mut BufWriter::new(file))
        .map_err(|e| AssistantError::RenderFailed {
            detail: e.to_string(),
        })
}

/// Greedy word wrap. Words longer than `max_chars` are hard-split so a
/// pathological token (a long URL, say) cannot overflow the text column.
fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            let split_at = word
                .char_indices()
                .nth(max_chars)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word[..split_at].to_string());
            word = &word[split_at..];
        }

        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
