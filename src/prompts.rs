//! System prompts for the finder and report contracts.
//!
//! Centralising every prompt here serves two purposes:
//!
//! 1. **Single source of truth** — the output contracts (the seven-field
//!    citation record, the eleven report sections, the literal fallback
//!    sentence) live in exactly one reviewable, versionable place.
//!
//! 2. **Testability** — unit tests and the [`crate::contract`] validators can
//!    import these constants directly without calling a real model.
//!
//! Callers can override the active prompt via
//! [`crate::config::AssistantConfig::system_prompt`]; the constants here are
//! used only when no override is provided.

/// System prompt for the paper-finder contract.
///
/// The model must answer with exactly one of two shapes: the seven-field
/// citation record, or [`FALLBACK_SENTENCE`] verbatim.
pub const FINDER_SYSTEM_PROMPT: &str = r#"You are a Research Paper Finder Agent.

CASE 1 — Research Papers Exist:
- Select the most recent paper.
- If multiple, choose highest citation count.
- Return ONLY ONE paper.

STRICT FORMAT:

Research Paper Title:
Authors:
Publication Year:
Journal / Conference:
Research Paper Link:
Reference Link:
Reason for Selection:

CASE 2 — No Research Papers Exist:
Return exactly:
The text you have provided does not correspond to any available research papers at this time.

Rules:
- Do not hallucinate
- Do not add extra text
- If unsure → CASE 2"#;

/// System prompt for the report contract.
pub const REPORT_SYSTEM_PROMPT: &str = r#"You are a professional Research Assistant.

Input may include TEXT, PDF, or both.
Always generate a structured academic report.

MANDATORY STRUCTURE:
Title
Abstract
Introduction
Methodology
Results
Discussion
Limitations
Research Gaps
Future Work
Potential Research Scope
References

Rules:
- No hallucination
- Simple, professional language
- One report only"#;

/// The literal CASE 2 response required when no matching paper exists.
pub const FALLBACK_SENTENCE: &str =
    "The text you have provided does not correspond to any available research papers at this time.";

/// The seven field labels of the finder citation record, in mandated order.
pub const FINDER_FIELDS: [&str; 7] = [
    "Research Paper Title:",
    "Authors:",
    "Publication Year:",
    "Journal / Conference:",
    "Research Paper Link:",
    "Reference Link:",
    "Reason for Selection:",
];

/// The eleven mandated report section headers, in mandated order.
pub const REPORT_SECTIONS: [&str; 11] = [
    "Title",
    "Abstract",
    "Introduction",
    "Methodology",
    "Results",
    "Discussion",
    "Limitations",
    "Research Gaps",
    "Future Work",
    "Potential Research Scope",
    "References",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finder_prompt_embeds_fallback_sentence() {
        assert!(FINDER_SYSTEM_PROMPT.contains(FALLBACK_SENTENCE));
    }

    #[test]
    fn finder_prompt_embeds_all_fields() {
        for field in FINDER_FIELDS {
            assert!(FINDER_SYSTEM_PROMPT.contains(field), "missing {field:?}");
        }
    }

    #[test]
    fn report_prompt_embeds_all_sections_in_order() {
        let mut cursor = 0;
        for section in REPORT_SECTIONS {
            let pos = REPORT_SYSTEM_PROMPT[cursor..]
                .find(section)
                .unwrap_or_else(|| panic!("missing section {section:?}"));
            cursor += pos + section.len();
        }
    }
}
