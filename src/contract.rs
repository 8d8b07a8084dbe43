//! Post-hoc validation of model output against its own mandated contract.
//!
//! The prompts in [`crate::prompts`] instruct the model to produce either a
//! seven-field citation record / the literal fallback sentence (finder) or an
//! eleven-section report. Nothing upstream enforces that — the instruction
//! text is the only guardrail — so these validators give callers a cheap,
//! opt-in structural check ([`crate::config::AssistantConfig::validate_output`],
//! off by default to preserve the pass-through behaviour).

use crate::error::AssistantError;
use crate::prompts::{FALLBACK_SENTENCE, FINDER_FIELDS, REPORT_SECTIONS};
use once_cell::sync::Lazy;
use regex::Regex;

static FINDER_FIELD_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    FINDER_FIELDS
        .iter()
        .map(|field| Regex::new(&format!(r"(?m)^\s*{}", regex::escape(field))).unwrap())
        .collect()
});

static REPORT_SECTION_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    REPORT_SECTIONS
        .iter()
        // Allow markdown heading/bold decoration and list numbering in front
        // of the section name, but anchor it to a line start.
        .map(|section| {
            Regex::new(&format!(
                r"(?m)^[\s#*\d.)-]*{}\b",
                regex::escape(section)
            ))
            .unwrap()
        })
        .collect()
});

/// Check a finder completion: exactly the fallback sentence, or a record
/// carrying all seven field labels at line starts.
pub fn validate_finder(output: &str) -> Result<(), AssistantError> {
    let trimmed = output.trim();
    if trimmed == FALLBACK_SENTENCE {
        return Ok(());
    }

    for (field, re) in FINDER_FIELDS.iter().zip(FINDER_FIELD_RES.iter()) {
        if !re.is_match(trimmed) {
            return Err(AssistantError::ContractViolation {
                contract: "finder",
                detail: format!(
                    "output is neither the fallback sentence nor a citation record (missing field {:?})",
                    field
                ),
            });
        }
    }
    Ok(())
}

/// Check a report completion: all eleven mandated section headers present.
pub fn validate_report(output: &str) -> Result<(), AssistantError> {
    for (section, re) in REPORT_SECTIONS.iter().zip(REPORT_SECTION_RES.iter()) {
        if !re.is_match(output) {
            return Err(AssistantError::ContractViolation {
                contract: "report",
                detail: format!("missing section {:?}", section),
            });
        }
    }
    Ok(())
}
