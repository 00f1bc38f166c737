//! Title to summary classification.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::rules::RuleSet;
use crate::errors::SummaryError;

/// Hard cap on the generated summary, in characters.
pub const MAX_SUMMARY_CHARS: usize = 150;

/// Marker appended when text is cut short.
pub const ELLIPSIS: &str = "...";

/// Fallback summaries keep at most this many words of the title.
pub const FALLBACK_WORD_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub summary: String,
    pub original_title: String,
}

/// Classifies with the built-in rule table.
pub fn classify(title: &str) -> Result<Summary, SummaryError> {
    RuleSet::builtin().classify(title)
}

/// Classifies a raw JSON `title` value. Missing, `null`, non-string and blank
/// values are rejected.
pub fn classify_value(title: Option<&Value>) -> Result<Summary, SummaryError> {
    RuleSet::builtin().classify_value(title)
}

impl RuleSet {
    pub fn classify(&self, title: &str) -> Result<Summary, SummaryError> {
        let clean = title.trim();
        if clean.is_empty() {
            return Err(SummaryError::Validation);
        }

        let lowered = clean.to_lowercase();
        let summary = match self.first_match(&lowered) {
            Some(rule) => rule.render(clean),
            None => fallback_summary(clean),
        };
        debug!(summary_chars = summary.chars().count(), "Generated summary");

        Ok(Summary {
            summary: cap_length(summary),
            original_title: clean.to_string(),
        })
    }

    pub fn classify_value(&self, title: Option<&Value>) -> Result<Summary, SummaryError> {
        self.classify(title_from_value(title)?)
    }
}

/// Extracts a usable title from a JSON value, untrimmed.
pub fn title_from_value(title: Option<&Value>) -> Result<&str, SummaryError> {
    match title.and_then(Value::as_str) {
        Some(title) if !title.trim().is_empty() => Ok(title),
        _ => Err(SummaryError::Validation),
    }
}

fn fallback_summary(title: &str) -> String {
    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() > FALLBACK_WORD_LIMIT {
        format!("Task: {}{ELLIPSIS}", words[..FALLBACK_WORD_LIMIT].join(" "))
    } else {
        format!("Task: {title}")
    }
}

fn cap_length(summary: String) -> String {
    if summary.chars().count() <= MAX_SUMMARY_CHARS {
        return summary;
    }
    let keep = MAX_SUMMARY_CHARS - ELLIPSIS.len();
    let mut capped: String = summary.chars().take(keep).collect();
    capped.push_str(ELLIPSIS);
    capped
}
