use serde::{Deserialize, Serialize};

use super::Category;

/// A single detected occurrence of identifying data.
///
/// `start`/`end` are byte offsets into the *original* text, not the
/// progressively edited working text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub category: Category,
    /// The literal substring that was detected.
    pub original: String,
    /// The placeholder it was replaced with, e.g. `[NAME_1]`.
    pub placeholder: String,
    pub start: usize,
    pub end: usize,
}

/// Result of one redaction run: the anonymized text plus the full
/// replacement ledger.
///
/// Ledger order equals catalog order, then left-to-right match order
/// within a category. Two entries may reference overlapping source spans
/// when two categories match the same substring; this is tolerated, not
/// de-duplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactedText {
    pub text: String,
    pub ledger: Vec<Match>,
}

impl RedactedText {
    /// Number of replacements made in this run.
    pub fn replacement_count(&self) -> usize {
        self.ledger.len()
    }
}
