use std::collections::HashMap;

use praxis_core::errors::PraxisResult;
use praxis_core::models::{Category, Match, RedactedText};
use praxis_core::traits::IRedactor;

use crate::patterns;

/// Stateless redaction engine over the shared category catalog.
///
/// Pure transform, no I/O; safe to share across threads.
pub struct RedactionEngine;

impl RedactionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Hash of an anonymized text for deduplication by the caller.
    pub fn content_hash(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }
}

impl Default for RedactionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IRedactor for RedactionEngine {
    /// For each category in catalog order, each rule is scanned against
    /// the working text as it stands when the rule starts. Every match
    /// gets the next 1-based sequence number of its category and replaces
    /// the first occurrence of the matched literal in the working text.
    ///
    /// Replacement is by first-occurrence substitution, not by offset: if
    /// the same literal appears twice, each detected match consumes the
    /// next remaining occurrence. Ledger offsets are resolved against the
    /// original text via occurrence counting.
    fn redact(&self, text: &str) -> PraxisResult<RedactedText> {
        let mut working = text.to_string();
        let mut ledger: Vec<Match> = Vec::new();
        let mut counters: HashMap<Category, usize> = HashMap::new();
        let mut occurrences: HashMap<String, usize> = HashMap::new();

        for (category, rules) in patterns::catalog() {
            for rule in rules {
                let Some(re) = rule.regex() else { continue };
                let snapshot = working.clone();
                for m in re.find_iter(&snapshot) {
                    let literal = m.as_str();

                    let seq = counters.entry(category).or_insert(0);
                    *seq += 1;
                    let placeholder = format!("[{}_{}]", category.tag(), seq);

                    let occ = occurrences.entry(literal.to_string()).or_insert(0);
                    let (start, end) = span_in_original(text, literal, *occ)
                        .unwrap_or((m.start(), m.end()));
                    *occ += 1;

                    ledger.push(Match {
                        category,
                        original: literal.to_string(),
                        placeholder: placeholder.clone(),
                        start,
                        end,
                    });
                    working = working.replacen(literal, &placeholder, 1);
                }
            }
        }

        tracing::debug!(replacements = ledger.len(), "redaction complete");
        Ok(RedactedText {
            text: working,
            ledger,
        })
    }
}

/// Byte span of the `occurrence`-th (0-based) appearance of `literal` in
/// the original text. `None` when the literal only exists in the working
/// text (e.g. a span straddling an earlier placeholder).
fn span_in_original(original: &str, literal: &str, occurrence: usize) -> Option<(usize, usize)> {
    let mut from = 0;
    let mut remaining = occurrence;
    loop {
        let found = original[from..].find(literal)? + from;
        if remaining == 0 {
            return Some((found, found + literal.len()));
        }
        remaining -= 1;
        from = found + literal.len();
    }
}
