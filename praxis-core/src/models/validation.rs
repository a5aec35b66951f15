use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Severity};

/// Which rule subset a validation run covers.
///
/// The two scopes are not interchangeable: they differ in category
/// coverage and in the score penalty per match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationScope {
    /// High-precision subset (name, address, email), penalty 10 per match.
    /// Suited to auditing already-redacted text without flagging its own
    /// placeholders.
    Reduced,
    /// Every catalog category, penalty 15 per match, severity per finding.
    Full,
}

/// One category with at least one leaked match, as reported by the full
/// compliance audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub category: Category,
    pub severity: Severity,
    pub matches: Vec<String>,
}

/// Report of a full-catalog compliance audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceAudit {
    pub is_anonymized: bool,
    /// `max(0, 100 - 15 * total leaked matches)`.
    pub confidence_score: u8,
    pub findings: Vec<Finding>,
    pub checked_at: DateTime<Utc>,
}

impl ComplianceAudit {
    /// Total leaked matches across all findings.
    pub fn total_matches(&self) -> usize {
        self.findings.iter().map(|f| f.matches.len()).sum()
    }

    pub fn into_summary(self) -> ValidationSummary {
        ValidationSummary {
            scope: ValidationScope::Full,
            is_clean: self.is_anonymized,
            score: self.confidence_score,
            leaked: self
                .findings
                .into_iter()
                .flat_map(|f| f.matches)
                .collect(),
        }
    }
}

/// Report of the reduced post-redaction check.
///
/// Category information is not retained; only the leaked literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionCheck {
    pub is_valid: bool,
    /// `max(0, 100 - 10 * leaked matches)`.
    pub score: u8,
    pub potential_issues: Vec<String>,
}

impl RedactionCheck {
    pub fn into_summary(self) -> ValidationSummary {
        ValidationSummary {
            scope: ValidationScope::Reduced,
            is_clean: self.is_valid,
            score: self.score,
            leaked: self.potential_issues,
        }
    }
}

/// Scope-tagged common shape of either validation report, produced by the
/// dispatching `validate(text, scope)` entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub scope: ValidationScope,
    pub is_clean: bool,
    pub score: u8,
    pub leaked: Vec<String>,
}
