use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of identifying data a catalog rule detects.
///
/// `ALL` is the fixed catalog priority order. Ledger ordering and the
/// validator both depend on it, so the Redactor and Validator always
/// agree on scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Name,
    Address,
    Phone,
    Email,
    GovernmentId,
    Date,
    InsuranceId,
}

impl Category {
    /// Catalog priority order.
    pub const ALL: [Category; 7] = [
        Category::Name,
        Category::Address,
        Category::Phone,
        Category::Email,
        Category::GovernmentId,
        Category::Date,
        Category::InsuranceId,
    ];

    /// Placeholder vocabulary, German per the target locale.
    /// A redaction of this category renders as `[TAG_n]`.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Name => "NAME",
            Category::Address => "ADRESSE",
            Category::Phone => "TELEFON",
            Category::Email => "EMAIL",
            Category::GovernmentId => "ID",
            Category::Date => "DATUM",
            Category::InsuranceId => "VERSICHERUNG",
        }
    }

    /// Severity of a leak in this category when found by the full audit.
    pub fn severity(self) -> Severity {
        match self {
            Category::Name | Category::Address | Category::Phone => Severity::High,
            _ => Severity::Medium,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Severity of a leaked match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
}
