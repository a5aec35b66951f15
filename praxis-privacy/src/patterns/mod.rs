//! The shared category catalog.
//!
//! A fixed, ordered mapping from [`Category`] to pattern rules, compiled
//! once on first use and never mutated. Catalog order is load-bearing:
//! ledger ordering and validator scan order both derive from it.

mod rules;

pub use rules::{
    ADDRESS_RULES, DATE_RULES, EMAIL_RULES, GOVERNMENT_ID_RULES, INSURANCE_ID_RULES, NAME_RULES,
    PHONE_RULES,
};

use praxis_core::errors::{PraxisError, PraxisResult};
use praxis_core::models::Category;
use regex::Regex;
use std::sync::LazyLock;

/// One matching rule of a category.
///
/// `reduced_audit` / `full_audit` mark membership in the two validator
/// rule subsets; redaction always uses every rule.
pub struct CatalogRule {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub case_insensitive: bool,
    pub reduced_audit: bool,
    pub full_audit: bool,
}

impl CatalogRule {
    /// The compiled regex, or `None` if compilation failed at init.
    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }
}

/// The rules of one category, in evaluation order.
pub fn rules_for(category: Category) -> &'static [CatalogRule] {
    match category {
        Category::Name => &NAME_RULES,
        Category::Address => &ADDRESS_RULES,
        Category::Phone => &PHONE_RULES,
        Category::Email => &EMAIL_RULES,
        Category::GovernmentId => &GOVERNMENT_ID_RULES,
        Category::Date => &DATE_RULES,
        Category::InsuranceId => &INSURANCE_ID_RULES,
    }
}

/// Lazy, restartable sequence of `(Category, rules)` pairs in fixed
/// priority order. Identical for Redactor and Validator.
pub fn catalog() -> impl Iterator<Item = (Category, &'static [CatalogRule])> + Clone {
    Category::ALL.iter().map(|&c| (c, rules_for(c)))
}

/// Names of rules whose regex failed to compile.
pub fn compile_failures() -> Vec<&'static str> {
    catalog()
        .flat_map(|(_, rules)| rules.iter())
        .filter(|r| r.regex().is_none())
        .map(|r| r.name)
        .collect()
}

/// Fail fast if any catalog rule is unavailable.
pub fn ensure_compiled() -> PraxisResult<()> {
    match compile_failures().first() {
        None => Ok(()),
        Some(rule) => Err(PraxisError::PatternUnavailable {
            rule: rule.to_string(),
        }),
    }
}
