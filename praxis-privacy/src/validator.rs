use chrono::Utc;

use praxis_core::constants::{FULL_AUDIT_PENALTY, REDACTION_CHECK_PENALTY};
use praxis_core::errors::PraxisResult;
use praxis_core::models::{ComplianceAudit, Finding, RedactionCheck};
use praxis_core::traits::IValidator;

use crate::patterns;

/// Stateless leak validator over the shared category catalog.
pub struct AnonymizationValidator;

impl AnonymizationValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnonymizationValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl IValidator for AnonymizationValidator {
    fn validate_redaction(&self, original: &str, candidate: &str) -> PraxisResult<RedactionCheck> {
        tracing::trace!(original_len = original.len(), "auditing redacted candidate");

        let mut potential_issues: Vec<String> = Vec::new();
        for (_, rules) in patterns::catalog() {
            for rule in rules.iter().filter(|r| r.reduced_audit) {
                let Some(re) = rule.regex() else { continue };
                potential_issues.extend(re.find_iter(candidate).map(|m| m.as_str().to_string()));
            }
        }

        let penalty = (potential_issues.len() as u32).saturating_mul(REDACTION_CHECK_PENALTY);
        let score = 100u32.saturating_sub(penalty) as u8;
        tracing::debug!(issues = potential_issues.len(), score, "redaction check done");

        Ok(RedactionCheck {
            is_valid: potential_issues.is_empty(),
            score,
            potential_issues,
        })
    }

    fn validate_full(&self, text: &str) -> PraxisResult<ComplianceAudit> {
        let mut findings: Vec<Finding> = Vec::new();
        let mut total = 0usize;

        for (category, rules) in patterns::catalog() {
            let mut matches: Vec<String> = Vec::new();
            for rule in rules.iter().filter(|r| r.full_audit) {
                let Some(re) = rule.regex() else { continue };
                matches.extend(re.find_iter(text).map(|m| m.as_str().to_string()));
            }
            if !matches.is_empty() {
                total += matches.len();
                findings.push(Finding {
                    category,
                    severity: category.severity(),
                    matches,
                });
            }
        }

        let penalty = (total as u32).saturating_mul(FULL_AUDIT_PENALTY);
        let confidence_score = 100u32.saturating_sub(penalty) as u8;
        tracing::debug!(total, confidence_score, "compliance audit done");

        Ok(ComplianceAudit {
            is_anonymized: findings.is_empty(),
            confidence_score,
            findings,
            checked_at: Utc::now(),
        })
    }
}
