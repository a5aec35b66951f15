use crate::errors::PraxisResult;
use crate::models::{ComplianceAudit, RedactionCheck, ValidationScope, ValidationSummary};

/// Leak detection over (possibly redacted) text.
///
/// The two checks are distinct named operations with different category
/// coverage and scoring constants; they must not be merged.
pub trait IValidator: Send + Sync {
    /// Reduced-scope check of a redaction result. `original` is accepted
    /// for diffing context; only `candidate` is inspected, against the
    /// high-precision rule subset (name, address, email).
    fn validate_redaction(&self, original: &str, candidate: &str) -> PraxisResult<RedactionCheck>;

    /// Full-catalog compliance audit of a single text: every category,
    /// severity per finding, penalty 15 per match.
    fn validate_full(&self, text: &str) -> PraxisResult<ComplianceAudit>;

    /// Scope-dispatching entry point folding either report into the
    /// common summary shape.
    fn validate(&self, text: &str, scope: ValidationScope) -> PraxisResult<ValidationSummary> {
        match scope {
            ValidationScope::Reduced => {
                Ok(self.validate_redaction(text, text)?.into_summary())
            }
            ValidationScope::Full => Ok(self.validate_full(text)?.into_summary()),
        }
    }
}
