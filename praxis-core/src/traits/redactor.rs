use crate::errors::PraxisResult;
use crate::models::RedactedText;

/// Text de-identification.
///
/// Implementations are pure transforms over an immutable pattern catalog:
/// no I/O, no locks, safe to call from any number of parallel callers.
pub trait IRedactor: Send + Sync {
    /// Replace identifying substrings with numbered placeholders and
    /// return the transformed text plus the full replacement ledger.
    ///
    /// Never fails on unmatched input; zero matches is success with an
    /// empty ledger.
    fn redact(&self, text: &str) -> PraxisResult<RedactedText>;
}
