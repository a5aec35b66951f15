/// Convenience alias used across the workspace.
pub type PraxisResult<T> = Result<T, PraxisError>;

/// Errors surfaced by the de-identification core.
///
/// The taxonomy is deliberately small: the core performs no I/O, an
/// invalid rights-request type is a structured outcome rather than an
/// error, and an unknown retention label silently falls back to the
/// longest period.
#[derive(Debug, thiserror::Error)]
pub enum PraxisError {
    #[error("pattern unavailable: rule '{rule}' failed to compile")]
    PatternUnavailable { rule: String },
}
