//! # praxis-core
//!
//! Foundation crate for the Praxis de-identification core.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ComplianceConfig;
pub use errors::{PraxisError, PraxisResult};
pub use models::{Category, Match, RedactedText, Severity, ValidationScope};
