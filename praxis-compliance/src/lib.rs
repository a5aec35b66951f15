//! # praxis-compliance
//!
//! Stateless GDPR paperwork helpers: retention-date arithmetic, consent
//! and Article 30 processing records, data-subject rights requests, DPIA
//! pre-assessment, and privacy notices. Pure functions over constant
//! tables; nothing here persists state.

mod ids;

pub mod consent;
pub mod dpia;
pub mod notice;
pub mod retention;
pub mod rights;

pub use consent::{consent_record, processing_record};
pub use dpia::assess_privacy_impact;
pub use notice::privacy_notice;
pub use retention::{retention_date, retention_date_from_now, retention_days, RetentionClass};
pub use rights::rights_request;
