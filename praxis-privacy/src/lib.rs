//! # praxis-privacy
//!
//! Pattern-based de-identification for German clinical text.
//!
//! One immutable catalog of category rules drives both components:
//! [`RedactionEngine`] replaces matches with numbered placeholders and
//! returns a replacement ledger, [`AnonymizationValidator`] re-scans text
//! and scores whether identifying fragments remain.

pub mod engine;
pub mod patterns;
pub mod validator;

pub use engine::RedactionEngine;
pub use validator::AnonymizationValidator;
