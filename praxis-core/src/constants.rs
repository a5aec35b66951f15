/// Praxis core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Advisory input ceiling for redaction and validation (bytes).
///
/// The core never enforces this itself: matching runs on a linear-time
/// engine, so the bound exists to cap memory, not matching time. Callers
/// are expected to reject larger payloads at the request layer.
pub const MAX_REDACTION_INPUT_BYTES: usize = 1_048_576;

/// Score penalty per leaked match in a full-catalog compliance audit.
pub const FULL_AUDIT_PENALTY: u32 = 15;

/// Score penalty per leaked match in the reduced post-redaction check.
/// Deliberately different from [`FULL_AUDIT_PENALTY`]; callers depend on
/// the specific constants of each check.
pub const REDACTION_CHECK_PENALTY: u32 = 10;

/// Length of derived record identifiers (hex characters).
pub const DERIVED_ID_HEX_LEN: usize = 16;

/// Statutory response deadline for data-subject rights requests (days).
pub const RIGHTS_RESPONSE_DEADLINE_DAYS: i64 = 30;

/// Fallback retention period when a data-type label is unknown (days).
/// Favors over-retention over under-retention: 7 years, the longest
/// statutory period for German medical records.
pub const DEFAULT_RETENTION_DAYS: i64 = 2555;

// ── DPIA scoring ──────────────────────────────────────────────────────────

/// Risk score contributed by a high-risk processing activity.
pub const DPIA_WEIGHT_HIGH_RISK_ACTIVITY: u32 = 30;
/// Risk score contributed by special-category (health) data.
pub const DPIA_WEIGHT_SPECIAL_CATEGORY: u32 = 25;
/// Risk score contributed by large-scale processing volume.
pub const DPIA_WEIGHT_LARGE_SCALE: u32 = 20;
/// Risk score contributed by automated decision making.
pub const DPIA_WEIGHT_AUTOMATED_DECISIONS: u32 = 25;

/// Score at or above which a DPIA is mandatory.
pub const DPIA_REQUIRED_THRESHOLD: u32 = 50;
/// Score at or above which residual risk is classified high.
pub const DPIA_HIGH_RISK_THRESHOLD: u32 = 70;
/// Score at or above which residual risk is classified medium.
pub const DPIA_MEDIUM_RISK_THRESHOLD: u32 = 40;
