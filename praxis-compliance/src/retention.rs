use chrono::{DateTime, Duration, Utc};

use praxis_core::constants::DEFAULT_RETENTION_DAYS;

/// Statutory retention classes and their periods in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionClass {
    /// 7 years, German medical record retention.
    MedicalRecords,
    /// 6 years, GDPR audit log retention.
    AuditLogs,
    /// 3 years, AI interaction logs.
    AiInteractions,
    /// 7 years, consent documentation.
    ConsentRecords,
    /// 10 years, anonymized research data.
    AnonymizedData,
}

impl RetentionClass {
    pub const ALL: [RetentionClass; 5] = [
        RetentionClass::MedicalRecords,
        RetentionClass::AuditLogs,
        RetentionClass::AiInteractions,
        RetentionClass::ConsentRecords,
        RetentionClass::AnonymizedData,
    ];

    pub fn days(self) -> i64 {
        match self {
            RetentionClass::MedicalRecords => 2555,
            RetentionClass::AuditLogs => 2190,
            RetentionClass::AiInteractions => 1095,
            RetentionClass::ConsentRecords => 2555,
            RetentionClass::AnonymizedData => 3650,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RetentionClass::MedicalRecords => "medical_records",
            RetentionClass::AuditLogs => "audit_logs",
            RetentionClass::AiInteractions => "ai_interactions",
            RetentionClass::ConsentRecords => "consent_records",
            RetentionClass::AnonymizedData => "anonymized_data",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        RetentionClass::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Retention period for a data-type label. An unknown label is not an
/// error; it falls back to the longest statutory period (7 years).
pub fn retention_days(label: &str) -> i64 {
    RetentionClass::parse(label)
        .map(RetentionClass::days)
        .unwrap_or(DEFAULT_RETENTION_DAYS)
}

/// Expiry date for data of the given type created at `created`.
pub fn retention_date(label: &str, created: DateTime<Utc>) -> DateTime<Utc> {
    created + Duration::days(retention_days(label))
}

/// Expiry date for data of the given type created now.
pub fn retention_date_from_now(label: &str) -> DateTime<Utc> {
    retention_date(label, Utc::now())
}
