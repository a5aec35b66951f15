use chrono::Utc;

use praxis_core::config::ComplianceConfig;
use praxis_core::models::{ConsentRecord, ProcessingRecord};

use crate::ids::derive_id;
use crate::retention::{retention_date, RetentionClass};

/// Default legal basis for consent-backed processing.
pub const CONSENT_LEGAL_BASIS: &str = "Article 6(1)(a) - Consent";

/// Security measures asserted for every processing record.
const SECURITY_MEASURES: [&str; 5] = [
    "Local processing only",
    "Automatic anonymization",
    "Encrypted data storage",
    "Access logging",
    "Regular security updates",
];

/// Build a GDPR consent record. `legal_basis` defaults to
/// [`CONSENT_LEGAL_BASIS`] when not supplied.
pub fn consent_record(
    config: &ComplianceConfig,
    patient_id: &str,
    consent_type: &str,
    consent_given: bool,
    purpose: &str,
    legal_basis: Option<&str>,
) -> ConsentRecord {
    let now = Utc::now();
    ConsentRecord {
        consent_id: derive_id(&[patient_id, consent_type], &now),
        patient_id: patient_id.to_string(),
        consent_type: consent_type.to_string(),
        consent_given,
        purpose: purpose.to_string(),
        legal_basis: legal_basis.unwrap_or(CONSENT_LEGAL_BASIS).to_string(),
        withdrawal_method: config.withdrawal_method.clone(),
        data_controller: config.data_controller.clone(),
        retention_days: RetentionClass::ConsentRecords.days(),
        timestamp: now,
    }
}

/// Build an Article 30 record of a processing activity.
pub fn processing_record(
    config: &ComplianceConfig,
    activity: &str,
    patient_id: &str,
    data_types: Vec<String>,
    purpose: &str,
    legal_basis: &str,
) -> ProcessingRecord {
    let now = Utc::now();
    ProcessingRecord {
        record_id: derive_id(&[activity, patient_id], &now),
        activity: activity.to_string(),
        patient_id: patient_id.to_string(),
        data_types,
        purpose: purpose.to_string(),
        legal_basis: legal_basis.to_string(),
        data_controller: config.data_controller.clone(),
        data_processor: config.data_processor.clone(),
        data_location: config.data_location.clone(),
        retention_until: retention_date(RetentionClass::MedicalRecords.label(), now),
        security_measures: SECURITY_MEASURES.iter().map(|s| s.to_string()).collect(),
        timestamp: now,
    }
}
