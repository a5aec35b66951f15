use chrono::Utc;

use praxis_core::config::ComplianceConfig;
use praxis_core::models::{
    AutomatedDecisionDisclosure, ControllerContact, PrivacyNotice, RightsRequestType,
};

use crate::retention::RetentionClass;

/// Generate a GDPR privacy notice from the compliance config, the fixed
/// legal-basis vocabulary, and the retention table.
pub fn privacy_notice(config: &ComplianceConfig) -> PrivacyNotice {
    PrivacyNotice {
        data_controller: ControllerContact {
            name: config.data_controller.clone(),
            contact: "Contact your clinic administration".to_string(),
            dpo_contact: "Data Protection Officer (if applicable)".to_string(),
        },
        purposes: vec![
            "Medical diagnosis support".to_string(),
            "Treatment recommendations".to_string(),
            "Medical record summarization".to_string(),
            "Appointment scheduling".to_string(),
            "Quality improvement".to_string(),
        ],
        legal_bases: vec![
            "Article 6(1)(a) - Consent".to_string(),
            "Article 6(1)(c) - Legal obligation".to_string(),
            "Article 9(2)(h) - Healthcare provision".to_string(),
        ],
        data_types: vec![
            "Medical symptoms (anonymized)".to_string(),
            "Treatment history (anonymized)".to_string(),
            "Age range and gender".to_string(),
            "Medical consultation notes (anonymized)".to_string(),
        ],
        retention_summary: RetentionClass::ALL
            .iter()
            .map(|c| format!("{}: {} days", c.label(), c.days()))
            .collect(),
        data_subject_rights: RightsRequestType::ALL
            .iter()
            .map(|t| t.legal_basis().to_string())
            .collect(),
        security_measures: vec![
            "Local processing only - no cloud storage".to_string(),
            "Automatic data anonymization".to_string(),
            "Encrypted data storage".to_string(),
            "Access control and logging".to_string(),
            "Regular security updates".to_string(),
        ],
        data_transfers: "No international data transfers - all processing is local".to_string(),
        automated_decision_making: AutomatedDecisionDisclosure {
            exists: true,
            description: "AI-assisted medical diagnosis support".to_string(),
            safeguards: vec![
                "Human oversight required".to_string(),
                "Professional medical judgment mandatory".to_string(),
                "Confidence levels provided".to_string(),
                "Medical disclaimers shown".to_string(),
            ],
        },
        last_updated: Utc::now(),
    }
}
