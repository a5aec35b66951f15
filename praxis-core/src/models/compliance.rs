use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// GDPR-compliant consent record. Constructed on demand, immediately
/// returned to the caller; persistence is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsentRecord {
    /// First 16 hex characters of a hash over `patient_id|consent_type|timestamp`.
    pub consent_id: String,
    pub patient_id: String,
    pub consent_type: String,
    pub consent_given: bool,
    pub purpose: String,
    pub legal_basis: String,
    pub withdrawal_method: String,
    pub data_controller: String,
    pub retention_days: i64,
    pub timestamp: DateTime<Utc>,
}

/// Article 30 record of a processing activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingRecord {
    pub record_id: String,
    pub activity: String,
    pub patient_id: String,
    pub data_types: Vec<String>,
    pub purpose: String,
    pub legal_basis: String,
    pub data_controller: String,
    pub data_processor: String,
    pub data_location: String,
    pub retention_until: DateTime<Utc>,
    pub security_measures: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// The data-subject rights a request can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RightsRequestType {
    Access,
    Rectification,
    Erasure,
    RestrictProcessing,
    DataPortability,
    Object,
    WithdrawConsent,
}

impl RightsRequestType {
    pub const ALL: [RightsRequestType; 7] = [
        RightsRequestType::Access,
        RightsRequestType::Rectification,
        RightsRequestType::Erasure,
        RightsRequestType::RestrictProcessing,
        RightsRequestType::DataPortability,
        RightsRequestType::Object,
        RightsRequestType::WithdrawConsent,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RightsRequestType::Access => "access",
            RightsRequestType::Rectification => "rectification",
            RightsRequestType::Erasure => "erasure",
            RightsRequestType::RestrictProcessing => "restrict_processing",
            RightsRequestType::DataPortability => "data_portability",
            RightsRequestType::Object => "object",
            RightsRequestType::WithdrawConsent => "withdraw_consent",
        }
    }

    /// The GDPR article granting this right.
    pub fn legal_basis(self) -> &'static str {
        match self {
            RightsRequestType::Access => "Article 15 - Right of access",
            RightsRequestType::Rectification => "Article 16 - Right to rectification",
            RightsRequestType::Erasure => "Article 17 - Right to erasure",
            RightsRequestType::RestrictProcessing => {
                "Article 18 - Right to restriction of processing"
            }
            RightsRequestType::DataPortability => "Article 20 - Right to data portability",
            RightsRequestType::Object => "Article 21 - Right to object",
            RightsRequestType::WithdrawConsent => "Article 7(3) - Right to withdraw consent",
        }
    }
}

impl fmt::Display for RightsRequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for a rights-request type label.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown rights request type: {0}")]
pub struct UnknownRightsRequest(pub String);

impl FromStr for RightsRequestType {
    type Err = UnknownRightsRequest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RightsRequestType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownRightsRequest(s.to_string()))
    }
}

/// An accepted data-subject rights request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RightsRequest {
    pub request_id: String,
    pub request_type: RightsRequestType,
    pub legal_basis: String,
    pub patient_id: String,
    pub response_deadline: DateTime<Utc>,
    pub timestamp: DateTime<Utc>,
}

/// Outcome of validating a rights request. An invalid type is a
/// structured value, not an error, so callers can render a user-facing
/// message without unwinding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RightsRequestOutcome {
    Valid(RightsRequest),
    Invalid {
        error: String,
        valid_types: Vec<String>,
    },
}

impl RightsRequestOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, RightsRequestOutcome::Valid(_))
    }
}

/// Sensitivity classification of the data a DPIA covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSensitivity {
    /// Article 9 special-category data (health data).
    SpecialCategory,
    Standard,
}

/// Volume classification of the processing a DPIA covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataVolume {
    LargeScale,
    Limited,
}

/// Residual risk classification of a privacy impact assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

/// Result of a privacy impact pre-assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactAssessment {
    pub dpia_required: bool,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub recommendation: String,
    pub assessment_date: DateTime<Utc>,
}

/// Contact block of the data controller in a privacy notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerContact {
    pub name: String,
    pub contact: String,
    pub dpo_contact: String,
}

/// Article 22 disclosure of automated decision making.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomatedDecisionDisclosure {
    pub exists: bool,
    pub description: String,
    pub safeguards: Vec<String>,
}

/// GDPR privacy notice, generated from the compliance config and the
/// fixed legal-basis vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacyNotice {
    pub data_controller: ControllerContact,
    pub purposes: Vec<String>,
    pub legal_bases: Vec<String>,
    pub data_types: Vec<String>,
    pub retention_summary: Vec<String>,
    pub data_subject_rights: Vec<String>,
    pub security_measures: Vec<String>,
    pub data_transfers: String,
    pub automated_decision_making: AutomatedDecisionDisclosure,
    pub last_updated: DateTime<Utc>,
}
