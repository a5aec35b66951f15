pub mod category;
pub mod compliance;
pub mod redaction;
pub mod validation;

pub use category::{Category, Severity};
pub use compliance::{
    AutomatedDecisionDisclosure, ConsentRecord, ControllerContact, DataSensitivity, DataVolume,
    ImpactAssessment, PrivacyNotice, ProcessingRecord, RightsRequest, RightsRequestOutcome,
    RightsRequestType, RiskLevel, UnknownRightsRequest,
};
pub use redaction::{Match, RedactedText};
pub use validation::{
    ComplianceAudit, Finding, RedactionCheck, ValidationScope, ValidationSummary,
};
