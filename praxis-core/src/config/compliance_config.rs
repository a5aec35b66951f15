use serde::{Deserialize, Serialize};

/// Identity of the deployment that shows up in generated GDPR paperwork
/// (consent records, Article 30 records, privacy notices).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceConfig {
    /// The practice acting as data controller.
    pub data_controller: String,
    /// The processing system acting on the controller's behalf.
    pub data_processor: String,
    /// Where processing physically happens.
    pub data_location: String,
    /// How a patient withdraws consent.
    pub withdrawal_method: String,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            data_controller: "Medical practice (data controller)".to_string(),
            data_processor: "Praxis de-identification core (local processing)".to_string(),
            data_location: "Local device - no cloud processing".to_string(),
            withdrawal_method: "Contact clinic administration or use the patient portal"
                .to_string(),
        }
    }
}
