use chrono::{Duration, Utc};

use praxis_core::constants::RIGHTS_RESPONSE_DEADLINE_DAYS;
use praxis_core::models::{RightsRequest, RightsRequestOutcome, RightsRequestType};

use crate::ids::derive_id;

/// Validate and record a data-subject rights request.
///
/// An invalid `kind` yields a structured failure listing the valid
/// types; it is never an `Err`.
pub fn rights_request(kind: &str, patient_id: &str) -> RightsRequestOutcome {
    let Ok(request_type) = kind.parse::<RightsRequestType>() else {
        return RightsRequestOutcome::Invalid {
            error: format!("Invalid request type: {kind}"),
            valid_types: RightsRequestType::ALL
                .iter()
                .map(|t| t.as_str().to_string())
                .collect(),
        };
    };

    let now = Utc::now();
    RightsRequestOutcome::Valid(RightsRequest {
        request_id: derive_id(&[kind, patient_id], &now),
        request_type,
        legal_basis: request_type.legal_basis().to_string(),
        patient_id: patient_id.to_string(),
        response_deadline: now + Duration::days(RIGHTS_RESPONSE_DEADLINE_DAYS),
        timestamp: now,
    })
}
