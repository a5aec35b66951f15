use chrono::Utc;

use praxis_core::constants::{
    DPIA_HIGH_RISK_THRESHOLD, DPIA_MEDIUM_RISK_THRESHOLD, DPIA_REQUIRED_THRESHOLD,
    DPIA_WEIGHT_AUTOMATED_DECISIONS, DPIA_WEIGHT_HIGH_RISK_ACTIVITY, DPIA_WEIGHT_LARGE_SCALE,
    DPIA_WEIGHT_SPECIAL_CATEGORY,
};
use praxis_core::models::{DataSensitivity, DataVolume, ImpactAssessment, RiskLevel};

/// Processing activities that always count as high-risk.
const HIGH_RISK_ACTIVITIES: [&str; 3] = [
    "profiling",
    "automated_decision_making",
    "large_scale_processing",
];

/// Assess whether a processing activity requires a Data Protection
/// Impact Assessment. Additive risk score; DPIA is mandatory at 50.
pub fn assess_privacy_impact(
    activity: &str,
    sensitivity: DataSensitivity,
    volume: DataVolume,
    automated_decisions: bool,
) -> ImpactAssessment {
    let mut risk_score = 0u32;
    let mut risk_factors: Vec<String> = Vec::new();

    if HIGH_RISK_ACTIVITIES.contains(&activity) {
        risk_score += DPIA_WEIGHT_HIGH_RISK_ACTIVITY;
        risk_factors.push(format!("High-risk activity: {activity}"));
    }
    if sensitivity == DataSensitivity::SpecialCategory {
        risk_score += DPIA_WEIGHT_SPECIAL_CATEGORY;
        risk_factors.push("Special category data (health data)".to_string());
    }
    if volume == DataVolume::LargeScale {
        risk_score += DPIA_WEIGHT_LARGE_SCALE;
        risk_factors.push("Large scale data processing".to_string());
    }
    if automated_decisions {
        risk_score += DPIA_WEIGHT_AUTOMATED_DECISIONS;
        risk_factors.push("Automated decision making".to_string());
    }

    let dpia_required = risk_score >= DPIA_REQUIRED_THRESHOLD;
    let risk_level = if risk_score >= DPIA_HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if risk_score >= DPIA_MEDIUM_RISK_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    tracing::debug!(risk_score, dpia_required, "privacy impact assessed");

    ImpactAssessment {
        dpia_required,
        risk_score,
        risk_level,
        risk_factors,
        recommendation: if dpia_required {
            "Conduct DPIA before processing".to_string()
        } else {
            "DPIA not required but recommended for documentation".to_string()
        },
        assessment_date: Utc::now(),
    }
}
