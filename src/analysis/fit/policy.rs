use serde::{Deserialize, Serialize};

use crate::analysis::domain::Severity;
use crate::config::PolicyThresholds;

use super::RiskIndicator;

/// Hiring verdict for a scored candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HireRecommendation {
    StrongHire,
    Hire,
    Consider,
    Reject,
}

impl HireRecommendation {
    pub const fn label(self) -> &'static str {
        match self {
            HireRecommendation::StrongHire => "strong_hire",
            HireRecommendation::Hire => "hire",
            HireRecommendation::Consider => "consider",
            HireRecommendation::Reject => "reject",
        }
    }
}

/// Maps aggregate fit and risk indicators to a verdict. Total over every
/// (score, risk-list) pair; first matching rule wins.
pub(crate) fn recommend(
    overall_fit: u8,
    risks: &[RiskIndicator],
    thresholds: &PolicyThresholds,
) -> HireRecommendation {
    let worst_severity = risks.iter().map(|risk| risk.severity).max();

    if worst_severity == Some(Severity::High) {
        HireRecommendation::Reject
    } else if overall_fit < thresholds.reject_below {
        HireRecommendation::Reject
    } else if overall_fit >= thresholds.strong_hire_at
        && worst_severity.map_or(true, |severity| severity <= Severity::Low)
    {
        HireRecommendation::StrongHire
    } else if overall_fit >= thresholds.hire_at {
        HireRecommendation::Hire
    } else {
        HireRecommendation::Consider
    }
}
