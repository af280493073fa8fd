use serde::{Deserialize, Serialize};

use crate::analysis::domain::Severity;
use crate::config::RiskThresholds;

use super::DimensionScores;

/// Qualitative axis a risk indicator speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    FounderMisalignment,
    StagePace,
    CultureAlignment,
    BudgetMismatch,
    BelowThresholdFit,
    NoMaterialRisk,
}

impl RiskCategory {
    pub const fn label(self) -> &'static str {
        match self {
            RiskCategory::FounderMisalignment => "founder misalignment",
            RiskCategory::StagePace => "stage-pace concern",
            RiskCategory::CultureAlignment => "culture alignment concern",
            RiskCategory::BudgetMismatch => "budget mismatch",
            RiskCategory::BelowThresholdFit => "below-threshold fit",
            RiskCategory::NoMaterialRisk => "no material risk",
        }
    }
}

/// Flag raised when a dimension or the aggregate crosses a threshold.
/// Recomputed on every call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskIndicator {
    pub severity: Severity,
    pub category: RiskCategory,
    pub message: String,
}

impl RiskIndicator {
    fn new(severity: Severity, category: RiskCategory, message: String) -> Self {
        Self {
            severity,
            category,
            message,
        }
    }
}

/// Derives risk indicators from the dimension scores, most severe first.
/// Ties keep dimension declaration order. Never returns an empty list:
/// callers render a summary from at least one entry.
pub(crate) fn detect_risks(
    dimensions: &DimensionScores,
    overall_fit: u8,
    thresholds: &RiskThresholds,
) -> Vec<RiskIndicator> {
    let mut risks = Vec::new();

    // Checked in dimension declaration order so the stable severity sort
    // below yields the documented tie-break.
    if dimensions.stage_fit < thresholds.stage_pace_floor {
        risks.push(RiskIndicator::new(
            Severity::Medium,
            RiskCategory::StagePace,
            format!(
                "stage fit {} is below the pace floor {}",
                dimensions.stage_fit, thresholds.stage_pace_floor
            ),
        ));
    }
    if dimensions.culture_fit < thresholds.culture_floor {
        risks.push(RiskIndicator::new(
            Severity::Medium,
            RiskCategory::CultureAlignment,
            format!(
                "culture fit {} is below the alignment floor {}",
                dimensions.culture_fit, thresholds.culture_floor
            ),
        ));
    }
    if dimensions.founder_fit < thresholds.founder_alignment_floor {
        risks.push(RiskIndicator::new(
            Severity::High,
            RiskCategory::FounderMisalignment,
            format!(
                "founder fit {} signals misalignment with the leadership style",
                dimensions.founder_fit
            ),
        ));
    }
    // The budget rule only drops this low when expectations exceed the
    // stretch ceiling for the stage band.
    if dimensions.budget_fit < thresholds.budget_floor {
        risks.push(RiskIndicator::new(
            Severity::Medium,
            RiskCategory::BudgetMismatch,
            "compensation expectation exceeds the stage budget stretch ceiling".to_string(),
        ));
    }

    risks.sort_by_key(|risk| std::cmp::Reverse(risk.severity));

    if risks.is_empty() {
        if overall_fit < thresholds.adequate_fit_floor {
            risks.push(RiskIndicator::new(
                Severity::Medium,
                RiskCategory::BelowThresholdFit,
                format!(
                    "overall fit {} sits below the adequate floor {}",
                    overall_fit, thresholds.adequate_fit_floor
                ),
            ));
        } else {
            risks.push(RiskIndicator::new(
                Severity::Low,
                RiskCategory::NoMaterialRisk,
                "no dimension crossed a risk threshold".to_string(),
            ));
        }
    }

    risks
}
