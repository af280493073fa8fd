//! Named configuration table for every threshold, weight, and band the engine
//! uses. Rule bodies read from here instead of carrying inline constants, so a
//! threshold change never touches more than one place.

use serde::{Deserialize, Serialize};

use crate::analysis::domain::CompanyStage;
use crate::error::EngineError;

/// Aggregate-fit weight per scoring dimension.
///
/// The budget dimension is intentionally unweighted: it feeds risk detection
/// rather than the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitWeights {
    pub stage: f32,
    pub culture: f32,
    pub founder: f32,
    pub team: f32,
    pub velocity: f32,
    pub growth: f32,
    pub builder: f32,
    pub learning: f32,
}

impl FitWeights {
    pub fn sum(&self) -> f32 {
        self.stage
            + self.culture
            + self.founder
            + self.team
            + self.velocity
            + self.growth
            + self.builder
            + self.learning
    }
}

impl Default for FitWeights {
    fn default() -> Self {
        Self {
            stage: 0.15,
            culture: 0.20,
            founder: 0.15,
            team: 0.10,
            velocity: 0.10,
            growth: 0.10,
            builder: 0.15,
            learning: 0.05,
        }
    }
}

/// Compensation band for one stage, in thousands per year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBand {
    pub floor: u32,
    pub ceiling: u32,
}

/// Stage-indexed compensation bands plus the stretch multiplier tolerated
/// above a band ceiling before the budget dimension collapses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetBands {
    pub pre_seed: BudgetBand,
    pub seed: BudgetBand,
    pub series_a: BudgetBand,
    pub series_b: BudgetBand,
    pub series_c: BudgetBand,
    pub growth: BudgetBand,
    pub stretch_multiplier: f32,
}

impl BudgetBands {
    pub fn band(&self, stage: CompanyStage) -> BudgetBand {
        match stage {
            CompanyStage::PreSeed => self.pre_seed,
            CompanyStage::Seed => self.seed,
            CompanyStage::SeriesA => self.series_a,
            CompanyStage::SeriesB => self.series_b,
            CompanyStage::SeriesC => self.series_c,
            CompanyStage::Growth => self.growth,
        }
    }

    /// Ceiling after applying the stretch multiplier.
    pub fn stretch_ceiling(&self, stage: CompanyStage) -> f32 {
        self.band(stage).ceiling as f32 * self.stretch_multiplier
    }
}

impl Default for BudgetBands {
    fn default() -> Self {
        Self {
            pre_seed: BudgetBand {
                floor: 60,
                ceiling: 120,
            },
            seed: BudgetBand {
                floor: 100,
                ceiling: 180,
            },
            series_a: BudgetBand {
                floor: 150,
                ceiling: 250,
            },
            series_b: BudgetBand {
                floor: 200,
                ceiling: 350,
            },
            series_c: BudgetBand {
                floor: 250,
                ceiling: 500,
            },
            growth: BudgetBand {
                floor: 300,
                ceiling: 600,
            },
            stretch_multiplier: 1.2,
        }
    }
}

/// Floors below which a dimension raises a risk indicator, plus the success
/// probability discounts applied on top of the aggregate fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub founder_alignment_floor: u8,
    pub stage_pace_floor: u8,
    pub culture_floor: u8,
    pub budget_floor: u8,
    pub adequate_fit_floor: u8,
    pub low_runway_probability_penalty: u8,
    pub weak_stage_floor: u8,
    pub weak_stage_probability_penalty: u8,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            founder_alignment_floor: 60,
            stage_pace_floor: 65,
            culture_floor: 70,
            budget_floor: 50,
            adequate_fit_floor: 70,
            low_runway_probability_penalty: 5,
            weak_stage_floor: 50,
            weak_stage_probability_penalty: 10,
        }
    }
}

/// Verdict cutoffs for the hiring recommendation policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyThresholds {
    pub reject_below: u8,
    pub hire_at: u8,
    pub strong_hire_at: u8,
}

impl Default for PolicyThresholds {
    fn default() -> Self {
        Self {
            reject_below: 60,
            hire_at: 70,
            strong_hire_at: 85,
        }
    }
}

/// Roster-structure thresholds used by the gap analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapThresholds {
    /// Workload fraction above which a member counts as overloaded.
    pub overload_workload: f32,
    /// Roster size above which a Product Lead is expected.
    pub product_lead_roster: usize,
    /// Roster size above which Sales and Marketing Leads are expected.
    pub commercial_leads_roster: usize,
    /// Roster size above which Operations and People Leads are expected.
    pub operations_leads_roster: usize,
    pub critical_runway_months: u32,
    pub tight_runway_months: u32,
    /// High-priority gap count that, combined with tight runway, raises urgency.
    pub tight_runway_gap_count: usize,
    /// High-priority gap count that raises urgency regardless of runway.
    pub absolute_gap_count: usize,
}

impl Default for GapThresholds {
    fn default() -> Self {
        Self {
            overload_workload: 0.8,
            product_lead_roster: 2,
            commercial_leads_roster: 5,
            operations_leads_roster: 10,
            critical_runway_months: 6,
            tight_runway_months: 12,
            tight_runway_gap_count: 2,
            absolute_gap_count: 3,
        }
    }
}

/// Sub-score weights and thresholds for the team-fit simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationTuning {
    pub skill_coverage_weight: f32,
    pub velocity_weight: f32,
    pub culture_weight: f32,
    pub diversity_weight: f32,
    pub harmony_weight: f32,
    /// Points granted per uncovered skill the candidate brings.
    pub coverage_points_per_skill: u8,
    /// Harmony points deducted per detected conflict.
    pub conflict_penalty: u8,
    /// High-velocity roster share above which another fast hire adds nothing.
    pub high_velocity_saturation: f32,
    pub high_velocity_floor: f32,
    pub medium_velocity_floor: f32,
    pub close_culture_delta: f32,
    pub near_culture_delta: f32,
    pub diversity_bonus: u8,
    /// Shared-skill count beyond which a pairing counts as a strong synergy.
    pub shared_skill_synergy_min: usize,
    pub strong_hire_at: u8,
    pub good_hire_at: u8,
    pub consider_at: u8,
    /// Overall score at which the narrative highlights team velocity.
    pub velocity_highlight_at: u8,
    /// Conflict count above which the dynamics caution is graded high.
    pub conflict_caution_count: usize,
}

impl SimulationTuning {
    pub fn weight_sum(&self) -> f32 {
        self.skill_coverage_weight
            + self.velocity_weight
            + self.culture_weight
            + self.diversity_weight
            + self.harmony_weight
    }
}

impl Default for SimulationTuning {
    fn default() -> Self {
        Self {
            skill_coverage_weight: 0.30,
            velocity_weight: 0.20,
            culture_weight: 0.25,
            diversity_weight: 0.15,
            harmony_weight: 0.10,
            coverage_points_per_skill: 20,
            conflict_penalty: 10,
            high_velocity_saturation: 0.95,
            high_velocity_floor: 0.70,
            medium_velocity_floor: 0.30,
            close_culture_delta: 10.0,
            near_culture_delta: 20.0,
            diversity_bonus: 15,
            shared_skill_synergy_min: 2,
            strong_hire_at: 85,
            good_hire_at: 75,
            consider_at: 60,
            velocity_highlight_at: 80,
            conflict_caution_count: 2,
        }
    }
}

/// Full engine configuration. `Default` reproduces the canonical rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub weights: FitWeights,
    pub budgets: BudgetBands,
    pub risk: RiskThresholds,
    pub policy: PolicyThresholds,
    pub gaps: GapThresholds,
    pub simulation: SimulationTuning,
    /// Canonical skills every funded company is expected to cover.
    pub required_skills: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: FitWeights::default(),
            budgets: BudgetBands::default(),
            risk: RiskThresholds::default(),
            policy: PolicyThresholds::default(),
            gaps: GapThresholds::default(),
            simulation: SimulationTuning::default(),
            required_skills: [
                "frontend development",
                "backend development",
                "system design",
                "product strategy",
                "UI/UX",
                "data analysis",
                "sales",
                "marketing",
                "devops",
                "security",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

const WEIGHT_TOLERANCE: f32 = 1e-4;

impl EngineConfig {
    /// Parses a configuration override; unspecified sections keep the
    /// canonical defaults.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| EngineError::invalid("engine configuration", err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects weight tables that no longer describe a weighted average.
    pub fn validate(&self) -> Result<(), EngineError> {
        if (self.weights.sum() - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(EngineError::invalid(
                "weights",
                format!("fit weights sum to {}, expected 1.0", self.weights.sum()),
            ));
        }
        if (self.simulation.weight_sum() - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(EngineError::invalid(
                "simulation",
                format!(
                    "simulation weights sum to {}, expected 1.0",
                    self.simulation.weight_sum()
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((FitWeights::default().sum() - 1.0).abs() < WEIGHT_TOLERANCE);
        assert!((SimulationTuning::default().weight_sum() - 1.0).abs() < WEIGHT_TOLERANCE);
    }

    #[test]
    fn default_config_passes_validation() {
        EngineConfig::default().validate().expect("valid defaults");
    }

    #[test]
    fn json_override_keeps_unspecified_sections() {
        let config = EngineConfig::from_json(r#"{"policy": {"strong_hire_at": 90}}"#)
            .expect("valid override");
        assert_eq!(config.policy.strong_hire_at, 90);
        assert_eq!(config.policy.hire_at, 70);
        assert_eq!(config.budgets.seed.ceiling, 180);
    }

    #[test]
    fn unbalanced_weights_are_rejected() {
        let result = EngineConfig::from_json(r#"{"weights": {"culture": 0.9}}"#);
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { field: "weights", .. })
        ));
    }

    #[test]
    fn budget_band_lookup_matches_stage() {
        let bands = BudgetBands::default();
        assert_eq!(bands.band(CompanyStage::SeriesB).ceiling, 350);
        assert!((bands.stretch_ceiling(CompanyStage::Seed) - 216.0).abs() < f32::EPSILON);
    }
}
