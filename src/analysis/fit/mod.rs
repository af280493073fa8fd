//! Candidate-to-organization compatibility scoring, risk derivation, and the
//! hiring recommendation policy.

mod policy;
mod risk;
mod rules;

#[cfg(test)]
mod tests;

pub use policy::HireRecommendation;
pub use risk::{RiskCategory, RiskIndicator};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::domain::{CandidateProfile, OrganizationalProfile, TeamMember};
use crate::analysis::gaps::SkillCoverage;
use crate::config::EngineConfig;
use crate::error::EngineError;

/// One named axis of candidate-organization compatibility. Declaration order
/// is the documented tie-break order for risk listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FitDimension {
    StageFit,
    CultureFit,
    FounderFit,
    TeamFit,
    VelocityFit,
    GrowthFit,
    BudgetFit,
    BuilderMindset,
    LearningSpeed,
}

impl FitDimension {
    pub const ALL: [FitDimension; 9] = [
        FitDimension::StageFit,
        FitDimension::CultureFit,
        FitDimension::FounderFit,
        FitDimension::TeamFit,
        FitDimension::VelocityFit,
        FitDimension::GrowthFit,
        FitDimension::BudgetFit,
        FitDimension::BuilderMindset,
        FitDimension::LearningSpeed,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            FitDimension::StageFit => "stageFit",
            FitDimension::CultureFit => "cultureFit",
            FitDimension::FounderFit => "founderFit",
            FitDimension::TeamFit => "teamFit",
            FitDimension::VelocityFit => "velocityFit",
            FitDimension::GrowthFit => "growthFit",
            FitDimension::BudgetFit => "budgetFit",
            FitDimension::BuilderMindset => "builderMindset",
            FitDimension::LearningSpeed => "learningSpeed",
        }
    }
}

/// Per-dimension scores. Every dimension is present by construction and
/// every value stays in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub stage_fit: u8,
    pub culture_fit: u8,
    pub founder_fit: u8,
    pub team_fit: u8,
    pub velocity_fit: u8,
    pub growth_fit: u8,
    pub budget_fit: u8,
    pub builder_mindset: u8,
    pub learning_speed: u8,
}

impl DimensionScores {
    pub fn get(&self, dimension: FitDimension) -> u8 {
        match dimension {
            FitDimension::StageFit => self.stage_fit,
            FitDimension::CultureFit => self.culture_fit,
            FitDimension::FounderFit => self.founder_fit,
            FitDimension::TeamFit => self.team_fit,
            FitDimension::VelocityFit => self.velocity_fit,
            FitDimension::GrowthFit => self.growth_fit,
            FitDimension::BudgetFit => self.budget_fit,
            FitDimension::BuilderMindset => self.builder_mindset,
            FitDimension::LearningSpeed => self.learning_speed,
        }
    }

    /// Yields dimension scores in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FitDimension, u8)> + '_ {
        FitDimension::ALL
            .into_iter()
            .map(|dimension| (dimension, self.get(dimension)))
    }
}

/// Scoring output for one candidate against one organizational profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitReport {
    pub dimensions: DimensionScores,
    pub overall_fit: u8,
    pub success_probability: u8,
}

/// Full evaluation trail handed to the orchestration layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEvaluation {
    pub report: FitReport,
    pub risks: Vec<RiskIndicator>,
    pub recommendation: HireRecommendation,
}

/// Stateless scorer applying the rubric from [`EngineConfig`].
pub struct FitEngine {
    config: EngineConfig,
}

impl FitEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Scores one candidate. The roster feeds the complementary-skill
    /// dimension; an empty roster means every candidate skill is new.
    pub fn score(
        &self,
        candidate: &CandidateProfile,
        profile: &OrganizationalProfile,
        roster: &[TeamMember],
    ) -> Result<FitReport, EngineError> {
        candidate.validate()?;
        for member in roster {
            member.validate()?;
        }

        let coverage = SkillCoverage::from_roster(roster);
        let dimensions = DimensionScores {
            stage_fit: rules::score_stage(candidate, profile),
            culture_fit: rules::score_culture(candidate, profile),
            founder_fit: rules::score_founder(candidate, profile),
            team_fit: rules::score_team(candidate, &coverage),
            velocity_fit: rules::score_velocity(candidate, profile),
            growth_fit: rules::score_growth(candidate, profile),
            budget_fit: rules::score_budget(candidate, profile, &self.config.budgets),
            builder_mindset: rules::score_builder(candidate),
            learning_speed: rules::LEARNING_SPEED_BASELINE,
        };

        let overall_fit = self.aggregate(&dimensions);
        let success_probability = self.success_probability(overall_fit, &dimensions, profile);

        Ok(FitReport {
            dimensions,
            overall_fit,
            success_probability,
        })
    }

    /// Risk indicators for an already scored report, most severe first.
    pub fn risks(&self, report: &FitReport) -> Vec<RiskIndicator> {
        risk::detect_risks(&report.dimensions, report.overall_fit, &self.config.risk)
    }

    /// Verdict for a scored report and its risk listing.
    pub fn recommend(&self, report: &FitReport, risks: &[RiskIndicator]) -> HireRecommendation {
        policy::recommend(report.overall_fit, risks, &self.config.policy)
    }

    /// Composes score, risk detection, and recommendation into one call.
    pub fn evaluate(
        &self,
        candidate: &CandidateProfile,
        profile: &OrganizationalProfile,
        roster: &[TeamMember],
    ) -> Result<CandidateEvaluation, EngineError> {
        let report = self.score(candidate, profile, roster)?;
        let risks = self.risks(&report);
        let recommendation = self.recommend(&report, &risks);

        debug!(
            candidate = %candidate.name,
            overall_fit = report.overall_fit,
            success_probability = report.success_probability,
            recommendation = recommendation.label(),
            "candidate evaluation complete"
        );

        Ok(CandidateEvaluation {
            report,
            risks,
            recommendation,
        })
    }

    fn aggregate(&self, dimensions: &DimensionScores) -> u8 {
        let w = &self.config.weights;
        let weighted = f32::from(dimensions.stage_fit) * w.stage
            + f32::from(dimensions.culture_fit) * w.culture
            + f32::from(dimensions.founder_fit) * w.founder
            + f32::from(dimensions.team_fit) * w.team
            + f32::from(dimensions.velocity_fit) * w.velocity
            + f32::from(dimensions.growth_fit) * w.growth
            + f32::from(dimensions.builder_mindset) * w.builder
            + f32::from(dimensions.learning_speed) * w.learning;
        weighted.round().clamp(0.0, 100.0) as u8
    }

    fn success_probability(
        &self,
        overall_fit: u8,
        dimensions: &DimensionScores,
        profile: &OrganizationalProfile,
    ) -> u8 {
        let thresholds = &self.config.risk;
        let mut probability = i16::from(overall_fit);
        if profile.has_risk_tag("low_runway") {
            probability -= i16::from(thresholds.low_runway_probability_penalty);
        }
        if dimensions.stage_fit < thresholds.weak_stage_floor {
            probability -= i16::from(thresholds.weak_stage_probability_penalty);
        }
        probability.clamp(0, 100) as u8
    }
}
