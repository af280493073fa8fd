//! What-if evaluation of adding one candidate to the current roster:
//! skill-gap coverage, tempo and culture balance, diversity contribution,
//! pairwise synergy/conflict signals, and a narrative impact summary.

mod narrative;
mod synergy;

#[cfg(test)]
mod tests;

pub use narrative::{ImpactTone, NarrativeEntry};
pub use synergy::{Conflict, Synergy};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::domain::{CandidateProfile, TeamMember, Velocity};
use crate::analysis::gaps::SkillCoverage;
use crate::config::EngineConfig;
use crate::error::EngineError;

/// Simulation verdict grades, distinct from the hiring policy verdicts: these
/// describe the team effect, not the standalone candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationVerdict {
    StrongHire,
    GoodHire,
    Consider,
    Risky,
}

impl SimulationVerdict {
    pub const fn message(self) -> &'static str {
        match self {
            SimulationVerdict::StrongHire => {
                "excellent addition: fills open gaps and strengthens the team"
            }
            SimulationVerdict::GoodHire => "solid addition with clear upside for the team",
            SimulationVerdict::Consider => "workable addition; weigh against other candidates",
            SimulationVerdict::Risky => "weak team effect; likely to strain the current roster",
        }
    }

    pub const fn confidence(self) -> Confidence {
        match self {
            SimulationVerdict::StrongHire | SimulationVerdict::Risky => Confidence::High,
            SimulationVerdict::GoodHire | SimulationVerdict::Consider => Confidence::Medium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Medium,
    High,
}

/// Verdict plus its fixed message and confidence tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictSummary {
    pub rating: SimulationVerdict,
    pub message: &'static str,
    pub confidence: Confidence,
}

/// Full what-if result for one candidate against one roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitSimulationResult {
    pub overall_fit_score: u8,
    pub skill_gap_coverage: u8,
    pub velocity_balance: u8,
    pub culture_alignment: u8,
    pub diversity_impact: u8,
    pub covered_gaps: Vec<String>,
    pub synergies: Vec<Synergy>,
    pub conflicts: Vec<Conflict>,
    pub verdict: VerdictSummary,
    pub impact_narrative: Vec<NarrativeEntry>,
}

/// Stateless simulator applying the tuning table from [`EngineConfig`].
pub struct TeamFitSimulator {
    config: EngineConfig,
}

impl TeamFitSimulator {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Evaluates the hypothetical effect of adding `candidate` to `roster`.
    /// The roster must be non-empty: a what-if has no meaning without an
    /// incumbent side to compare against.
    pub fn simulate(
        &self,
        candidate: &CandidateProfile,
        roster: &[TeamMember],
    ) -> Result<FitSimulationResult, EngineError> {
        candidate.validate()?;
        if roster.is_empty() {
            return Err(EngineError::MissingContext("team roster"));
        }
        for member in roster {
            member.validate()?;
        }

        let tuning = &self.config.simulation;
        let coverage = SkillCoverage::from_roster(roster);

        let covered_gaps: Vec<String> = candidate
            .skills
            .iter()
            .filter(|skill| !coverage.has_equivalent(skill))
            .cloned()
            .collect();
        let skill_gap_coverage = (covered_gaps.len() as u32
            * u32::from(tuning.coverage_points_per_skill))
        .min(100) as u8;

        let velocity_balance = self.velocity_balance(candidate, roster);
        let culture_alignment = self.culture_alignment(candidate, roster);
        let diversity_impact = self.diversity_impact(candidate, roster);

        let synergies =
            synergy::detect_synergies(candidate, roster, tuning.shared_skill_synergy_min);
        let conflicts = synergy::detect_conflicts(candidate, roster);

        let harmony = 100u32
            .saturating_sub(conflicts.len() as u32 * u32::from(tuning.conflict_penalty))
            as f32;
        let overall = f32::from(skill_gap_coverage) * tuning.skill_coverage_weight
            + f32::from(velocity_balance) * tuning.velocity_weight
            + f32::from(culture_alignment) * tuning.culture_weight
            + f32::from(diversity_impact) * tuning.diversity_weight
            + harmony * tuning.harmony_weight;
        let overall_fit_score = overall.round().clamp(0.0, 100.0) as u8;

        let rating = self.verdict(overall_fit_score, &covered_gaps);
        let impact_narrative = narrative::build_narrative(
            candidate,
            roster.len(),
            &covered_gaps,
            overall_fit_score,
            conflicts.len(),
            tuning,
        );

        debug!(
            candidate = %candidate.name,
            overall_fit_score,
            covered_gaps = covered_gaps.len(),
            conflicts = conflicts.len(),
            verdict = ?rating,
            "team-fit simulation complete"
        );

        Ok(FitSimulationResult {
            overall_fit_score,
            skill_gap_coverage,
            velocity_balance,
            culture_alignment,
            diversity_impact,
            covered_gaps,
            synergies,
            conflicts,
            verdict: VerdictSummary {
                rating,
                message: rating.message(),
                confidence: rating.confidence(),
            },
            impact_narrative,
        })
    }

    /// A fast hire helps most when the team is not already saturated with
    /// high-velocity members.
    fn velocity_balance(&self, candidate: &CandidateProfile, roster: &[TeamMember]) -> u8 {
        let tuning = &self.config.simulation;
        let total = roster.len() as f32;
        let high_share = roster
            .iter()
            .filter(|member| member.velocity == Velocity::High)
            .count() as f32
            / total;
        let medium_share = roster
            .iter()
            .filter(|member| member.velocity == Velocity::Medium)
            .count() as f32
            / total;

        if candidate.velocity == Velocity::High && high_share < tuning.high_velocity_saturation {
            95
        } else if high_share < tuning.high_velocity_floor {
            85
        } else if candidate.velocity == Velocity::Medium
            && medium_share < tuning.medium_velocity_floor
        {
            70
        } else {
            60
        }
    }

    fn culture_alignment(&self, candidate: &CandidateProfile, roster: &[TeamMember]) -> u8 {
        let tuning = &self.config.simulation;
        let mean = roster
            .iter()
            .map(|member| f32::from(member.culture_fit_score))
            .sum::<f32>()
            / roster.len() as f32;
        let delta = (f32::from(candidate.culture_fit_score) - mean).abs();

        if delta < tuning.close_culture_delta {
            95
        } else if delta < tuning.near_culture_delta {
            80
        } else {
            65
        }
    }

    fn diversity_impact(&self, candidate: &CandidateProfile, roster: &[TeamMember]) -> u8 {
        let bonus = u32::from(self.config.simulation.diversity_bonus);
        let mut score = 70u32;

        let personality_seen = roster.iter().any(|member| {
            member
                .personality_type
                .eq_ignore_ascii_case(&candidate.personality_type)
        });
        if !candidate.personality_type.is_empty() && !personality_seen {
            score += bonus;
        }

        let style_seen = roster.iter().any(|member| {
            member
                .work_style
                .eq_ignore_ascii_case(&candidate.preferred_work_style)
        });
        if !candidate.preferred_work_style.is_empty() && !style_seen {
            score += bonus;
        }

        score.min(100) as u8
    }

    fn verdict(&self, overall: u8, covered_gaps: &[String]) -> SimulationVerdict {
        let tuning = &self.config.simulation;
        if overall >= tuning.strong_hire_at && !covered_gaps.is_empty() {
            SimulationVerdict::StrongHire
        } else if overall >= tuning.good_hire_at {
            SimulationVerdict::GoodHire
        } else if overall >= tuning.consider_at {
            SimulationVerdict::Consider
        } else {
            SimulationVerdict::Risky
        }
    }
}
