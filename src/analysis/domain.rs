use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Funding/maturity phase on a fixed ordinal scale.
///
/// Declaration order is the ordinal order; adjacency checks use the distance
/// between positions on this scale.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyStage {
    #[serde(alias = "pre_seed")]
    PreSeed,
    #[default]
    Seed,
    #[serde(alias = "series_a")]
    SeriesA,
    #[serde(alias = "series_b")]
    SeriesB,
    #[serde(alias = "series_c")]
    SeriesC,
    Growth,
}

impl CompanyStage {
    pub const fn label(self) -> &'static str {
        match self {
            CompanyStage::PreSeed => "pre-seed",
            CompanyStage::Seed => "seed",
            CompanyStage::SeriesA => "series-a",
            CompanyStage::SeriesB => "series-b",
            CompanyStage::SeriesC => "series-c",
            CompanyStage::Growth => "growth",
        }
    }

    pub const fn ordinal(self) -> u8 {
        match self {
            CompanyStage::PreSeed => 0,
            CompanyStage::Seed => 1,
            CompanyStage::SeriesA => 2,
            CompanyStage::SeriesB => 3,
            CompanyStage::SeriesC => 4,
            CompanyStage::Growth => 5,
        }
    }

    /// Ordinal distance between two stages.
    pub fn distance(self, other: CompanyStage) -> u8 {
        self.ordinal().abs_diff(other.ordinal())
    }

    /// Early-stage companies lean on generalists who wear many hats.
    pub const fn needs_generalist(self) -> bool {
        matches!(self, CompanyStage::PreSeed | CompanyStage::Seed)
    }

    /// Later stages hire for depth in a single function.
    pub const fn needs_specialist(self) -> bool {
        matches!(
            self,
            CompanyStage::SeriesB | CompanyStage::SeriesC | CompanyStage::Growth
        )
    }
}

/// Operating tempo of a company or person.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Velocity {
    Low,
    #[default]
    Medium,
    High,
}

impl Velocity {
    pub const fn label(self) -> &'static str {
        match self {
            Velocity::Low => "low",
            Velocity::Medium => "medium",
            Velocity::High => "high",
        }
    }

    pub const fn ordinal(self) -> u8 {
        match self {
            Velocity::Low => 0,
            Velocity::Medium => 1,
            Velocity::High => 2,
        }
    }

    pub fn distance(self, other: Velocity) -> u8 {
        self.ordinal().abs_diff(other.ordinal())
    }
}

/// Shared qualitative grading for risks, gaps, and conflicts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Sort weight used when prioritizing mixed gap lists.
    pub const fn weight(self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
        }
    }
}

/// Immutable snapshot of a company's organizational DNA.
///
/// Produced by the external profiling collaborator; the engine never mutates
/// it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationalProfile {
    #[serde(default)]
    pub stage: CompanyStage,
    #[serde(default)]
    pub velocity: Velocity,
    pub runway_months: u32,
    #[serde(default)]
    pub culture_values: Vec<String>,
    #[serde(default)]
    pub work_style: String,
    #[serde(default)]
    pub decision_making: String,
    #[serde(default)]
    pub risk_tolerance: String,
    #[serde(default)]
    pub founder_leadership_style: String,
    pub team_size: u32,
    #[serde(default)]
    pub risk_tags: BTreeSet<String>,
}

impl OrganizationalProfile {
    pub fn has_risk_tag(&self, tag: &str) -> bool {
        self.risk_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// One incumbent on the current roster, supplied by the external roster
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub tenure_months: u32,
    pub workload_fraction: f32,
    #[serde(default)]
    pub is_critical_single_point: bool,
    #[serde(default)]
    pub personality_type: String,
    #[serde(default)]
    pub work_style: String,
    #[serde(default)]
    pub velocity: Velocity,
    pub culture_fit_score: u8,
}

impl TeamMember {
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&self.workload_fraction) {
            return Err(EngineError::invalid(
                "workloadFraction",
                format!(
                    "{} for {} is outside 0.0..=1.0",
                    self.workload_fraction, self.name
                ),
            ));
        }
        if self.culture_fit_score > 100 {
            return Err(EngineError::invalid(
                "cultureFitScore",
                format!("{} for {} exceeds 100", self.culture_fit_score, self.name),
            ));
        }
        Ok(())
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        let wanted = skill.to_lowercase();
        self.skills
            .iter()
            .any(|s| s.to_lowercase().contains(&wanted))
    }
}

/// A single prior-experience entry on a candidate record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorExperience {
    pub stage: CompanyStage,
    pub role: String,
    #[serde(default)]
    pub company_size: u32,
    #[serde(default)]
    pub tenure_months: u32,
}

/// Candidate record supplied by the external intake collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    #[serde(default)]
    pub prior_experience: Vec<PriorExperience>,
    #[serde(default)]
    pub cultural_values: BTreeSet<String>,
    #[serde(default)]
    pub preferred_work_style: String,
    #[serde(default)]
    pub is_generalist: bool,
    /// Expected compensation in thousands per year.
    pub compensation_expectation: u32,
    #[serde(default)]
    pub personality_type: String,
    #[serde(default)]
    pub velocity: Velocity,
    pub culture_fit_score: u8,
}

impl CandidateProfile {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.culture_fit_score > 100 {
            return Err(EngineError::invalid(
                "cultureFitScore",
                format!("{} for {} exceeds 100", self.culture_fit_score, self.name),
            ));
        }
        Ok(())
    }
}
