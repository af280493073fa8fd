//! Organizational gap analysis: stage-expected roles and skills compared
//! against the current roster, plus structural bottleneck detection.

mod bottlenecks;
mod roles;
mod skills;

#[cfg(test)]
mod tests;

pub use bottlenecks::{Bottleneck, BottleneckImpact, BottleneckKind};
pub use skills::SkillCoverage;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::domain::{OrganizationalProfile, Severity, TeamMember};
use crate::config::EngineConfig;
use crate::error::EngineError;

/// A leadership seat the roster is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGap {
    pub role: String,
    pub priority: Severity,
    pub reason: String,
}

/// A required capability with zero or fragile roster coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: String,
    pub severity: Severity,
    pub impact: String,
    pub recommendation: String,
}

/// Either kind of gap, for the combined prioritized listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GapRecord {
    Role(RoleGap),
    Skill(SkillGap),
}

impl GapRecord {
    pub fn priority(&self) -> Severity {
        match self {
            GapRecord::Role(gap) => gap.priority,
            GapRecord::Skill(gap) => gap.severity,
        }
    }
}

/// How quickly the organization must act on its gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapUrgency {
    Medium,
    High,
    Critical,
}

impl GapUrgency {
    pub const fn label(self) -> &'static str {
        match self {
            GapUrgency::Medium => "medium",
            GapUrgency::High => "high",
            GapUrgency::Critical => "critical",
        }
    }
}

/// Complete gap analysis output for one profile + roster pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapReport {
    pub role_gaps: Vec<RoleGap>,
    pub skill_gaps: Vec<SkillGap>,
    /// Role and skill gaps together, highest priority first; ties keep
    /// discovery order (roles before skills).
    pub prioritized_gaps: Vec<GapRecord>,
    pub bottlenecks: Vec<Bottleneck>,
    pub urgency: GapUrgency,
}

impl GapReport {
    pub fn high_priority_count(&self) -> usize {
        self.prioritized_gaps
            .iter()
            .filter(|gap| gap.priority() == Severity::High)
            .count()
    }
}

/// Stateless analyzer applying the roster rubric from [`EngineConfig`].
pub struct GapAnalyzer {
    config: EngineConfig,
}

impl GapAnalyzer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Audits the roster against the canonical required-skill list.
    pub fn analyze(
        &self,
        profile: &OrganizationalProfile,
        roster: &[TeamMember],
    ) -> Result<GapReport, EngineError> {
        let required = self.config.required_skills.clone();
        self.analyze_with_skills(profile, roster, &required)
    }

    /// Audits the roster against an explicit required-skill list.
    pub fn analyze_with_skills(
        &self,
        profile: &OrganizationalProfile,
        roster: &[TeamMember],
        required_skills: &[String],
    ) -> Result<GapReport, EngineError> {
        for member in roster {
            member.validate()?;
        }

        let thresholds = &self.config.gaps;
        let role_gaps = roles::role_gaps(profile, roster, thresholds);
        let coverage = SkillCoverage::from_roster(roster);
        let skill_gaps = skills::skill_gaps(&coverage, required_skills);
        let bottlenecks = bottlenecks::detect_bottlenecks(roster, thresholds);

        let mut prioritized: Vec<GapRecord> = role_gaps
            .iter()
            .cloned()
            .map(GapRecord::Role)
            .chain(skill_gaps.iter().cloned().map(GapRecord::Skill))
            .collect();
        prioritized.sort_by_key(|gap| std::cmp::Reverse(gap.priority().weight()));

        let high_priority = prioritized
            .iter()
            .filter(|gap| gap.priority() == Severity::High)
            .count();
        let urgency = urgency(profile.runway_months, high_priority, thresholds);

        debug!(
            role_gaps = role_gaps.len(),
            skill_gaps = skill_gaps.len(),
            bottlenecks = bottlenecks.len(),
            urgency = urgency.label(),
            "gap analysis complete"
        );

        Ok(GapReport {
            role_gaps,
            skill_gaps,
            prioritized_gaps: prioritized,
            bottlenecks,
            urgency,
        })
    }

    /// Roster skill view shared with the fit scorer and the simulator.
    pub fn skill_coverage(roster: &[TeamMember]) -> SkillCoverage {
        SkillCoverage::from_roster(roster)
    }
}

fn urgency(
    runway_months: u32,
    high_priority_gaps: usize,
    thresholds: &crate::config::GapThresholds,
) -> GapUrgency {
    if runway_months < thresholds.critical_runway_months && high_priority_gaps > 0 {
        GapUrgency::Critical
    } else if (runway_months < thresholds.tight_runway_months
        && high_priority_gaps > thresholds.tight_runway_gap_count)
        || high_priority_gaps > thresholds.absolute_gap_count
    {
        GapUrgency::High
    } else {
        GapUrgency::Medium
    }
}
