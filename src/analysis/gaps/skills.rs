use std::collections::{BTreeMap, BTreeSet};

use crate::analysis::domain::{Severity, TeamMember};

use super::SkillGap;

/// Case-folded view of which roster members hold which skills.
///
/// Built once per analysis call and shared between the gap analyzer, the fit
/// scorer's complementary-skill rule, and the team-fit simulator.
#[derive(Debug, Clone, Default)]
pub struct SkillCoverage {
    by_skill: BTreeMap<String, BTreeSet<String>>,
}

impl SkillCoverage {
    pub fn from_roster(roster: &[TeamMember]) -> Self {
        let mut by_skill: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for member in roster {
            for skill in &member.skills {
                by_skill
                    .entry(skill.to_lowercase())
                    .or_default()
                    .insert(member.name.clone());
            }
        }
        Self { by_skill }
    }

    /// Members holding a skill that names the required capability. Containment
    /// is substring-based so "Backend Development (Go)" covers
    /// "backend development".
    pub fn covering_members(&self, required: &str) -> Vec<String> {
        let wanted = required.to_lowercase();
        let mut members = BTreeSet::new();
        for (skill, names) in &self.by_skill {
            if skill.contains(&wanted) {
                members.extend(names.iter().cloned());
            }
        }
        members.into_iter().collect()
    }

    /// Whether the roster already holds this exact skill (case-insensitive).
    pub fn has_equivalent(&self, skill: &str) -> bool {
        self.by_skill.contains_key(&skill.to_lowercase())
    }

    pub fn distinct_skills(&self) -> usize {
        self.by_skill.len()
    }
}

/// Required-skill audit: zero coverage is a missing critical capability,
/// single coverage is a key-person dependency.
pub(crate) fn skill_gaps(coverage: &SkillCoverage, required_skills: &[String]) -> Vec<SkillGap> {
    let mut gaps = Vec::new();
    for skill in required_skills {
        let holders = coverage.covering_members(skill);
        match holders.len() {
            0 => gaps.push(SkillGap {
                skill: skill.clone(),
                severity: Severity::High,
                impact: "missing critical capability".to_string(),
                recommendation: format!("hire or train for {skill} before it blocks execution"),
            }),
            1 => gaps.push(SkillGap {
                skill: skill.clone(),
                severity: Severity::Medium,
                impact: format!("single point of failure: only {} covers it", holders[0]),
                recommendation: format!("cross-train a second person on {skill}"),
            }),
            _ => {}
        }
    }
    gaps
}
