use std::collections::BTreeSet;

use crate::analysis::domain::{CandidateProfile, TeamMember, Velocity};
use crate::analysis::simulation::TeamFitSimulator;
use crate::config::EngineConfig;

pub(super) fn simulator() -> TeamFitSimulator {
    TeamFitSimulator::new(EngineConfig::default())
}

pub(super) fn incumbent(
    name: &str,
    member_skills: &[&str],
    velocity: Velocity,
    personality: &str,
    work_style: &str,
    culture_fit_score: u8,
) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: "Engineer".to_string(),
        department: "Engineering".to_string(),
        skills: member_skills.iter().map(|s| s.to_string()).collect(),
        tenure_months: 14,
        workload_fraction: 0.6,
        is_critical_single_point: false,
        personality_type: personality.to_string(),
        work_style: work_style.to_string(),
        velocity,
        culture_fit_score,
    }
}

/// Mixed three-person team: one fast collaborator, one independent medium,
/// one steady collaborator. Mean culture fit is 80.
pub(super) fn mixed_roster() -> Vec<TeamMember> {
    vec![
        incumbent(
            "Maya",
            &["frontend development", "UI/UX"],
            Velocity::High,
            "driver",
            "collaborative",
            80,
        ),
        incumbent(
            "Tomas",
            &["backend development", "devops"],
            Velocity::Medium,
            "analytical",
            "independent",
            75,
        ),
        incumbent(
            "Priya",
            &["product strategy"],
            Velocity::Medium,
            "harmonizer",
            "collaborative",
            85,
        ),
    ]
}

pub(super) fn candidate(name: &str, candidate_skills: &[&str]) -> CandidateProfile {
    CandidateProfile {
        name: name.to_string(),
        department: "Growth".to_string(),
        skills: candidate_skills.iter().map(|s| s.to_string()).collect(),
        prior_experience: Vec::new(),
        cultural_values: BTreeSet::new(),
        preferred_work_style: "collaborative".to_string(),
        is_generalist: false,
        compensation_expectation: 140,
        personality_type: "connector".to_string(),
        velocity: Velocity::High,
        culture_fit_score: 84,
    }
}
