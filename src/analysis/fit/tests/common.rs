use std::collections::BTreeSet;

use crate::analysis::domain::{
    CandidateProfile, CompanyStage, OrganizationalProfile, PriorExperience, TeamMember, Velocity,
};
use crate::analysis::fit::FitEngine;
use crate::config::EngineConfig;

pub(super) fn engine() -> FitEngine {
    FitEngine::new(EngineConfig::default())
}

pub(super) fn seed_profile() -> OrganizationalProfile {
    OrganizationalProfile {
        stage: CompanyStage::Seed,
        velocity: Velocity::High,
        runway_months: 14,
        culture_values: vec!["speed".to_string(), "ownership".to_string()],
        work_style: "hybrid".to_string(),
        decision_making: "founder-led".to_string(),
        risk_tolerance: "high".to_string(),
        founder_leadership_style: "hands-on".to_string(),
        team_size: 4,
        risk_tags: BTreeSet::new(),
    }
}

pub(super) fn skills(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Minimal candidate with nothing going for them; tests layer strengths on.
pub(super) fn bare_candidate(name: &str) -> CandidateProfile {
    CandidateProfile {
        name: name.to_string(),
        department: String::new(),
        skills: BTreeSet::new(),
        prior_experience: Vec::new(),
        cultural_values: BTreeSet::new(),
        preferred_work_style: String::new(),
        is_generalist: false,
        compensation_expectation: 150,
        personality_type: String::new(),
        velocity: Velocity::Medium,
        culture_fit_score: 75,
    }
}

/// Founder-profile candidate matching the seed organization on every axis.
pub(super) fn strong_candidate() -> CandidateProfile {
    CandidateProfile {
        name: "Iris Okafor".to_string(),
        department: "Engineering".to_string(),
        skills: skills(&["backend development", "system design"]),
        prior_experience: vec![PriorExperience {
            stage: CompanyStage::Seed,
            role: "Founder".to_string(),
            company_size: 8,
            tenure_months: 30,
        }],
        cultural_values: ["speed", "ownership"].iter().map(|s| s.to_string()).collect(),
        preferred_work_style: "hands-on".to_string(),
        is_generalist: true,
        compensation_expectation: 150,
        personality_type: "driver".to_string(),
        velocity: Velocity::High,
        culture_fit_score: 82,
    }
}

pub(super) fn roster_member(name: &str, member_skills: &[&str]) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: "Engineer".to_string(),
        department: "Engineering".to_string(),
        skills: skills(member_skills),
        tenure_months: 12,
        workload_fraction: 0.6,
        is_critical_single_point: false,
        personality_type: "analytical".to_string(),
        work_style: "collaborative".to_string(),
        velocity: Velocity::High,
        culture_fit_score: 78,
    }
}
