use std::collections::BTreeSet;

use crate::analysis::domain::{CompanyStage, OrganizationalProfile, TeamMember, Velocity};
use crate::analysis::gaps::GapAnalyzer;
use crate::config::EngineConfig;

pub(super) fn analyzer() -> GapAnalyzer {
    GapAnalyzer::new(EngineConfig::default())
}

pub(super) fn profile(stage: CompanyStage, runway_months: u32, team_size: u32) -> OrganizationalProfile {
    OrganizationalProfile {
        stage,
        velocity: Velocity::High,
        runway_months,
        culture_values: vec!["ownership".to_string()],
        work_style: "hybrid".to_string(),
        decision_making: "founder-led".to_string(),
        risk_tolerance: "medium".to_string(),
        founder_leadership_style: "hands-on".to_string(),
        team_size,
        risk_tags: BTreeSet::new(),
    }
}

pub(super) fn member(name: &str, role: &str, member_skills: &[&str]) -> TeamMember {
    TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        department: "General".to_string(),
        skills: member_skills.iter().map(|s| s.to_string()).collect(),
        tenure_months: 10,
        workload_fraction: 0.5,
        is_critical_single_point: false,
        personality_type: "analytical".to_string(),
        work_style: "collaborative".to_string(),
        velocity: Velocity::Medium,
        culture_fit_score: 75,
    }
}

/// Twelve-person org with every leadership seat but sales filled, and every
/// canonical skill but sales double-covered.
pub(super) fn sales_blind_roster() -> Vec<TeamMember> {
    let full_stack = [
        "frontend development",
        "backend development",
        "system design",
        "product strategy",
        "UI/UX",
        "data analysis",
        "marketing",
        "devops",
        "security",
    ];
    let mut roster = vec![
        member("Dana", "Founder", &full_stack),
        member("Elio", "Technical Lead", &full_stack),
        member("Fern", "Product Lead", &["product strategy", "data analysis"]),
        member("Gus", "Marketing Lead", &["marketing", "UI/UX"]),
        member("Hale", "Operations Lead", &["data analysis", "security"]),
        member("Ines", "People Lead", &["product strategy"]),
    ];
    for (index, name) in ["Joon", "Kira", "Lev", "Mona", "Nico", "Orla"]
        .into_iter()
        .enumerate()
    {
        roster.push(member(
            name,
            "Engineer",
            &[full_stack[index % full_stack.len()], "devops"],
        ));
    }
    roster
}
