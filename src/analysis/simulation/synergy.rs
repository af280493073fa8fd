use serde::{Deserialize, Serialize};

use crate::analysis::domain::{CandidateProfile, Severity, TeamMember};

/// A pairing expected to work well, named against one incumbent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synergy {
    #[serde(rename = "with")]
    pub with_member: String,
    pub reason: String,
    pub strength: Severity,
}

/// A pairing likely to need active management.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    #[serde(rename = "with")]
    pub with_member: String,
    pub reason: String,
    pub severity: Severity,
}

fn shared_skills(candidate: &CandidateProfile, member: &TeamMember) -> Vec<String> {
    candidate
        .skills
        .iter()
        .filter(|skill| {
            member
                .skills
                .iter()
                .any(|held| held.eq_ignore_ascii_case(skill))
        })
        .cloned()
        .collect()
}

/// Matching personalities pair steadily; a deep shared toolset pairs strongly.
/// Both can hold for the same incumbent.
pub(crate) fn detect_synergies(
    candidate: &CandidateProfile,
    roster: &[TeamMember],
    shared_skill_min: usize,
) -> Vec<Synergy> {
    let mut synergies = Vec::new();
    for member in roster {
        if !candidate.personality_type.is_empty()
            && candidate
                .personality_type
                .eq_ignore_ascii_case(&member.personality_type)
        {
            synergies.push(Synergy {
                with_member: member.name.clone(),
                reason: format!("matching {} personality", member.personality_type),
                strength: Severity::Medium,
            });
        }

        let shared = shared_skills(candidate, member);
        if shared.len() > shared_skill_min {
            let named: Vec<&str> = shared.iter().take(2).map(String::as_str).collect();
            synergies.push(Synergy {
                with_member: member.name.clone(),
                reason: format!("deep shared toolset including {}", named.join(" and ")),
                strength: Severity::High,
            });
        }
    }
    synergies
}

/// An independent incumbent paired with a collaborative hire tends to need
/// mediation before it settles.
pub(crate) fn detect_conflicts(candidate: &CandidateProfile, roster: &[TeamMember]) -> Vec<Conflict> {
    if !candidate.preferred_work_style.eq_ignore_ascii_case("collaborative") {
        return Vec::new();
    }
    roster
        .iter()
        .filter(|member| member.work_style.eq_ignore_ascii_case("independent"))
        .map(|member| Conflict {
            with_member: member.name.clone(),
            reason: "work-style mismatch, may need mediation".to_string(),
            severity: Severity::Low,
        })
        .collect()
}
