use serde::Serialize;

use crate::analysis::domain::{CandidateProfile, Severity};
use crate::config::SimulationTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactTone {
    Positive,
    Caution,
    Neutral,
}

/// One structured line of the impact summary shown alongside the simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeEntry {
    pub tone: ImpactTone,
    pub area: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<Severity>,
    pub message: String,
}

pub(crate) fn build_narrative(
    candidate: &CandidateProfile,
    roster_size: usize,
    covered_gaps: &[String],
    overall_score: u8,
    conflict_count: usize,
    tuning: &SimulationTuning,
) -> Vec<NarrativeEntry> {
    let mut entries = Vec::new();

    if !covered_gaps.is_empty() {
        entries.push(NarrativeEntry {
            tone: ImpactTone::Positive,
            area: "Skill Coverage",
            magnitude: None,
            message: format!(
                "closes {} open skill gap(s): {}",
                covered_gaps.len(),
                covered_gaps.join(", ")
            ),
        });
    }

    if overall_score >= tuning.velocity_highlight_at {
        entries.push(NarrativeEntry {
            tone: ImpactTone::Positive,
            area: "Team Velocity",
            magnitude: None,
            message: "strong overall fit should lift team throughput".to_string(),
        });
    }

    if conflict_count > 0 {
        let magnitude = if conflict_count > tuning.conflict_caution_count {
            Severity::High
        } else {
            Severity::Low
        };
        entries.push(NarrativeEntry {
            tone: ImpactTone::Caution,
            area: "Team Dynamics",
            magnitude: Some(magnitude),
            message: format!(
                "{} work-style pairing(s) may need mediation while the team settles",
                conflict_count
            ),
        });
    }

    let message = if candidate.department.is_empty() {
        format!("team grows from {} to {} people", roster_size, roster_size + 1)
    } else {
        format!(
            "team grows from {} to {} people, joining {}",
            roster_size,
            roster_size + 1,
            candidate.department
        )
    };
    entries.push(NarrativeEntry {
        tone: ImpactTone::Neutral,
        area: "Team Size",
        magnitude: None,
        message,
    });

    entries
}
