use crate::analysis::domain::{CandidateProfile, OrganizationalProfile, Velocity};
use crate::analysis::gaps::SkillCoverage;
use crate::config::BudgetBands;

// Rule outcome scores. Thresholds and weights live in the config table; these
// are the fixed grades each rule can award.
const STAGE_EXACT: u8 = 95;
const STAGE_ADJACENT: u8 = 70;
const STAGE_DISTANT: u8 = 40;

const CULTURE_BASE: u8 = 60;
const CULTURE_PER_MATCH: u8 = 15;

const FOUNDER_ALIGNED: u8 = 90;
const FOUNDER_NEUTRAL: u8 = 70;

const TEAM_COMPLEMENTARY: u8 = 85;
const TEAM_PARTIAL: u8 = 70;
const TEAM_REDUNDANT: u8 = 50;

const VELOCITY_BOTH_HIGH: u8 = 90;
const VELOCITY_MATCHED: u8 = 80;
const VELOCITY_ADJACENT: u8 = 70;
const VELOCITY_OPPOSED: u8 = 60;

const GROWTH_MATCH: u8 = 90;
const GROWTH_NEUTRAL: u8 = 70;
const GROWTH_MISMATCH: u8 = 50;

const BUDGET_WITHIN: u8 = 90;
const BUDGET_STRETCH: u8 = 70;
const BUDGET_OVER: u8 = 40;

const BUILDER_PROVEN: u8 = 90;
const BUILDER_BASELINE: u8 = 70;

/// No distinguishing signal exists in the current inputs, so every candidate
/// gets the same baseline.
pub(crate) const LEARNING_SPEED_BASELINE: u8 = 80;

/// Exact prior experience at this stage beats adjacency; anything further out
/// means relearning the operating mode.
pub(crate) fn score_stage(
    candidate: &CandidateProfile,
    profile: &OrganizationalProfile,
) -> u8 {
    let exact = candidate
        .prior_experience
        .iter()
        .any(|exp| exp.stage == profile.stage);
    if exact {
        return STAGE_EXACT;
    }
    let adjacent = candidate
        .prior_experience
        .iter()
        .any(|exp| exp.stage.distance(profile.stage) <= 1);
    if adjacent {
        STAGE_ADJACENT
    } else {
        STAGE_DISTANT
    }
}

/// Proportional value overlap, matched by case-insensitive substring
/// containment in either direction.
pub(crate) fn score_culture(
    candidate: &CandidateProfile,
    profile: &OrganizationalProfile,
) -> u8 {
    let matches = profile
        .culture_values
        .iter()
        .filter(|org_value| {
            let org = org_value.to_lowercase();
            candidate.cultural_values.iter().any(|candidate_value| {
                let cand = candidate_value.to_lowercase();
                cand.contains(&org) || org.contains(&cand)
            })
        })
        .count() as u32;
    (u32::from(CULTURE_BASE) + u32::from(CULTURE_PER_MATCH) * matches).min(100) as u8
}

pub(crate) fn score_founder(
    candidate: &CandidateProfile,
    profile: &OrganizationalProfile,
) -> u8 {
    if !profile.founder_leadership_style.is_empty()
        && candidate
            .preferred_work_style
            .eq_ignore_ascii_case(&profile.founder_leadership_style)
    {
        FOUNDER_ALIGNED
    } else {
        FOUNDER_NEUTRAL
    }
}

/// Complementary-skill heuristic against the roster-wide skill union.
pub(crate) fn score_team(candidate: &CandidateProfile, coverage: &SkillCoverage) -> u8 {
    let (overlapping, complementary) =
        candidate
            .skills
            .iter()
            .fold((0usize, 0usize), |(overlap, complement), skill| {
                if coverage.has_equivalent(skill) {
                    (overlap + 1, complement)
                } else {
                    (overlap, complement + 1)
                }
            });
    if complementary > overlapping {
        TEAM_COMPLEMENTARY
    } else if complementary > 0 {
        TEAM_PARTIAL
    } else {
        TEAM_REDUNDANT
    }
}

/// Deterministic rendition of the tempo-match bands: a shared high tempo tops
/// out, matched slower tempos sit mid-band, divergence scales down.
pub(crate) fn score_velocity(
    candidate: &CandidateProfile,
    profile: &OrganizationalProfile,
) -> u8 {
    if profile.velocity == Velocity::High && candidate.velocity == Velocity::High {
        VELOCITY_BOTH_HIGH
    } else if candidate.velocity == profile.velocity {
        VELOCITY_MATCHED
    } else if candidate.velocity.distance(profile.velocity) == 1 {
        VELOCITY_ADJACENT
    } else {
        VELOCITY_OPPOSED
    }
}

pub(crate) fn score_growth(
    candidate: &CandidateProfile,
    profile: &OrganizationalProfile,
) -> u8 {
    if profile.stage.needs_generalist() {
        if candidate.is_generalist {
            GROWTH_MATCH
        } else {
            GROWTH_MISMATCH
        }
    } else if profile.stage.needs_specialist() {
        if candidate.is_generalist {
            GROWTH_MISMATCH
        } else {
            GROWTH_MATCH
        }
    } else {
        GROWTH_NEUTRAL
    }
}

pub(crate) fn score_budget(
    candidate: &CandidateProfile,
    profile: &OrganizationalProfile,
    bands: &BudgetBands,
) -> u8 {
    let expectation = candidate.compensation_expectation;
    let band = bands.band(profile.stage);
    if expectation <= band.ceiling {
        BUDGET_WITHIN
    } else if expectation as f32 <= bands.stretch_ceiling(profile.stage) {
        BUDGET_STRETCH
    } else {
        BUDGET_OVER
    }
}

/// Ownership proxy: a prior founder or owner title signals builder behavior.
pub(crate) fn score_builder(candidate: &CandidateProfile) -> u8 {
    let proven = candidate.prior_experience.iter().any(|exp| {
        let role = exp.role.to_lowercase();
        role.contains("founder") || role.contains("owner")
    });
    if proven {
        BUILDER_PROVEN
    } else {
        BUILDER_BASELINE
    }
}
