use crate::analysis::domain::{OrganizationalProfile, Severity, TeamMember};
use crate::config::GapThresholds;

use super::RoleGap;

/// Leadership seats expected at a given roster size. Base seats apply to any
/// funded company; the rest phase in as the team grows.
pub(crate) fn expected_roles(roster_size: usize, thresholds: &GapThresholds) -> Vec<&'static str> {
    let mut roles = vec!["Founder", "Technical Lead"];
    if roster_size > thresholds.product_lead_roster {
        roles.push("Product Lead");
    }
    if roster_size > thresholds.commercial_leads_roster {
        roles.push("Sales Lead");
        roles.push("Marketing Lead");
    }
    if roster_size > thresholds.operations_leads_roster {
        roles.push("Operations Lead");
        roles.push("People Lead");
    }
    roles
}

fn roster_holds_role(roster: &[TeamMember], expected: &str) -> bool {
    let wanted = expected.to_lowercase();
    roster
        .iter()
        .any(|member| member.role.to_lowercase().contains(&wanted))
}

/// Commercial and product leadership are make-or-break seats for an
/// early-stage company; everything else can wait a quarter.
fn gap_priority(role: &str, profile: &OrganizationalProfile) -> Severity {
    let early = profile.stage.needs_generalist();
    if early && matches!(role, "Sales Lead" | "Product Lead") {
        Severity::High
    } else {
        Severity::Medium
    }
}

pub(crate) fn role_gaps(
    profile: &OrganizationalProfile,
    roster: &[TeamMember],
    thresholds: &GapThresholds,
) -> Vec<RoleGap> {
    expected_roles(roster.len(), thresholds)
        .into_iter()
        .filter(|expected| !roster_holds_role(roster, expected))
        .map(|expected| {
            let priority = gap_priority(expected, profile);
            let reason = match priority {
                Severity::High => format!(
                    "no {} on the roster at {} stage",
                    expected.to_lowercase(),
                    profile.stage.label()
                ),
                _ => format!(
                    "{} expected at a team of {} but unfilled",
                    expected.to_lowercase(),
                    roster.len()
                ),
            };
            RoleGap {
                role: expected.to_string(),
                priority,
                reason,
            }
        })
        .collect()
}
