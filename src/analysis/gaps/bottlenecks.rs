use serde::{Deserialize, Serialize};

use crate::analysis::domain::TeamMember;
use crate::config::GapThresholds;

/// Structural roster weakness independent of skill coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BottleneckKind {
    OverloadedTeam,
    SinglePointFailure,
}

impl BottleneckKind {
    pub const fn label(self) -> &'static str {
        match self {
            BottleneckKind::OverloadedTeam => "overloaded_team",
            BottleneckKind::SinglePointFailure => "single_point_failure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BottleneckImpact {
    High,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bottleneck {
    pub kind: BottleneckKind,
    pub affected_members: Vec<String>,
    pub impact: BottleneckImpact,
    pub solution: String,
}

/// One aggregated entry per bottleneck kind: overloaded members together,
/// unbacked critical members together.
pub(crate) fn detect_bottlenecks(
    roster: &[TeamMember],
    thresholds: &GapThresholds,
) -> Vec<Bottleneck> {
    let mut bottlenecks = Vec::new();

    let overloaded: Vec<String> = roster
        .iter()
        .filter(|member| member.workload_fraction > thresholds.overload_workload)
        .map(|member| member.name.clone())
        .collect();
    if !overloaded.is_empty() {
        bottlenecks.push(Bottleneck {
            kind: BottleneckKind::OverloadedTeam,
            affected_members: overloaded,
            impact: BottleneckImpact::High,
            solution: "redistribute load or hire to relieve sustained overload".to_string(),
        });
    }

    let critical: Vec<String> = roster
        .iter()
        .filter(|member| member.is_critical_single_point)
        .map(|member| member.name.clone())
        .collect();
    if !critical.is_empty() {
        bottlenecks.push(Bottleneck {
            kind: BottleneckKind::SinglePointFailure,
            affected_members: critical,
            impact: BottleneckImpact::Critical,
            solution: "designate and train a backup for each critical owner".to_string(),
        });
    }

    bottlenecks
}
