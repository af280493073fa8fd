use super::common::*;
use crate::analysis::domain::{CompanyStage, Severity};
use crate::analysis::gaps::{BottleneckImpact, BottleneckKind, GapRecord, GapUrgency};

#[test]
fn overloaded_members_aggregate_into_one_bottleneck() {
    let mut roster = vec![
        member("Ada", "Founder", &["sales"]),
        member("Bo", "Technical Lead", &["backend development"]),
        member("Cy", "Engineer", &["devops"]),
    ];
    roster[0].workload_fraction = 0.9;
    roster[1].workload_fraction = 0.95;

    let report = analyzer()
        .analyze(&profile(CompanyStage::Seed, 12, 3), &roster)
        .expect("valid roster");

    let overload = report
        .bottlenecks
        .iter()
        .find(|b| b.kind == BottleneckKind::OverloadedTeam)
        .expect("overload bottleneck");
    assert_eq!(overload.impact, BottleneckImpact::High);
    assert_eq!(overload.affected_members, vec!["Ada", "Bo"]);
}

#[test]
fn critical_single_points_are_flagged_critical() {
    let mut roster = vec![
        member("Ada", "Founder", &["sales"]),
        member("Bo", "Technical Lead", &["backend development"]),
    ];
    roster[1].is_critical_single_point = true;

    let report = analyzer()
        .analyze(&profile(CompanyStage::Seed, 12, 2), &roster)
        .expect("valid roster");

    let spof = report
        .bottlenecks
        .iter()
        .find(|b| b.kind == BottleneckKind::SinglePointFailure)
        .expect("single point bottleneck");
    assert_eq!(spof.impact, BottleneckImpact::Critical);
    assert_eq!(spof.affected_members, vec!["Bo"]);
}

#[test]
fn healthy_roster_has_no_bottlenecks() {
    let roster = vec![member("Ada", "Founder", &["sales"])];
    let report = analyzer()
        .analyze(&profile(CompanyStage::Seed, 12, 1), &roster)
        .expect("valid roster");
    assert!(report.bottlenecks.is_empty());
}

#[test]
fn prioritized_gaps_sort_high_first_with_roles_before_skills() {
    // Three engineers: Product Lead becomes expected and is a high-priority
    // seat at pre-seed, alongside a pile of missing canonical skills.
    let roster = vec![
        member("Ada", "Engineer", &["frontend development"]),
        member("Bo", "Engineer", &["frontend development"]),
        member("Cy", "Engineer", &["frontend development"]),
    ];
    let report = analyzer()
        .analyze(&profile(CompanyStage::PreSeed, 12, 3), &roster)
        .expect("valid roster");

    match &report.prioritized_gaps[0] {
        GapRecord::Role(gap) => {
            assert_eq!(gap.role, "Product Lead");
            assert_eq!(gap.priority, Severity::High);
        }
        other => panic!("expected the product lead gap first, got {other:?}"),
    }

    let weights: Vec<u8> = report
        .prioritized_gaps
        .iter()
        .map(|gap| gap.priority().weight())
        .collect();
    let mut sorted = weights.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(weights, sorted, "gaps are not in descending priority order");
}

#[test]
fn urgency_escalates_with_runway_and_gap_count() {
    let analyzer = analyzer();
    let roster = vec![member("Solo", "Engineer", &[])];

    // Short runway plus high-priority gaps: critical.
    let report = analyzer
        .analyze(&profile(CompanyStage::PreSeed, 4, 1), &roster)
        .expect("valid roster");
    assert_eq!(report.urgency, GapUrgency::Critical);

    // Comfortable runway but more than three high-priority gaps: high.
    let report = analyzer
        .analyze(&profile(CompanyStage::PreSeed, 24, 1), &roster)
        .expect("valid roster");
    assert!(report.high_priority_count() > 3);
    assert_eq!(report.urgency, GapUrgency::High);

    // Fully covered org: medium.
    let full = sales_blind_roster();
    let report = analyzer
        .analyze(&profile(CompanyStage::SeriesA, 18, 12), &full)
        .expect("valid roster");
    assert_eq!(report.urgency, GapUrgency::Medium);
}
