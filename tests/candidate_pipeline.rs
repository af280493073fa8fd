use std::collections::BTreeSet;

use talent_fit::{
    CandidateProfile, CompanyStage, EngineConfig, FitEngine, HireRecommendation,
    OrganizationalProfile, PriorExperience, RiskCategory, Severity, Velocity,
};

fn seed_org() -> OrganizationalProfile {
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

fn base_candidate(name: &str) -> CandidateProfile {
    CandidateProfile {
        name: name.to_string(),
        department: "Engineering".to_string(),
        skills: BTreeSet::new(),
        prior_experience: Vec::new(),
        cultural_values: BTreeSet::new(),
        preferred_work_style: String::new(),
        is_generalist: false,
        compensation_expectation: 150,
        personality_type: "driver".to_string(),
        velocity: Velocity::Medium,
        culture_fit_score: 75,
    }
}

#[test]
fn seasoned_seed_founder_clears_the_bar() {
    let mut candidate = base_candidate("Iris Okafor");
    candidate.prior_experience = vec![PriorExperience {
        stage: CompanyStage::Seed,
        role: "Founder".to_string(),
        company_size: 9,
        tenure_months: 28,
    }];
    candidate.cultural_values = ["speed", "ownership"].iter().map(|s| s.to_string()).collect();
    candidate.preferred_work_style = "hands-on".to_string();
    candidate.is_generalist = true;
    candidate.velocity = Velocity::High;
    candidate.skills = ["backend development", "system design"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let engine = FitEngine::new(EngineConfig::default());
    let evaluation = engine
        .evaluate(&candidate, &seed_org(), &[])
        .expect("valid inputs");

    let dims = &evaluation.report.dimensions;
    assert_eq!(dims.stage_fit, 95);
    assert_eq!(dims.founder_fit, 90);
    assert_eq!(dims.builder_mindset, 90);
    assert_eq!(dims.budget_fit, 90);
    assert!(evaluation.report.overall_fit >= 80);
    assert!(matches!(
        evaluation.recommendation,
        HireRecommendation::Hire | HireRecommendation::StrongHire
    ));
}

#[test]
fn inexperienced_overpriced_candidate_is_rejected() {
    let mut candidate = base_candidate("Basil Finch");
    candidate.compensation_expectation = 400;
    candidate.velocity = Velocity::Low;

    let engine = FitEngine::new(EngineConfig::default());
    let evaluation = engine
        .evaluate(&candidate, &seed_org(), &[])
        .expect("valid inputs");

    let dims = &evaluation.report.dimensions;
    assert_eq!(dims.stage_fit, 40);
    assert_eq!(dims.budget_fit, 40);
    assert!(evaluation.report.overall_fit < 60);
    assert_eq!(evaluation.recommendation, HireRecommendation::Reject);

    // The stage and budget flags are concerns, not disqualifiers on their own.
    assert!(evaluation
        .risks
        .iter()
        .any(|r| r.category == RiskCategory::BudgetMismatch && r.severity == Severity::Medium));
    assert!(evaluation
        .risks
        .iter()
        .any(|r| r.category == RiskCategory::StagePace && r.severity == Severity::Medium));
    assert!(evaluation.risks.iter().all(|r| r.severity != Severity::High));
}

#[test]
fn evaluation_is_reproducible() {
    let candidate = base_candidate("Echo");
    let engine = FitEngine::new(EngineConfig::default());

    let first = engine.evaluate(&candidate, &seed_org(), &[]).expect("valid");
    let second = engine.evaluate(&candidate, &seed_org(), &[]).expect("valid");
    assert_eq!(first, second);
}

#[test]
fn profiles_deserialize_from_orchestration_payloads() {
    let payload = r#"{
        "stage": "series_a",
        "velocity": "high",
        "runwayMonths": 9,
        "cultureValues": ["craft"],
        "founderLeadershipStyle": "delegating",
        "teamSize": 18,
        "riskTags": ["low_runway"]
    }"#;
    let profile: OrganizationalProfile = serde_json::from_str(payload).expect("valid payload");
    assert_eq!(profile.stage, CompanyStage::SeriesA);
    assert!(profile.has_risk_tag("low_runway"));
}
