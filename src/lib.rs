//! Fit & gap analysis engine for startup talent management.
//!
//! The crate exposes five pure, stateless contracts consumed by an external
//! orchestration layer:
//!
//! - [`FitEngine`] scores one candidate against an organizational profile and
//!   composes the risk and recommendation passes into a full evaluation.
//! - [`GapAnalyzer`] compares a profile and its roster against stage-expected
//!   roles and skills, reporting gaps, bottlenecks, and urgency.
//! - [`TeamFitSimulator`] runs the what-if of adding a candidate to the
//!   current roster.
//!
//! Every computation is deterministic rule arithmetic over explicit inputs.
//! There is no I/O, no shared state, and no partial result: each call either
//! returns a complete report or fails with an [`EngineError`].

pub mod analysis;
pub mod config;
pub mod error;

pub use analysis::domain::{
    CandidateProfile, CompanyStage, OrganizationalProfile, PriorExperience, Severity, TeamMember,
    Velocity,
};
pub use analysis::fit::{
    CandidateEvaluation, DimensionScores, FitDimension, FitEngine, FitReport, HireRecommendation,
    RiskCategory, RiskIndicator,
};
pub use analysis::gaps::{
    Bottleneck, BottleneckImpact, BottleneckKind, GapAnalyzer, GapRecord, GapReport, GapUrgency,
    RoleGap, SkillCoverage, SkillGap,
};
pub use analysis::simulation::{
    Confidence, Conflict, FitSimulationResult, ImpactTone, NarrativeEntry, SimulationVerdict,
    Synergy, TeamFitSimulator, VerdictSummary,
};
pub use config::EngineConfig;
pub use error::EngineError;
