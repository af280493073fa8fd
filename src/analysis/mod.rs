//! Pure analysis contracts: candidate fit scoring, organizational gap
//! analysis, and team-fit simulation.

pub mod domain;
pub mod fit;
pub mod gaps;
pub mod simulation;
