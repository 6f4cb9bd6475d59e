//! CV matcher library
//!
//! Scores a structured candidate profile against structured job
//! requirements. The scorer is a pure function of its two inputs apart
//! from the calendar year, which is supplied by an injectable [`scoring::Clock`].

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod scoring;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use model::{Candidate, Requirement};
pub use scoring::{MatchScorer, ScoreReport};

/// Score `candidate` against `requirement` with the default scorer
/// (duration policy, projects included, system clock)
pub fn score(candidate: &Candidate, requirement: &Requirement) -> ScoreReport {
    MatchScorer::default().score(candidate, requirement)
}
