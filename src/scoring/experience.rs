//! Experience scoring under two interchangeable policies

use crate::model::Candidate;
use crate::scoring::clock::Clock;
use crate::scoring::years::{required_years, total_experience_years};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the experience sub-score is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperiencePolicy {
    /// Each requirement string must appear verbatim in the candidate's
    /// position and description text
    ItemCount,
    /// Total tenure in years against the largest year figure the job asks for
    #[default]
    Duration,
}

impl fmt::Display for ExperiencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperiencePolicy::ItemCount => write!(f, "item-count"),
            ExperiencePolicy::Duration => write!(f, "duration"),
        }
    }
}

impl FromStr for ExperiencePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "item-count" | "item_count" | "items" => Ok(ExperiencePolicy::ItemCount),
            "duration" | "years" => Ok(ExperiencePolicy::Duration),
            _ => Err(format!(
                "Invalid experience policy: {}. Supported: duration, item-count",
                s
            )),
        }
    }
}

/// Evidence behind an experience score, depending on the policy used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum ExperienceEvidence {
    ItemCount { matched: usize, total: usize },
    Duration { candidate_years: u32, required_years: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceScore {
    pub score: f64,
    pub evidence: ExperienceEvidence,
}

pub fn score_experience(
    policy: ExperiencePolicy,
    candidate: &Candidate,
    experience_needed: &[String],
    clock: &dyn Clock,
) -> ExperienceScore {
    match policy {
        ExperiencePolicy::ItemCount => score_by_items(candidate, experience_needed),
        ExperiencePolicy::Duration => score_by_duration(candidate, experience_needed, clock),
    }
}

fn score_by_items(candidate: &Candidate, experience_needed: &[String]) -> ExperienceScore {
    let total = experience_needed.len();
    let haystack = candidate.experience_text();

    // Verbatim containment: no trimming, and an empty requirement is always present
    let matched = experience_needed
        .iter()
        .filter(|r| haystack.contains(r.to_lowercase().as_str()))
        .count();

    let score = if total == 0 {
        100.0
    } else {
        matched as f64 / total as f64 * 100.0
    };

    ExperienceScore {
        score,
        evidence: ExperienceEvidence::ItemCount { matched, total },
    }
}

fn score_by_duration(
    candidate: &Candidate,
    experience_needed: &[String],
    clock: &dyn Clock,
) -> ExperienceScore {
    let candidate_years = total_experience_years(&candidate.experience, clock.current_year());
    let required = required_years(experience_needed);

    let score = if required == 0 || candidate_years >= required {
        100.0
    } else {
        candidate_years as f64 / required as f64 * 100.0
    };

    ExperienceScore {
        score,
        evidence: ExperienceEvidence::Duration {
            candidate_years,
            required_years: required,
        },
    }
}
