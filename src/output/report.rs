//! Report wrapper handed to the output formatters

use crate::model::{Candidate, Requirement};
use crate::scoring::{ExperiencePolicy, ScoreReport};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Score report together with the inputs it was computed from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: ScoreReport,
    pub metadata: ReportMetadata,
    pub candidate: Candidate,
    pub requirement: Requirement,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_file: String,
    pub job_file: String,
    /// Year used for open-ended positions
    pub evaluation_year: i32,
    pub experience_policy: ExperiencePolicy,
    pub version: String,
}

impl ReportMetadata {
    pub fn new(
        resume_file: impl Into<String>,
        job_file: impl Into<String>,
        evaluation_year: i32,
        experience_policy: ExperiencePolicy,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            resume_file: resume_file.into(),
            job_file: job_file.into(),
            evaluation_year,
            experience_policy,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub(crate) fn generated_at_display(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

impl MatchReport {
    pub fn new(
        score: ScoreReport,
        metadata: ReportMetadata,
        candidate: Candidate,
        requirement: Requirement,
    ) -> Self {
        Self {
            score,
            metadata,
            candidate,
            requirement,
        }
    }
}
