//! Score report produced by the match scorer

use crate::scoring::experience::{ExperienceEvidence, ExperiencePolicy, ExperienceScore};
use crate::scoring::qualifications::QualificationScore;
use crate::scoring::skills::SkillScore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Truncated weighted composite (0-100)
    pub total_score: u8,

    pub skill_score: f64,
    pub qual_score: f64,
    pub exp_score: f64,

    pub skills: SkillScore,
    pub qualifications: QualificationScore,
    pub experience: ExperienceScore,

    pub experience_policy: ExperiencePolicy,
    pub verdict: Verdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    VeryGood,
    Good,
    Fair,
    BelowAverage,
    Poor,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => Verdict::Excellent,
            80..=89 => Verdict::VeryGood,
            70..=79 => Verdict::Good,
            60..=69 => Verdict::Fair,
            50..=59 => Verdict::BelowAverage,
            _ => Verdict::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Excellent => "EXCELLENT",
            Verdict::VeryGood => "VERY GOOD",
            Verdict::Good => "GOOD",
            Verdict::Fair => "FAIR",
            Verdict::BelowAverage => "BELOW AVG",
            Verdict::Poor => "POOR",
        }
    }
}

impl ScoreReport {
    /// One-line explanation of the experience sub-score
    pub fn experience_summary(&self) -> String {
        match &self.experience.evidence {
            ExperienceEvidence::ItemCount { matched, total } => {
                format!("Based on {} out of {} experience requirements found.", matched, total)
            }
            ExperienceEvidence::Duration {
                candidate_years,
                required_years,
            } => format!(
                "Calculated {} years vs. required {} years.",
                candidate_years, required_years
            ),
        }
    }

    pub fn skill_summary(&self) -> String {
        format!(
            "Based on {} out of {} required skills.",
            self.skills.matched, self.skills.required
        )
    }

    pub fn qualification_summary(&self) -> String {
        format!(
            "Based on {} out of {} qualifications found.",
            self.qualifications.matched, self.qualifications.total
        )
    }
}
