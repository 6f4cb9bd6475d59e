//! Skill overlap scoring

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScore {
    pub score: f64,
    pub matched: usize,
    pub required: usize,
    /// Normalized skills present on both sides, sorted
    pub overlapping: Vec<String>,
}

/// Lowercase and trim a skill, dropping it if nothing is left
pub fn normalize_skill(skill: &str) -> Option<String> {
    let normalized = skill.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

fn skill_set(skills: &[String]) -> BTreeSet<String> {
    skills.iter().filter_map(|s| normalize_skill(s)).collect()
}

/// Share of required skills the candidate lists. Extra candidate skills
/// neither help nor hurt; an empty requirement set scores 100.
pub fn score_skills(candidate_skills: &[String], required_skills: &[String]) -> SkillScore {
    let candidate = skill_set(candidate_skills);
    let required = skill_set(required_skills);

    let overlapping: Vec<String> = candidate.intersection(&required).cloned().collect();

    let score = if required.is_empty() {
        100.0
    } else {
        overlapping.len() as f64 / required.len() as f64 * 100.0
    };

    SkillScore {
        score,
        matched: overlapping.len(),
        required: required.len(),
        overlapping,
    }
}
