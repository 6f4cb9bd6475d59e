//! Qualification matching against education (and optionally project) text
//!
//! Matching is plain substring containment: a requirement counts as met when
//! its lowercased text appears anywhere in the candidate text. Very short
//! requirements therefore match almost anything; that leniency is the
//! deployed behavior and is kept as is.

use crate::model::Candidate;
use aho_corasick::AhoCorasick;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

const BACHELOR_TOKENS: [&str; 3] = ["bachelor", "bs", "b.s"];
const MASTER_TOKENS: [&str; 3] = ["master", "ms", "m.s"];

lazy_static! {
    static ref DEGREE_FAMILIES: Vec<AhoCorasick> = [&BACHELOR_TOKENS[..], &MASTER_TOKENS[..]]
        .iter()
        .map(|tokens| AhoCorasick::new(tokens.iter()).expect("Invalid degree family tokens"))
        .collect();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationScore {
    pub score: f64,
    pub matched: usize,
    pub total: usize,
}

/// Lowercased candidate text qualifications are searched in
pub fn qualification_haystack(candidate: &Candidate, include_projects: bool) -> String {
    let education = candidate.education_text();
    if include_projects {
        format!("{} {}", education, candidate.project_text())
    } else {
        education
    }
}

/// Whether both texts mention the same degree level (bachelor's or master's)
fn same_degree_family(requirement: &str, haystack: &str) -> bool {
    DEGREE_FAMILIES
        .iter()
        .any(|family| family.is_match(requirement) && family.is_match(haystack))
}

fn qualification_met(requirement: &str, haystack: &str) -> bool {
    haystack.contains(requirement) || same_degree_family(requirement, haystack)
}

/// Blank requirements are never met but still count toward the total.
/// No requirements at all scores 100.
pub fn score_qualifications(haystack: &str, requirements: &[String]) -> QualificationScore {
    let total = requirements.len();
    if total == 0 {
        return QualificationScore {
            score: 100.0,
            matched: 0,
            total,
        };
    }

    let matched = requirements
        .iter()
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty() && qualification_met(r, haystack))
        .count();

    QualificationScore {
        score: matched as f64 / total as f64 * 100.0,
        matched,
        total,
    }
}
