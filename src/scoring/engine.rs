//! Match scorer composing the three sub-scorers

use crate::config::ScoringConfig;
use crate::model::{Candidate, Requirement};
use crate::scoring::clock::{Clock, SystemClock};
use crate::scoring::experience::{score_experience, ExperiencePolicy};
use crate::scoring::qualifications::{qualification_haystack, score_qualifications};
use crate::scoring::report::{ScoreReport, Verdict};
use crate::scoring::skills::score_skills;
use crate::scoring::weights::SCORE_WEIGHTS;
use log::debug;
use std::sync::Arc;

/// Stateless scorer; safe to share across threads
#[derive(Clone)]
pub struct MatchScorer {
    policy: ExperiencePolicy,
    include_projects: bool,
    clock: Arc<dyn Clock>,
}

impl MatchScorer {
    /// Duration policy, projects included, system clock
    pub fn new() -> Self {
        Self {
            policy: ExperiencePolicy::Duration,
            include_projects: true,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new()
            .with_policy(config.experience_policy)
            .with_projects(config.include_projects)
    }

    pub fn with_policy(mut self, policy: ExperiencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_projects(mut self, include: bool) -> Self {
        self.include_projects = include;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn policy(&self) -> ExperiencePolicy {
        self.policy
    }

    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    pub fn score(&self, candidate: &Candidate, requirement: &Requirement) -> ScoreReport {
        let skills = score_skills(&candidate.skills, &requirement.required_skills);

        let haystack = qualification_haystack(candidate, self.include_projects);
        let qualifications = score_qualifications(&haystack, &requirement.qualifications);

        let experience = score_experience(
            self.policy,
            candidate,
            &requirement.experience_needed,
            self.clock.as_ref(),
        );

        debug!(
            "Sub-scores: skills={:.2} ({}/{}), qualifications={:.2} ({}/{}), experience={:.2} [{}]",
            skills.score,
            skills.matched,
            skills.required,
            qualifications.score,
            qualifications.matched,
            qualifications.total,
            experience.score,
            self.policy
        );

        let total_score = SCORE_WEIGHTS.combine(skills.score, qualifications.score, experience.score);

        ScoreReport {
            total_score,
            skill_score: skills.score,
            qual_score: qualifications.score,
            exp_score: experience.score,
            skills,
            qualifications,
            experience,
            experience_policy: self.policy,
            verdict: Verdict::from_score(total_score),
        }
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EducationEntry, ExperienceEntry};
    use crate::scoring::clock::FixedClock;
    use crate::scoring::experience::ExperienceEvidence;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn scorer() -> MatchScorer {
        MatchScorer::new().with_clock(Arc::new(FixedClock(2024)))
    }

    fn sample_candidate() -> Candidate {
        Candidate {
            skills: strings(&["python", "sql"]),
            education: vec![EducationEntry {
                degree: "BS Computer Science".to_string(),
                ..Default::default()
            }],
            experience: vec![ExperienceEntry {
                start_date: "2019".to_string(),
                end_date: "present".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn sample_requirement() -> Requirement {
        Requirement {
            required_skills: strings(&["python", "react", "sql"]),
            qualifications: strings(&["Bachelor's degree"]),
            experience_needed: strings(&["5+ years"]),
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let report = scorer().score(&sample_candidate(), &sample_requirement());

        assert!((report.skill_score - 66.67).abs() < 0.01);
        assert_eq!(report.qual_score, 100.0);
        assert_eq!(report.exp_score, 100.0);
        assert_eq!(
            report.experience.evidence,
            ExperienceEvidence::Duration { candidate_years: 6, required_years: 5 }
        );
        assert_eq!(report.total_score, 76);
        assert_eq!(report.verdict, Verdict::Good);
    }

    #[test]
    fn test_empty_requirement_scores_full() {
        let report = scorer().score(&sample_candidate(), &Requirement::default());
        assert_eq!(report.skill_score, 100.0);
        assert_eq!(report.qual_score, 100.0);
        assert_eq!(report.exp_score, 100.0);
        assert_eq!(report.total_score, 100);
    }

    #[test]
    fn test_empty_candidate_does_not_fail() {
        let report = scorer().score(&Candidate::default(), &sample_requirement());
        assert_eq!(report.skill_score, 0.0);
        assert_eq!(report.qual_score, 0.0);
        assert_eq!(report.exp_score, 0.0);
        assert_eq!(report.total_score, 0);
    }

    #[test]
    fn test_item_count_policy() {
        let report = scorer()
            .with_policy(ExperiencePolicy::ItemCount)
            .score(&sample_candidate(), &sample_requirement());

        assert_eq!(report.experience_policy, ExperiencePolicy::ItemCount);
        assert_eq!(report.exp_score, 0.0);
        // floor(46.67 + 20 + 0)
        assert_eq!(report.total_score, 66);
    }

    #[test]
    fn test_repeated_scoring_is_identical() {
        let s = scorer();
        let first = s.score(&sample_candidate(), &sample_requirement());
        let second = s.score(&sample_candidate(), &sample_requirement());
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_scorer_is_shareable_across_threads() {
        let s = scorer();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let s = s.clone();
                std::thread::spawn(move || {
                    s.score(&sample_candidate(), &sample_requirement()).total_score
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 76);
        }
    }
}
