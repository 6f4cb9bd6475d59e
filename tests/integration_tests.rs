//! Integration tests for the cv matcher

use cv_matcher::config::OutputFormat;
use cv_matcher::input::InputManager;
use cv_matcher::output::formatter::save_report_to_file;
use cv_matcher::output::{MatchReport, ReportGenerator, ReportMetadata};
use cv_matcher::scoring::{ExperienceEvidence, ExperiencePolicy, FixedClock, MatchScorer};
use cv_matcher::MatcherError;
use std::path::Path;
use std::sync::Arc;

fn scorer() -> MatchScorer {
    MatchScorer::new().with_clock(Arc::new(FixedClock(2024)))
}

#[tokio::test]
async fn test_score_json_fixtures() {
    let mut manager = InputManager::new();
    let candidate = manager
        .load_candidate(Path::new("tests/fixtures/candidate.json"))
        .await
        .unwrap();
    let requirement = manager
        .load_requirement(Path::new("tests/fixtures/job.json"))
        .await
        .unwrap();

    let report = scorer().score(&candidate, &requirement);

    assert_eq!(report.skills.overlapping, vec!["python", "sql"]);
    assert_eq!(report.qualifications.matched, 2);
    assert_eq!(
        report.experience.evidence,
        ExperienceEvidence::Duration { candidate_years: 7, required_years: 5 }
    );
    assert_eq!(report.total_score, 76);
}

#[tokio::test]
async fn test_toml_and_json_requirements_agree() {
    let mut manager = InputManager::new();
    let from_json = manager
        .load_requirement(Path::new("tests/fixtures/job.json"))
        .await
        .unwrap();
    let from_toml = manager
        .load_requirement(Path::new("tests/fixtures/job.toml"))
        .await
        .unwrap();

    assert_eq!(from_json, from_toml);
}

#[tokio::test]
async fn test_baseline_variant() {
    let mut manager = InputManager::new();
    let candidate = manager
        .load_candidate(Path::new("tests/fixtures/candidate.json"))
        .await
        .unwrap();
    let requirement = manager
        .load_requirement(Path::new("tests/fixtures/job.json"))
        .await
        .unwrap();

    let without_projects = scorer().with_projects(false).score(&candidate, &requirement);
    assert_eq!(without_projects.qual_score, 50.0);
    assert_eq!(without_projects.total_score, 66);

    let item_count = scorer()
        .with_policy(ExperiencePolicy::ItemCount)
        .score(&candidate, &requirement);
    assert_eq!(item_count.exp_score, 0.0);
    assert_eq!(item_count.total_score, 66);
}

#[tokio::test]
async fn test_sparse_candidate_degrades_gracefully() {
    let mut manager = InputManager::new();
    let candidate = manager
        .load_candidate(Path::new("tests/fixtures/sparse_candidate.json"))
        .await
        .unwrap();
    let requirement = manager
        .load_requirement(Path::new("tests/fixtures/job.json"))
        .await
        .unwrap();

    let report = scorer().score(&candidate, &requirement);
    assert_eq!(report.skill_score, 0.0);
    assert_eq!(report.qual_score, 0.0);
    assert_eq!(report.exp_score, 40.0);
    assert_eq!(report.total_score, 4);
}

#[tokio::test]
async fn test_malformed_requirement_is_rejected() {
    let mut manager = InputManager::new();
    let result = manager
        .load_requirement(Path::new("tests/fixtures/malformed_job.json"))
        .await;

    assert!(matches!(result, Err(MatcherError::InvalidInput(_))));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/candidate.json");

    let first = manager.load_candidate(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.load_candidate(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager
        .load_candidate(Path::new("tests/fixtures/unsupported.xyz"))
        .await;

    assert!(matches!(result, Err(MatcherError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager
        .load_candidate(Path::new("tests/fixtures/nonexistent.json"))
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_render_and_save_report() {
    let mut manager = InputManager::new();
    let candidate = manager
        .load_candidate(Path::new("tests/fixtures/candidate.json"))
        .await
        .unwrap();
    let requirement = manager
        .load_requirement(Path::new("tests/fixtures/job.json"))
        .await
        .unwrap();

    let s = scorer();
    let score = s.score(&candidate, &requirement);
    let metadata = ReportMetadata::new(
        "tests/fixtures/candidate.json",
        "tests/fixtures/job.json",
        s.current_year(),
        s.policy(),
    );
    let report = MatchReport::new(score, metadata, candidate, requirement);

    let generator = ReportGenerator::with_options(false, true, true, true, true);
    let markdown = generator
        .generate_report(&report, &OutputFormat::Markdown)
        .unwrap();
    assert!(markdown.contains("**76 / 100**"));
    assert!(markdown.contains("Calculated 7 years vs. required 5 years."));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("jane.md");
    save_report_to_file(&markdown, &path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), markdown);
}

#[test]
fn test_library_score_entry_point() {
    let report = cv_matcher::score(
        &cv_matcher::Candidate::default(),
        &cv_matcher::Requirement::default(),
    );
    assert_eq!(report.total_score, 100);
}
