//! cv-matcher: rule-based resume and job description match scoring

use clap::Parser;
use cv_matcher::cli::{self, Cli, Commands, ConfigAction};
use cv_matcher::config::Config;
use cv_matcher::error::{MatcherError, Result};
use cv_matcher::input::InputManager;
use cv_matcher::output::formatter::{resolve_save_path, save_report_to_file};
use cv_matcher::output::{MatchReport, ReportGenerator, ReportMetadata};
use cv_matcher::scoring::{Clock, ExperiencePolicy, FixedClock, MatchScorer, SystemClock};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            job,
            policy,
            year,
            output,
            detailed,
            save,
            no_projects,
        } => {
            info!("Starting match scoring");

            // Validate input files
            cli::validate_file_extension(&resume, &["json", "toml"])
                .map_err(|e| MatcherError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["json", "toml"])
                .map_err(|e| MatcherError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(MatcherError::InvalidInput)?,
                None => config.output.format,
            };

            let policy = match policy {
                Some(policy) => policy
                    .parse::<ExperiencePolicy>()
                    .map_err(MatcherError::InvalidInput)?,
                None => config.scoring.experience_policy,
            };

            let clock: Arc<dyn Clock> = match year {
                Some(year) => Arc::new(FixedClock(year)),
                None => Arc::new(SystemClock),
            };

            let mut input_manager = InputManager::new();
            let candidate = input_manager.load_candidate(&resume).await?;
            let requirement = input_manager.load_requirement(&job).await?;

            let scorer = MatchScorer::from_config(&config.scoring)
                .with_policy(policy)
                .with_projects(config.scoring.include_projects && !no_projects)
                .with_clock(clock);

            let score = scorer.score(&candidate, &requirement);
            info!(
                "Scored {} against {}: {} / 100",
                resume.display(),
                job.display(),
                score.total_score
            );

            let metadata = ReportMetadata::new(
                resume.to_string_lossy(),
                job.to_string_lossy(),
                scorer.current_year(),
                scorer.policy(),
            );
            let report = MatchReport::new(score, metadata, candidate, requirement);

            let generator = ReportGenerator::with_options(
                config.output.color_output && save.is_none(),
                detailed || config.output.detailed,
                config.output.pretty_json,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(target) => {
                    let path = resolve_save_path(&target, &output_format, &resume.to_string_lossy());
                    save_report_to_file(&rendered, &path)?;
                    println!("✅ Report saved to {}", path.display());
                    println!("🎯 Overall Suitability Score: {} / 100", report.score.total_score);
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Experience Policy: {}", config.scoring.experience_policy);
                    println!("Include Projects: {}", config.scoring.include_projects);
                    println!("Output Format: {:?}", config.output.format);
                    println!("Detailed Output: {}", config.output.detailed);
                    println!("Colored Output: {}", config.output.color_output);
                    println!("Pretty JSON: {}", config.output.pretty_json);
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Set { key, value }) => {
                    let mut config = config;
                    config.set(&key, &value)?;
                    config.save_to(&path)?;
                    println!("🔧 Set {} = {}", key, value);
                }
            }
        }
    }

    Ok(())
}
