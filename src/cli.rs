//! CLI interface for the cv matcher

use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cv-matcher")]
#[command(about = "Score a resume against a job description")]
#[command(long_about = "Compare a structured candidate profile with structured job requirements \
and report a weighted suitability score: 70% skills, 20% qualifications, 10% experience")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a candidate profile against job requirements
    Score {
        /// Path to the extracted resume record (JSON, TOML)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to the extracted job requirements record (JSON, TOML)
        #[arg(short, long)]
        job: PathBuf,

        /// Experience policy: duration, item-count
        #[arg(short, long)]
        policy: Option<String>,

        /// Evaluate open-ended positions as of this year instead of today
        #[arg(short, long)]
        year: Option<i32>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Include the extracted records in the output
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file, or into a directory under a generated name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Search only education for qualifications, ignoring projects
        #[arg(long)]
        no_projects: bool,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.experience_policy")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
