//! Output formatters for score reports

use crate::config::OutputFormat;
use crate::error::{MatcherError, Result};
use crate::output::report::MatchReport;
use crate::scoring::skills::normalize_skill;
use crate::scoring::{Verdict, SCORE_WEIGHTS};
use askama::Template;
use colored::{Color, Colorize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for machine consumption
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
    detailed: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>CV &amp; Job Match Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .score-breakdown {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 15px;
        }
        .score-item {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #007acc;
        }
        .footer { color: #6c757d; font-size: 0.85em; margin-top: 30px; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <h1>CV &amp; Job Match Report</h1>
        <p>Overall Suitability Score: <strong>{{ total_score }} / 100</strong>
            <span class="score-badge {{ score_class }}">{{ score_label }}</span></p>
        <p>The score is a weighted average: {{ skill_weight }}% Skills, {{ qual_weight }}% Qualifications, and {{ exp_weight }}% Experience.</p>

        <div class="score-breakdown">
            <div class="score-item">
                <h4>Skill Match ({{ skill_weight }}%)</h4>
                <p><strong>{{ skill_score }}%</strong></p>
                <p>{{ skill_summary }}</p>
            </div>
            <div class="score-item">
                <h4>Qualification Match ({{ qual_weight }}%)</h4>
                <p><strong>{{ qual_score }}%</strong></p>
                <p>{{ qual_summary }}</p>
            </div>
            <div class="score-item">
                <h4>Experience Match ({{ exp_weight }}%)</h4>
                <p><strong>{{ exp_score }}%</strong></p>
                <p>{{ exp_summary }}</p>
            </div>
        </div>

        <h2>Matching Skills</h2>
        {% if has_matches %}
        <ul>
            {% for skill in overlapping_skills %}<li>{{ skill }}</li>{% endfor %}
        </ul>
        {% else %}
        <p>No matching skills found.</p>
        {% endif %}

        {% if has_missing %}
        <h2>Missing Skills</h2>
        <ul>
            {% for skill in missing_skills %}<li>{{ skill }}</li>{% endfor %}
        </ul>
        {% endif %}

        <div class="footer">
            Generated {{ generated_at }} by cv-matcher {{ version }} |
            Resume: {{ resume_file }} | Job: {{ job_file }} |
            Experience policy: {{ policy }} (as of {{ evaluation_year }})
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    total_score: u8,
    score_class: String,
    score_label: String,
    skill_weight: String,
    qual_weight: String,
    exp_weight: String,
    skill_score: String,
    qual_score: String,
    exp_score: String,
    skill_summary: String,
    qual_summary: String,
    exp_summary: String,
    has_matches: bool,
    overlapping_skills: Vec<String>,
    has_missing: bool,
    missing_skills: Vec<String>,
    generated_at: String,
    version: String,
    resume_file: String,
    job_file: String,
    policy: String,
    evaluation_year: i32,
}

/// Required skills the candidate does not list, normalized and sorted
pub fn missing_skills(report: &MatchReport) -> Vec<String> {
    let overlapping: BTreeSet<&str> = report
        .score
        .skills
        .overlapping
        .iter()
        .map(|s| s.as_str())
        .collect();

    report
        .requirement
        .required_skills
        .iter()
        .filter_map(|s| normalize_skill(s))
        .filter(|s| !overlapping.contains(s.as_str()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn weight_percent(weight: f64) -> String {
    format!("{:.0}", weight * 100.0)
}

fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let color = match score {
            90..=100 => Color::Green,
            80..=89 => Color::BrightGreen,
            70..=79 => Color::Yellow,
            60..=69 => Color::BrightYellow,
            50..=59 => Color::Red,
            _ => Color::BrightRed,
        };
        let badge = Verdict::from_score(score).label();

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let score = &report.score;
        let mut output = String::new();

        output.push_str(&self.format_header("📊 CV & JOB MATCH ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Resume: {} | Job: {}\n",
            report.metadata.generated_at_display(),
            display_name(&report.metadata.resume_file),
            display_name(&report.metadata.job_file)
        ));

        output.push_str(&self.format_header("Overall Suitability Score", 2));
        output.push_str(&format!(
            "{} / 100 {}\n",
            score.total_score,
            self.format_score_badge(score.total_score)
        ));
        output.push_str(&format!(
            "The score is a weighted average: {}% Skills, {}% Qualifications, and {}% Experience.\n",
            weight_percent(SCORE_WEIGHTS.skills),
            weight_percent(SCORE_WEIGHTS.qualifications),
            weight_percent(SCORE_WEIGHTS.experience)
        ));

        output.push_str(&self.format_header("Score Breakdown", 3));
        output.push_str(&format!(
            "🎯 Skill Match ({}%): {:.0}%\n   {}\n",
            weight_percent(SCORE_WEIGHTS.skills),
            score.skill_score,
            self.colorize(&score.skill_summary(), Color::Cyan)
        ));
        output.push_str(&format!(
            "🎓 Qualification Match ({}%): {:.0}%\n   {}\n",
            weight_percent(SCORE_WEIGHTS.qualifications),
            score.qual_score,
            self.colorize(&score.qualification_summary(), Color::Cyan)
        ));
        output.push_str(&format!(
            "💼 Experience Match ({}%): {:.0}%\n   {}\n",
            weight_percent(SCORE_WEIGHTS.experience),
            score.exp_score,
            self.colorize(&score.experience_summary(), Color::Cyan)
        ));
        output.push_str(&format!(
            "   Policy: {} (as of {})\n",
            report.metadata.experience_policy, report.metadata.evaluation_year
        ));

        output.push_str(&self.format_header("Matching Skills", 3));
        if score.skills.overlapping.is_empty() {
            output.push_str("No matching skills found.\n");
        } else {
            output.push_str(&format!(
                "{}\n",
                self.colorize(&score.skills.overlapping.join(", "), Color::Green)
            ));
        }

        let missing = missing_skills(report);
        if !missing.is_empty() {
            output.push_str(&self.format_header("Missing Skills", 3));
            output.push_str(&format!("{}\n", self.colorize(&missing.join(", "), Color::Red)));
        }

        if self.detailed {
            output.push_str(&self.format_header("Extracted Data", 2));
            output.push_str("CV Data:\n");
            output.push_str(&serde_json::to_string_pretty(&report.candidate)?);
            output.push_str("\n\nJob Description Data:\n");
            output.push_str(&serde_json::to_string_pretty(&report.requirement)?);
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool, detailed: bool) -> Self {
        Self {
            include_metadata,
            detailed,
        }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢",
            70..=89 => "🟡",
            50..=69 => "🟠",
            _ => "🔴",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let score = &report.score;
        let mut output = String::new();

        output.push_str("# 📊 CV & Job Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.generated_at_display(),
                display_name(&report.metadata.resume_file),
                display_name(&report.metadata.job_file)
            ));
        }

        output.push_str("## Overall Suitability Score\n\n");
        output.push_str(&format!(
            "**{} / 100** {} {}\n\n",
            score.total_score,
            Self::markdown_score_badge(score.total_score),
            score.verdict.label()
        ));

        output.push_str("## Score Breakdown\n\n");
        output.push_str("| Component | Weight | Score | Reasoning |\n");
        output.push_str("|-----------|--------|-------|-----------|\n");
        output.push_str(&format!(
            "| Skills | {}% | {:.0}% | {} |\n",
            weight_percent(SCORE_WEIGHTS.skills),
            score.skill_score,
            score.skill_summary()
        ));
        output.push_str(&format!(
            "| Qualifications | {}% | {:.0}% | {} |\n",
            weight_percent(SCORE_WEIGHTS.qualifications),
            score.qual_score,
            score.qualification_summary()
        ));
        output.push_str(&format!(
            "| Experience ({}) | {}% | {:.0}% | {} |\n\n",
            score.experience_policy,
            weight_percent(SCORE_WEIGHTS.experience),
            score.exp_score,
            score.experience_summary()
        ));

        output.push_str("## Matching Skills\n\n");
        if score.skills.overlapping.is_empty() {
            output.push_str("No matching skills found.\n\n");
        } else {
            output.push_str(&format!("`{}`\n\n", score.skills.overlapping.join(", ")));
        }

        let missing = missing_skills(report);
        if !missing.is_empty() {
            output.push_str("## Missing Skills\n\n");
            for skill in &missing {
                output.push_str(&format!("- {}\n", skill));
            }
            output.push('\n');
        }

        if self.detailed {
            output.push_str("## Extracted Data\n\n### CV Data\n\n```json\n");
            output.push_str(&serde_json::to_string_pretty(&report.candidate)?);
            output.push_str("\n```\n\n### Job Description Data\n\n```json\n");
            output.push_str(&serde_json::to_string_pretty(&report.requirement)?);
            output.push_str("\n```\n");
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &MatchReport) -> HtmlTemplate {
        let score = &report.score;
        let score_class = match score.verdict {
            Verdict::Excellent => "score-excellent",
            Verdict::VeryGood | Verdict::Good => "score-good",
            Verdict::Fair => "score-fair",
            Verdict::BelowAverage | Verdict::Poor => "score-poor",
        };
        let missing = missing_skills(report);

        HtmlTemplate {
            include_styles: self.include_styles,
            total_score: score.total_score,
            score_class: score_class.to_string(),
            score_label: score.verdict.label().to_string(),
            skill_weight: weight_percent(SCORE_WEIGHTS.skills),
            qual_weight: weight_percent(SCORE_WEIGHTS.qualifications),
            exp_weight: weight_percent(SCORE_WEIGHTS.experience),
            skill_score: format!("{:.0}", score.skill_score),
            qual_score: format!("{:.0}", score.qual_score),
            exp_score: format!("{:.0}", score.exp_score),
            skill_summary: score.skill_summary(),
            qual_summary: score.qualification_summary(),
            exp_summary: score.experience_summary(),
            has_matches: !score.skills.overlapping.is_empty(),
            overlapping_skills: score.skills.overlapping.clone(),
            has_missing: !missing.is_empty(),
            missing_skills: missing,
            generated_at: report.metadata.generated_at_display(),
            version: report.metadata.version.clone(),
            resume_file: display_name(&report.metadata.resume_file),
            job_file: display_name(&report.metadata.job_file),
            policy: report.metadata.experience_policy.to_string(),
            evaluation_year: report.metadata.evaluation_year,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| MatcherError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true, false),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata, detailed),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_match{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_match{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_match{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_match{}.html", base_name, timestamp_suffix),
    }
}

/// Where `--save` writes: an existing directory gets a generated file name
/// inside it, anything else is used as the file path.
pub fn resolve_save_path(target: &Path, format: &OutputFormat, resume_name: &str) -> PathBuf {
    if target.is_dir() {
        target.join(suggest_filename(format, resume_name, true))
    } else {
        target.to_path_buf()
    }
}
