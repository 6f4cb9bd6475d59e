//! Report rendering: console, JSON, Markdown and HTML

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, ReportGenerator};
pub use report::{MatchReport, ReportMetadata};
