//! Year extraction from free-text dates and experience requirements
//!
//! Dates come from a generative extraction step, so they are natural language
//! ("Jan 2019", "2019 - now", "Present"). Only two patterns are recognised:
//! the first run of four digits in a date, and `<n>+? year(s)` in a
//! requirement. Nothing else is interpreted.

use crate::model::ExperienceEntry;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

lazy_static! {
    static ref YEAR_RE: Regex = Regex::new(r"[0-9]{4}").expect("Invalid year regex");
    static ref REQUIRED_YEARS_RE: Regex =
        Regex::new(r"(?i)([0-9]+)\+?\s*years?").expect("Invalid required years regex");
}

const OPEN_ENDED_MARKERS: [&str; 2] = ["current", "present"];

/// First four-digit run in `text`, if any
pub fn first_year(text: &str) -> Option<i32> {
    YEAR_RE
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
}

/// Whether an end date denotes an ongoing position
pub fn is_open_ended(text: &str) -> bool {
    let lower = text.to_lowercase();
    OPEN_ENDED_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Inclusive span of one experience entry, in whole years.
///
/// Returns `None` when the entry has no start year or the span is not
/// positive; such entries contribute nothing.
pub fn tenure_years(entry: &ExperienceEntry, current_year: i32) -> Option<u32> {
    let start_year = first_year(&entry.start_date)?;

    let end_year = if is_open_ended(&entry.end_date) {
        current_year
    } else {
        // Missing end year counts as a one-year stint past the start
        first_year(&entry.end_date).unwrap_or(start_year + 1)
    };

    let duration = i64::from(end_year) - i64::from(start_year) + 1;
    if duration > 0 {
        u32::try_from(duration).ok()
    } else {
        None
    }
}

/// Sum of inclusive tenure over all entries. Overlapping positions are
/// counted twice.
pub fn total_experience_years(entries: &[ExperienceEntry], current_year: i32) -> u32 {
    entries
        .iter()
        .filter_map(|entry| {
            let years = tenure_years(entry, current_year);
            if years.is_none() {
                debug!(
                    "Skipping experience entry without usable dates: start={:?} end={:?}",
                    entry.start_date, entry.end_date
                );
            }
            years
        })
        .fold(0u32, |total, years| total.saturating_add(years))
}

/// Largest `<n> year(s)` figure mentioned across all requirement strings,
/// or 0 when none is mentioned
pub fn required_years(requirements: &[String]) -> u32 {
    requirements
        .iter()
        .flat_map(|text| REQUIRED_YEARS_RE.captures_iter(text))
        .filter_map(|caps| caps.get(1)?.as_str().parse::<u32>().ok())
        .max()
        .unwrap_or(0)
}
