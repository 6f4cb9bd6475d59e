//! Job requirements extracted from a job description

use super::lenient_text_list;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub required_skills: Vec<String>,

    /// Educational or certification requirements, e.g. "BS in Computer Science"
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub qualifications: Vec<String>,

    /// Experience requirements, e.g. "5+ years in software development"
    #[serde(default, deserialize_with = "lenient_text_list")]
    pub experience_needed: Vec<String>,
}
