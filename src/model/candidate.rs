//! Candidate profile extracted from a resume

use super::{lenient_list, lenient_text, lenient_text_list};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_text_list")]
    pub skills: Vec<String>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub education: Vec<EducationEntry>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub experience: Vec<ExperienceEntry>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub school: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start_year: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub end_year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start_date: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub end_date: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
}

impl Candidate {
    /// Lowercased `degree school` text of every education entry
    pub fn education_text(&self) -> String {
        self.education
            .iter()
            .map(|e| format!("{} {}", e.degree, e.school))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Lowercased `name description` text of every project
    pub fn project_text(&self) -> String {
        self.projects
            .iter()
            .map(|p| format!("{} {}", p.name, p.description))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Lowercased `position description` text of every experience entry
    pub fn experience_text(&self) -> String {
        self.experience
            .iter()
            .map(|e| format!("{} {}", e.position, e.description))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_decode_empty() {
        let candidate: Candidate = serde_json::from_value(json!({})).unwrap();
        assert_eq!(candidate, Candidate::default());
    }

    #[test]
    fn test_null_fields_decode_empty() {
        let candidate: Candidate = serde_json::from_value(json!({
            "name": null,
            "skills": null,
            "education": null,
            "experience": [{"company": null, "start_date": null}],
            "projects": null
        }))
        .unwrap();

        assert!(candidate.skills.is_empty());
        assert!(candidate.education.is_empty());
        assert_eq!(candidate.experience.len(), 1);
        assert_eq!(candidate.experience[0].start_date, "");
    }

    #[test]
    fn test_numeric_dates_become_text() {
        let candidate: Candidate = serde_json::from_value(json!({
            "experience": [{"start_date": 2019, "end_date": "Present"}],
            "education": [{"start_year": 2012, "end_year": 2016.0}]
        }))
        .unwrap();

        assert_eq!(candidate.experience[0].start_date, "2019");
        assert_eq!(candidate.education[0].start_year, "2012");
        assert!(candidate.education[0].end_year.starts_with("2016"));
    }

    #[test]
    fn test_non_list_field_is_rejected() {
        let result: std::result::Result<Candidate, _> =
            serde_json::from_value(json!({"skills": {"python": true}}));
        assert!(result.is_err());

        let result: std::result::Result<Candidate, _> =
            serde_json::from_value(json!({"education": ["BS Computer Science"]}));
        assert!(result.is_err());
    }

    #[test]
    fn test_education_text() {
        let candidate = Candidate {
            education: vec![
                EducationEntry {
                    degree: "BS Computer Science".to_string(),
                    school: "State University".to_string(),
                    ..Default::default()
                },
                EducationEntry {
                    degree: "MSc Data".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        assert_eq!(
            candidate.education_text(),
            "bs computer science state university msc data "
        );
    }
}
