//! Input manager for loading extracted records

use crate::error::{MatcherError, Result};
use crate::input::file_detector::FileType;
use crate::input::record_reader::{JsonReader, RecordReader, TomlReader};
use crate::model::{Candidate, Requirement};
use log::info;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, serde_json::Value>,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub async fn load_candidate(&mut self, path: &Path) -> Result<Candidate> {
        let value = self.read_document(path).await?;
        decode_record(value, "Resume")
    }

    pub async fn load_requirement(&mut self, path: &Path) -> Result<Requirement> {
        let value = self.read_document(path).await?;
        decode_record(value, "Job description")
    }

    pub async fn read_document(&mut self, path: &Path) -> Result<serde_json::Value> {
        let path_str = path.to_string_lossy().to_string();

        if let Some(cached) = self.cache.get(&path_str) {
            info!("Using cached record for: {}", path.display());
            return Ok(cached.clone());
        }

        if !path.exists() {
            return Err(MatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let value = match self.detect_file_type(path)? {
            FileType::Json => {
                info!("Reading JSON record: {}", path.display());
                JsonReader.read(path).await?
            }
            FileType::Toml => {
                info!("Reading TOML record: {}", path.display());
                TomlReader.read(path).await?
            }
            FileType::Unknown => {
                return Err(MatcherError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        self.cache.insert(path_str, value.clone());

        Ok(value)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                MatcherError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a generic document against a record schema.
///
/// Missing and null fields are accepted; a field of the wrong shape is
/// reported with the record kind so the caller can tell which file is bad.
pub fn decode_record<T: DeserializeOwned>(value: serde_json::Value, kind: &str) -> Result<T> {
    if !value.is_object() {
        return Err(MatcherError::InvalidInput(format!(
            "{} record must be an object, got {}",
            kind,
            json_type_name(&value)
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| MatcherError::InvalidInput(format!("{} record: {}", kind, e)))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_rejects_non_object() {
        let err = decode_record::<Candidate>(json!(["python"]), "Resume").unwrap_err();
        assert!(err.to_string().contains("Resume record must be an object, got a list"));
    }

    #[test]
    fn test_decode_names_record_kind() {
        let err = decode_record::<Requirement>(
            json!({"qualifications": {"degree": "BS"}}),
            "Job description",
        )
        .unwrap_err();
        match err {
            MatcherError::InvalidInput(msg) => assert!(msg.starts_with("Job description record")),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_decode_empty_object() {
        let requirement = decode_record::<Requirement>(json!({}), "Job description").unwrap();
        assert_eq!(requirement, Requirement::default());
    }
}
