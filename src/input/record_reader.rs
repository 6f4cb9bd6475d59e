//! Reading extracted records from JSON and TOML documents

use crate::error::{MatcherError, Result};
use std::path::Path;
use tokio::fs;

/// Reads a document into a generic JSON value for schema validation
pub trait RecordReader {
    fn read(&self, path: &Path) -> impl std::future::Future<Output = Result<serde_json::Value>> + Send;
}

pub struct JsonReader;

impl RecordReader for JsonReader {
    async fn read(&self, path: &Path) -> Result<serde_json::Value> {
        let content = fs::read_to_string(path).await.map_err(MatcherError::Io)?;

        serde_json::from_str(&content).map_err(|e| {
            MatcherError::InvalidInput(format!("'{}' is not valid JSON: {}", path.display(), e))
        })
    }
}

pub struct TomlReader;

impl RecordReader for TomlReader {
    async fn read(&self, path: &Path) -> Result<serde_json::Value> {
        let content = fs::read_to_string(path).await.map_err(MatcherError::Io)?;

        let value: toml::Value = toml::from_str(&content)?;
        Ok(serde_json::to_value(value)?)
    }
}
