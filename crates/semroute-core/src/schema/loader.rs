//! Loading schema descriptions from YAML and JSON
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

use super::spec::Schema;
use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Supported schema description formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML format (.yaml, .yml)
    Yaml,
    /// JSON format (.json)
    Json,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Get the primary file extension for this format
    pub fn primary_extension(&self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
        }
    }
}

impl Schema {
    /// Deserialize a schema description in the given format
    pub fn from_str_with(content: &str, format: Format) -> Result<Self> {
        match format {
            Format::Yaml => Self::from_yaml_str(content),
            Format::Json => Self::from_json_str(content),
        }
    }

    /// Deserialize a YAML schema description
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|source| Error::Yaml { source })
    }

    /// Deserialize a JSON schema description
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| Error::Json { source })
    }

    /// Read a schema description, detecting the format from the extension
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let schema = Self::from_str_with(&content, format)?;
        debug!(
            path = %path.display(),
            fields = schema.len(),
            "loaded schema description"
        );
        Ok(schema)
    }

    /// Serialize to YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|source| Error::Yaml { source })
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| Error::Json { source })
    }
}
