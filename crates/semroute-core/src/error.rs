//! Error types for schema compilation, parsing and schema loading
//!
//! Schema problems are reported as [`SchemaError`], segment conversion
//! problems as [`ParseError`]. Both fold into the crate-level [`Error`]
//! together with the I/O and deserialization failures of the schema loader.
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

use crate::schema::FieldKind;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while compiling a schema or binding it to a record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two fields declare the same index
    #[error("Field '{name}' declares index {index}, which is already taken by '{existing}'")]
    DuplicateIndex {
        index: usize,
        name: String,
        existing: String,
    },

    /// A route points at an index no field declares
    #[error("Field '{name}' routes '{trigger}' to index {target}, which has no field")]
    DanglingRoute {
        name: String,
        trigger: char,
        target: usize,
    },

    /// The destination record exposes no slot for a declared field
    #[error("Field '{name}' (index {index}) is not accessible on the destination record")]
    FieldNotAccessible { index: usize, name: String },

    /// No field declares the entry index 0
    #[error("Schema has no entry field at index 0")]
    MissingEntry,

    /// Route triggers must be single ASCII characters
    #[error("Field '{name}' uses route trigger '{trigger}', which is not an ASCII character")]
    NonAsciiTrigger { name: String, trigger: char },
}

/// Why a numeric segment was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// Not a base-10 integer in range
    #[error(transparent)]
    Int(#[from] ParseIntError),

    /// Unsigned fields take digits only, no leading '+'
    #[error("unsigned value must not carry a sign")]
    UnexpectedSign,
}

/// Errors raised while converting input segments into field values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A numeric field received a segment that is not a base-10 integer
    #[error("Invalid number '{segment}' for field '{field}' at position {position}: {source}")]
    InvalidNumber {
        field: String,
        segment: String,
        position: usize,
        #[source]
        source: NumberError,
    },

    /// The record's slot has a different kind than the schema declares
    #[error("Unsupported kind for field '{field}': schema declares {expected}, record holds {found}")]
    UnsupportedKind {
        field: String,
        expected: FieldKind,
        found: FieldKind,
    },

    /// The input ended before a required field was written
    #[error("Field '{field}' is required but the input never reached it")]
    MissingField { field: String },
}

impl ParseError {
    /// Create an invalid number error
    pub fn invalid_number(
        field: impl Into<String>,
        segment: impl Into<String>,
        position: usize,
        source: impl Into<NumberError>,
    ) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            segment: segment.into(),
            position,
            source: source.into(),
        }
    }

    /// Create an unsupported kind error
    pub fn unsupported_kind(field: impl Into<String>, expected: FieldKind, found: FieldKind) -> Self {
        Self::UnsupportedKind {
            field: field.into(),
            expected,
            found,
        }
    }

    /// Name of the field the error was raised for
    pub fn field_name(&self) -> &str {
        match self {
            Self::InvalidNumber { field, .. } => field,
            Self::UnsupportedKind { field, .. } => field,
            Self::MissingField { field } => field,
        }
    }

    /// Byte offset of the offending segment, if the error came from the scan
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidNumber { position, .. } => Some(*position),
            Self::UnsupportedKind { .. } | Self::MissingField { .. } => None,
        }
    }
}

/// Main error type for semroute operations
#[derive(Error, Debug)]
pub enum Error {
    /// Schema compilation or binding errors
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Input conversion errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Schema file could not be read
    #[error("Failed to read schema file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML schema description could not be deserialized
    #[error("Failed to parse YAML schema: {source}")]
    Yaml {
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON schema description could not be deserialized
    #[error("Failed to parse JSON schema: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    /// Schema file extension is not one the loader understands
    #[error("Unsupported schema format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error came from the schema rather than the input
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::Schema(_)
                | Self::Io { .. }
                | Self::Yaml { .. }
                | Self::Json { .. }
                | Self::UnsupportedFormat { .. }
        )
    }

    /// Borrow the parse error, if this is one
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}
