//! Semroute Core - schema-driven version parsing and SemVer precedence
//!
//! This crate parses delimited version strings into typed records using a
//! declarative routing table, and compares semantic versions by precedence.
//!
//! ## Features
//!
//! - **Schemas as data**: field layouts built in code or loaded from YAML/JSON
//! - **Single-pass parsing**: each field's delimiters decide which field comes next
//! - **Typed slots**: signed, unsigned and text fields written in place
//! - **SemVer precedence**: numeric/lexicographic pre-release tie-breaks
//! - **Sentinel validity**: detect required fields a parse never reached
//!
//! ## Quick Start
//!
//! ```rust
//! use semroute_core::SemVersion;
//! use std::cmp::Ordering;
//!
//! let v = SemVersion::parse("1.4.0-rc.1+sha.5114f85").unwrap();
//! assert_eq!(v.pre_release, "rc.1");
//! assert_eq!(v.compare_str("1.4.0").unwrap(), Ordering::Less);
//! assert!(SemVersion::is_valid("1.4.0"));
//! assert!(!SemVersion::is_valid("1.4"));
//! ```
//!
//! ## Custom layouts
//!
//! ```rust
//! use semroute_core::{FieldSpec, RoutingTable, Schema};
//!
//! let schema = Schema::new()
//!     .field(FieldSpec::unsigned(0, "year").route('.', 1))
//!     .field(FieldSpec::unsigned(1, "month").route('-', 2))
//!     .field(FieldSpec::text(2, "tag"));
//! let table = RoutingTable::compile(&schema).unwrap();
//!
//! let values = table.parse_values("2024.05-lts").unwrap();
//! assert_eq!(values.get_by_name("month").and_then(|v| v.as_u64()), Some(5));
//! ```
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;
pub mod record;
pub mod schema;
pub mod semver;
pub mod validity;

// Re-export commonly used types for convenience
pub use error::{Error, NumberError, ParseError, Result, SchemaError};
pub use parser::{parse, Parser};
pub use record::{FieldValue, FieldValues, Record, Routed, Slot};
pub use schema::{FieldDescriptor, FieldKind, FieldSpec, Format, RoutingTable, Schema};
pub use semver::SemVersion;
pub use validity::SentinelCheck;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
