//! Declarative schema descriptions
//!
//! A [`Schema`] is an ordered list of [`FieldSpec`]s. Each spec names a
//! destination field by index, declares how its segment is converted, and
//! lists the delimiter characters that end it together with the index of the
//! field that takes over.
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How a field's segment is converted before it is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Base-10 `i64`
    Signed,
    /// Base-10 `u64`
    Unsigned,
    /// Stored verbatim, empty allowed
    Text,
}

impl FieldKind {
    /// Whether segments of this kind go through integer conversion
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::Signed | FieldKind::Unsigned)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Signed => write!(f, "signed integer"),
            FieldKind::Unsigned => write!(f, "unsigned integer"),
            FieldKind::Text => write!(f, "text"),
        }
    }
}

/// Description of one destination field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Position in the routing table; 0 is the entry point
    pub index: usize,
    /// Diagnostic label
    pub name: String,
    /// Segment conversion
    pub kind: FieldKind,
    /// Delimiter character -> index of the next field
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub routes: BTreeMap<char, usize>,
}

impl FieldSpec {
    /// Create a field with no routes
    pub fn new(index: usize, name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            index,
            name: name.into(),
            kind,
            routes: BTreeMap::new(),
        }
    }

    /// Shorthand for a signed integer field
    pub fn signed(index: usize, name: impl Into<String>) -> Self {
        Self::new(index, name, FieldKind::Signed)
    }

    /// Shorthand for an unsigned integer field
    pub fn unsigned(index: usize, name: impl Into<String>) -> Self {
        Self::new(index, name, FieldKind::Unsigned)
    }

    /// Shorthand for a text field
    pub fn text(index: usize, name: impl Into<String>) -> Self {
        Self::new(index, name, FieldKind::Text)
    }

    /// Add a route; a later route for the same trigger replaces the earlier one
    pub fn route(mut self, trigger: char, target: usize) -> Self {
        self.routes.insert(trigger, target);
        self
    }
}

/// Ordered collection of field descriptions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Optional label used in log output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Field descriptions in declaration order
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema label
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a field description
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no field is declared
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`
    pub fn semver() -> Self {
        Self::new()
            .named("semver")
            .field(FieldSpec::signed(0, "major").route('.', 1))
            .field(FieldSpec::signed(1, "minor").route('.', 2))
            .field(FieldSpec::signed(2, "patch").route('+', 4).route('-', 3))
            .field(FieldSpec::text(3, "pre_release").route('+', 4))
            .field(FieldSpec::text(4, "build"))
    }
}

impl FromIterator<FieldSpec> for Schema {
    fn from_iter<I: IntoIterator<Item = FieldSpec>>(iter: I) -> Self {
        Self {
            name: None,
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_routes() {
        let spec = FieldSpec::signed(2, "patch").route('+', 4).route('-', 3);
        assert_eq!(spec.routes.get(&'+'), Some(&4));
        assert_eq!(spec.routes.get(&'-'), Some(&3));
        assert_eq!(spec.kind, FieldKind::Signed);
    }

    #[test]
    fn test_route_replaces_same_trigger() {
        let spec = FieldSpec::text(0, "head").route('.', 1).route('.', 2);
        assert_eq!(spec.routes.len(), 1);
        assert_eq!(spec.routes[&'.'], 2);
    }

    #[test]
    fn test_semver_schema_layout() {
        let schema = Schema::semver();
        assert_eq!(schema.len(), 5);
        assert_eq!(schema.name.as_deref(), Some("semver"));
        let build = schema.fields.iter().find(|f| f.name == "build").unwrap();
        assert!(build.routes.is_empty());
        assert_eq!(build.kind, FieldKind::Text);
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&FieldKind::Unsigned).unwrap();
        assert_eq!(json, "\"unsigned\"");
        let kind: FieldKind = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(kind, FieldKind::Text);
        assert!(!kind.is_numeric());
    }

    #[test]
    fn test_collect_into_schema() {
        let schema: Schema = vec![FieldSpec::unsigned(0, "a"), FieldSpec::text(1, "b")]
            .into_iter()
            .collect();
        assert_eq!(schema.len(), 2);
        assert!(schema.name.is_none());
    }
}
