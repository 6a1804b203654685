//! Compiled routing tables
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

use super::spec::{FieldKind, Schema};
use crate::error::SchemaError;
use crate::record::Routed;
use std::collections::HashMap;
use tracing::debug;

/// Index of the field every parse starts in
pub const ENTRY_INDEX: usize = 0;

/// Compiled metadata for one destination field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    index: usize,
    name: String,
    kind: FieldKind,
    routes: HashMap<u8, usize>,
}

impl FieldDescriptor {
    /// Position of this field in the table
    pub fn index(&self) -> usize {
        self.index
    }

    /// Diagnostic label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Segment conversion
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Field to switch to when `byte` is met while this field is active
    #[inline]
    pub fn next(&self, byte: u8) -> Option<usize> {
        self.routes.get(&byte).copied()
    }

    /// Whether `byte` ends this field
    pub fn is_delimiter(&self, byte: u8) -> bool {
        self.routes.contains_key(&byte)
    }

    /// All routes as `(trigger, target)` pairs, ordered by trigger
    pub fn routes(&self) -> Vec<(char, usize)> {
        let mut routes: Vec<(char, usize)> = self
            .routes
            .iter()
            .map(|(byte, target)| (char::from(*byte), *target))
            .collect();
        routes.sort_unstable();
        routes
    }
}

/// Immutable field table keyed by index
///
/// Built once with [`RoutingTable::compile`] and shared read-only between
/// any number of parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTable {
    name: Option<String>,
    fields: HashMap<usize, FieldDescriptor>,
    order: Vec<usize>,
}

impl RoutingTable {
    /// Validate `schema` and build its routing table
    ///
    /// Fails on duplicate indices, non-ASCII triggers, a missing entry field
    /// or a route whose target no field declares.
    pub fn compile(schema: &Schema) -> Result<Self, SchemaError> {
        let mut fields: HashMap<usize, FieldDescriptor> = HashMap::with_capacity(schema.len());

        for spec in &schema.fields {
            if let Some(existing) = fields.get(&spec.index) {
                return Err(SchemaError::DuplicateIndex {
                    index: spec.index,
                    name: spec.name.clone(),
                    existing: existing.name.clone(),
                });
            }

            let mut routes = HashMap::with_capacity(spec.routes.len());
            for (&trigger, &target) in &spec.routes {
                if !trigger.is_ascii() {
                    return Err(SchemaError::NonAsciiTrigger {
                        name: spec.name.clone(),
                        trigger,
                    });
                }
                routes.insert(trigger as u8, target);
            }

            fields.insert(
                spec.index,
                FieldDescriptor {
                    index: spec.index,
                    name: spec.name.clone(),
                    kind: spec.kind,
                    routes,
                },
            );
        }

        if !fields.contains_key(&ENTRY_INDEX) {
            return Err(SchemaError::MissingEntry);
        }

        // Declaration order keeps the reported route deterministic.
        for spec in &schema.fields {
            for (&trigger, &target) in &spec.routes {
                if !fields.contains_key(&target) {
                    return Err(SchemaError::DanglingRoute {
                        name: spec.name.clone(),
                        trigger,
                        target,
                    });
                }
            }
        }

        debug!(
            schema = schema.name.as_deref().unwrap_or("<anonymous>"),
            fields = fields.len(),
            "compiled routing table"
        );

        let mut order: Vec<usize> = fields.keys().copied().collect();
        order.sort_unstable();

        Ok(Self {
            name: schema.name.clone(),
            fields,
            order,
        })
    }

    /// Compile the schema a host record declares for itself
    pub fn for_record<R: Routed>() -> Result<Self, SchemaError> {
        Self::compile(&R::schema())
    }

    /// Schema label, if one was given
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Look up a field by index
    #[inline]
    pub fn field(&self, index: usize) -> Option<&FieldDescriptor> {
        self.fields.get(&index)
    }

    /// The field parsing starts in
    pub fn entry(&self) -> Result<&FieldDescriptor, SchemaError> {
        self.field(ENTRY_INDEX).ok_or(SchemaError::MissingEntry)
    }

    /// Index of the field called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields
            .values()
            .find(|field| field.name == name)
            .map(|field| field.index)
    }

    /// All descriptors ordered by index
    pub fn descriptors(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.order.iter().filter_map(|index| self.fields.get(index))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false for a compiled table; the entry field is mandatory
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
