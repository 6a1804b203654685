//! Destination records and their typed write slots
//!
//! The parser never knows the concrete type it writes into. A destination
//! implements [`Record`] and hands out one [`Slot`] per field index; the slot
//! variant fixes how the segment is converted. Host structs that carry their
//! own layout also implement [`Routed`].
//!
//! [`FieldValues`] is the schema-agnostic record used when the layout only
//! exists as data, e.g. a schema loaded from a file.
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

use crate::error::{NumberError, ParseError};
use crate::schema::{FieldDescriptor, FieldKind, RoutingTable, Schema};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Exclusive write handle into one field of a record
#[derive(Debug)]
pub enum Slot<'a> {
    Signed(&'a mut i64),
    Unsigned(&'a mut u64),
    Text(&'a mut String),
}

impl Slot<'_> {
    /// Kind of value this slot accepts
    pub fn kind(&self) -> FieldKind {
        match self {
            Slot::Signed(_) => FieldKind::Signed,
            Slot::Unsigned(_) => FieldKind::Unsigned,
            Slot::Text(_) => FieldKind::Text,
        }
    }

    /// Convert `segment` and write it through the slot
    ///
    /// `position` is the byte offset of the segment in the whole input and
    /// only feeds the error.
    pub fn store(
        self,
        field: &FieldDescriptor,
        segment: &str,
        position: usize,
    ) -> Result<(), ParseError> {
        match self {
            Slot::Signed(target) => {
                *target = segment.parse::<i64>().map_err(|source| {
                    ParseError::invalid_number(field.name(), segment, position, source)
                })?;
            }
            Slot::Unsigned(target) => {
                // `u64::from_str` takes a leading '+'; unsigned fields are digits only.
                if segment.starts_with('+') {
                    return Err(ParseError::invalid_number(
                        field.name(),
                        segment,
                        position,
                        NumberError::UnexpectedSign,
                    ));
                }
                *target = segment.parse::<u64>().map_err(|source| {
                    ParseError::invalid_number(field.name(), segment, position, source)
                })?;
            }
            Slot::Text(target) => {
                target.clear();
                target.push_str(segment);
            }
        }
        Ok(())
    }
}

/// A destination the routing parser can write into
pub trait Record {
    /// Write handle for the field at `index`, or `None` if the record has no
    /// such field
    fn slot(&mut self, index: usize) -> Option<Slot<'_>>;
}

/// A record that declares its own schema
pub trait Routed: Record {
    fn schema() -> Schema;
}

/// A single stored field value
///
/// Serializes as the bare number or string. There is no `Deserialize`: a
/// bare non-negative number cannot say whether it was signed or unsigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

impl FieldValue {
    /// Zero value for `kind`
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Signed => FieldValue::Signed(0),
            FieldKind::Unsigned => FieldValue::Unsigned(0),
            FieldKind::Text => FieldValue::Text(String::new()),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Signed(_) => FieldKind::Signed,
            FieldValue::Unsigned(_) => FieldKind::Unsigned,
            FieldValue::Text(_) => FieldKind::Text,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Signed(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::Unsigned(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    fn slot(&mut self) -> Slot<'_> {
        match self {
            FieldValue::Signed(n) => Slot::Signed(n),
            FieldValue::Unsigned(n) => Slot::Unsigned(n),
            FieldValue::Text(s) => Slot::Text(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NamedValue {
    name: String,
    value: FieldValue,
}

/// Record whose layout comes from a compiled table
///
/// Every field of the table starts at its kind's zero value. Serializes as a
/// map from field name to value, in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<usize, NamedValue>,
}

impl FieldValues {
    /// Seed one zero value per field of `table`
    pub fn for_table(table: &RoutingTable) -> Self {
        let values = table
            .descriptors()
            .map(|field| {
                (
                    field.index(),
                    NamedValue {
                        name: field.name().to_string(),
                        value: FieldValue::default_for(field.kind()),
                    },
                )
            })
            .collect();
        Self { values }
    }

    /// Value at `index`
    pub fn get(&self, index: usize) -> Option<&FieldValue> {
        self.values.get(&index).map(|named| &named.value)
    }

    /// Value of the field called `name`
    pub fn get_by_name(&self, name: &str) -> Option<&FieldValue> {
        self.values
            .values()
            .find(|named| named.name == name)
            .map(|named| &named.value)
    }

    /// Overwrite the value at `index`; the kind must stay the same
    pub fn set(&mut self, index: usize, value: FieldValue) -> bool {
        match self.values.get_mut(&index) {
            Some(named) if named.value.kind() == value.kind() => {
                named.value = value;
                true
            }
            _ => false,
        }
    }

    /// `(name, value)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values
            .values()
            .map(|named| (named.name.as_str(), &named.value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Record for FieldValues {
    fn slot(&mut self, index: usize) -> Option<Slot<'_>> {
        self.values.get_mut(&index).map(|named| named.value.slot())
    }
}

impl Serialize for FieldValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;

    fn table() -> RoutingTable {
        let schema = Schema::new()
            .field(FieldSpec::signed(0, "delta").route(':', 1))
            .field(FieldSpec::unsigned(1, "count").route(':', 2))
            .field(FieldSpec::text(2, "label"));
        RoutingTable::compile(&schema).unwrap()
    }

    #[test]
    fn test_store_signed() {
        let table = table();
        let mut n = 0i64;
        Slot::Signed(&mut n).store(table.field(0).unwrap(), "-42", 0).unwrap();
        assert_eq!(n, -42);
    }

    #[test]
    fn test_store_unsigned_rejects_negative() {
        let table = table();
        let mut n = 7u64;
        let err = Slot::Unsigned(&mut n)
            .store(table.field(1).unwrap(), "-1", 3)
            .unwrap_err();
        assert_eq!(err.field_name(), "count");
        assert_eq!(err.position(), Some(3));
        assert_eq!(n, 7);
    }

    #[test]
    fn test_store_unsigned_rejects_plus_sign() {
        let table = table();
        let mut n = 7u64;
        let err = Slot::Unsigned(&mut n)
            .store(table.field(1).unwrap(), "+5", 2)
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidNumber {
                source: NumberError::UnexpectedSign,
                position: 2,
                ..
            }
        ));
        assert_eq!(n, 7);

        // signed fields keep accepting an explicit sign
        let mut m = 0i64;
        Slot::Signed(&mut m).store(table.field(0).unwrap(), "+5", 0).unwrap();
        assert_eq!(m, 5);
    }

    #[test]
    fn test_store_text_replaces() {
        let table = table();
        let mut s = "old".to_string();
        Slot::Text(&mut s).store(table.field(2).unwrap(), "", 0).unwrap();
        assert_eq!(s, "");
    }

    #[test]
    fn test_field_values_seeded_from_table() {
        let values = FieldValues::for_table(&table());
        assert_eq!(values.len(), 3);
        assert_eq!(values.get(0), Some(&FieldValue::Signed(0)));
        assert_eq!(values.get_by_name("count"), Some(&FieldValue::Unsigned(0)));
        assert_eq!(values.get_by_name("label").and_then(|v| v.as_str()), Some(""));
        assert!(values.get(9).is_none());
    }

    #[test]
    fn test_field_values_set_keeps_kind() {
        let mut values = FieldValues::for_table(&table());
        assert!(values.set(0, FieldValue::Signed(-1)));
        assert!(!values.set(0, FieldValue::Text("x".into())));
        assert!(!values.set(5, FieldValue::Signed(1)));
        assert_eq!(values.get(0).and_then(|v| v.as_i64()), Some(-1));
    }

    #[test]
    fn test_field_value_serializes_bare() {
        assert_eq!(serde_json::to_string(&FieldValue::Unsigned(7)).unwrap(), "7");
        assert_eq!(serde_json::to_string(&FieldValue::Signed(-7)).unwrap(), "-7");
        assert_eq!(serde_json::to_string(&FieldValue::Text("rc".into())).unwrap(), "\"rc\"");
    }

    #[test]
    fn test_field_values_serialize_by_name() {
        let mut values = FieldValues::for_table(&table());
        values.set(2, FieldValue::Text("rc".into()));
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json, serde_json::json!({"delta": 0, "count": 0, "label": "rc"}));
    }
}
