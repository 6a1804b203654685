//! Single-pass routing parser
//!
//! The parser walks the input once, byte by byte. The active field's routes
//! decide whether a byte is content or a delimiter; a delimiter ends the
//! active field, its segment is converted into the record's slot, and the
//! routed field takes over. End of input ends the last field.
//!
//! Routing is per field: a delimiter the active field does not route on is
//! plain content. Fields written before a failure keep their new values;
//! fields after it are untouched.
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

use crate::error::{ParseError, Result, SchemaError};
use crate::record::{FieldValues, Record, Routed};
use crate::schema::{FieldDescriptor, RoutingTable};
use tracing::{debug, trace};

/// Routing parser over a compiled table
#[derive(Debug, Clone, Copy)]
pub struct Parser<'t> {
    table: &'t RoutingTable,
}

impl<'t> Parser<'t> {
    /// Create a parser for `table`
    pub fn new(table: &'t RoutingTable) -> Self {
        Self { table }
    }

    /// Table this parser walks
    pub fn table(&self) -> &'t RoutingTable {
        self.table
    }

    /// Check that `record` exposes a slot of the declared kind for every field
    pub fn bind<R: Record + ?Sized>(&self, record: &mut R) -> Result<()> {
        for field in self.table.descriptors() {
            let found = match record.slot(field.index()) {
                Some(slot) => slot.kind(),
                None => {
                    return Err(SchemaError::FieldNotAccessible {
                        index: field.index(),
                        name: field.name().to_string(),
                    }
                    .into())
                }
            };
            if found != field.kind() {
                return Err(ParseError::unsupported_kind(field.name(), field.kind(), found).into());
            }
        }
        Ok(())
    }

    /// Parse `input` into `record`
    pub fn parse_into<R: Record + ?Sized>(&self, record: &mut R, input: &str) -> Result<()> {
        self.bind(record)?;

        let result = self.scan(record, input);
        if let Err(ref err) = result {
            debug!(
                schema = self.table.name().unwrap_or("<anonymous>"),
                input,
                error = %err,
                "parse failed"
            );
        }
        result
    }

    fn scan<R: Record + ?Sized>(&self, record: &mut R, input: &str) -> Result<()> {
        let bytes = input.as_bytes();
        let mut start = 0;
        let mut current = self.table.entry()?;

        for i in 0..=bytes.len() {
            let next = match bytes.get(i) {
                Some(&byte) => match current.next(byte) {
                    Some(target) => Some((byte, target)),
                    None => continue,
                },
                None => None,
            };

            // Triggers are ASCII, so `start` and `i` sit on char boundaries.
            self.flush(record, current, &input[start..i], start)?;

            match next {
                Some((byte, target)) => {
                    // Compilation rejects dangling routes; this only guards the lookup.
                    current = self.table.field(target).ok_or_else(|| {
                        SchemaError::DanglingRoute {
                            name: current.name().to_string(),
                            trigger: char::from(byte),
                            target,
                        }
                    })?;
                    start = i + 1;
                }
                None => break,
            }
        }

        Ok(())
    }

    fn flush<R: Record + ?Sized>(
        &self,
        record: &mut R,
        field: &FieldDescriptor,
        segment: &str,
        position: usize,
    ) -> Result<()> {
        trace!(field = field.name(), segment, position, "field boundary");

        let slot = record
            .slot(field.index())
            .ok_or_else(|| SchemaError::FieldNotAccessible {
                index: field.index(),
                name: field.name().to_string(),
            })?;
        slot.store(field, segment, position)?;
        Ok(())
    }
}

impl RoutingTable {
    /// Parse `input` into `record` using this table
    pub fn parse_into<R: Record + ?Sized>(&self, record: &mut R, input: &str) -> Result<()> {
        Parser::new(self).parse_into(record, input)
    }

    /// Parse `input` into a fresh [`FieldValues`] laid out after this table
    pub fn parse_values(&self, input: &str) -> Result<FieldValues> {
        let mut values = FieldValues::for_table(self);
        self.parse_into(&mut values, input)?;
        Ok(values)
    }
}

/// Compile `R`'s own schema and parse `input` into a default `R`
pub fn parse<R: Routed + Default>(input: &str) -> Result<R> {
    let table = RoutingTable::for_record::<R>()?;
    let mut record = R::default();
    table.parse_into(&mut record, input)?;
    Ok(record)
}
