//! Sentinel-based validity checks
//!
//! A parse can succeed without ever reaching some fields: input `"1"` fills
//! `major` of a SemVer layout and stops. To tell "parsed as zero" apart from
//! "never written", required numeric fields are seeded with an out-of-band
//! sentinel before parsing and must no longer hold it afterwards.
//!
//! Nothing here is SemVer specific; any layout with required numeric fields
//! can use it.
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

use crate::record::{Record, Slot};
use crate::schema::RoutingTable;

/// Default sentinel for signed fields
pub const UNSET_SIGNED: i64 = -1;

/// Default sentinel for unsigned fields
pub const UNSET_UNSIGNED: u64 = u64::MAX;

/// Seeds required numeric fields and checks that a parse overwrote them
///
/// Text fields listed as required are left alone and always count as
/// populated; there is no out-of-band text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelCheck {
    required: Vec<usize>,
    signed: i64,
    unsigned: u64,
}

impl SentinelCheck {
    /// Require the fields at `required` with the default sentinels
    pub fn new(required: impl IntoIterator<Item = usize>) -> Self {
        Self {
            required: required.into_iter().collect(),
            signed: UNSET_SIGNED,
            unsigned: UNSET_UNSIGNED,
        }
    }

    /// Use `sentinel` for signed fields
    pub fn with_signed(mut self, sentinel: i64) -> Self {
        self.signed = sentinel;
        self
    }

    /// Use `sentinel` for unsigned fields
    pub fn with_unsigned(mut self, sentinel: u64) -> Self {
        self.unsigned = sentinel;
        self
    }

    /// Indices this check requires
    pub fn required(&self) -> &[usize] {
        &self.required
    }

    /// Write the sentinels into `record`
    pub fn seed<R: Record + ?Sized>(&self, record: &mut R) {
        for &index in &self.required {
            match record.slot(index) {
                Some(Slot::Signed(n)) => *n = self.signed,
                Some(Slot::Unsigned(n)) => *n = self.unsigned,
                Some(Slot::Text(_)) | None => {}
            }
        }
    }

    /// Whether every required field of `record` differs from its sentinel
    ///
    /// A required index the record has no slot for counts as unset.
    pub fn is_populated<R: Record + ?Sized>(&self, record: &mut R) -> bool {
        self.first_unset(record).is_none()
    }

    /// First required index, in the order given, that still holds its sentinel
    pub fn first_unset<R: Record + ?Sized>(&self, record: &mut R) -> Option<usize> {
        self.required
            .iter()
            .copied()
            .find(|&index| match record.slot(index) {
                Some(Slot::Signed(n)) => *n == self.signed,
                Some(Slot::Unsigned(n)) => *n == self.unsigned,
                Some(Slot::Text(_)) => false,
                None => true,
            })
    }

    /// Seed `record`, parse `input` into it and report whether the parse
    /// succeeded with every required field written
    pub fn check<R: Record + ?Sized>(
        &self,
        table: &RoutingTable,
        record: &mut R,
        input: &str,
    ) -> bool {
        self.seed(record);
        table.parse_into(record, input).is_ok() && self.is_populated(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldValue, FieldValues};
    use crate::schema::{FieldSpec, Schema};

    fn calver() -> RoutingTable {
        let schema = Schema::new()
            .field(FieldSpec::unsigned(0, "year").route('.', 1))
            .field(FieldSpec::unsigned(1, "month").route('.', 2).route('-', 3))
            .field(FieldSpec::unsigned(2, "micro").route('-', 3))
            .field(FieldSpec::text(3, "modifier"));
        RoutingTable::compile(&schema).unwrap()
    }

    #[test]
    fn test_seed_writes_sentinels() {
        let table = calver();
        let mut values = FieldValues::for_table(&table);
        SentinelCheck::new([0, 1, 3]).seed(&mut values);
        assert_eq!(values.get(0), Some(&FieldValue::Unsigned(UNSET_UNSIGNED)));
        assert_eq!(values.get(1), Some(&FieldValue::Unsigned(UNSET_UNSIGNED)));
        assert_eq!(values.get(2), Some(&FieldValue::Unsigned(0)));
        assert_eq!(values.get(3), Some(&FieldValue::Text(String::new())));
    }

    #[test]
    fn test_check_requires_all_fields() {
        let table = calver();
        let check = SentinelCheck::new([0, 1]);

        assert!(check.check(&table, &mut FieldValues::for_table(&table), "2024.05"));
        assert!(check.check(&table, &mut FieldValues::for_table(&table), "2024.05-dev"));
        assert!(!check.check(&table, &mut FieldValues::for_table(&table), "2024"));
        assert!(!check.check(&table, &mut FieldValues::for_table(&table), "2024..1"));
    }

    #[test]
    fn test_custom_sentinel() {
        let table = calver();
        let check = SentinelCheck::new([0, 1, 2]).with_unsigned(0);
        // a written zero is indistinguishable from the sentinel
        assert!(!check.check(&table, &mut FieldValues::for_table(&table), "2024.0.1"));
        assert!(check.check(&table, &mut FieldValues::for_table(&table), "2024.1.1"));
    }

    #[test]
    fn test_first_unset_reports_earliest_gap() {
        let table = calver();
        let check = SentinelCheck::new([0, 1, 2]);
        let mut values = FieldValues::for_table(&table);
        check.seed(&mut values);
        table.parse_into(&mut values, "2024").unwrap();
        assert_eq!(check.first_unset(&mut values), Some(1));

        check.seed(&mut values);
        table.parse_into(&mut values, "2024.5.1").unwrap();
        assert_eq!(check.first_unset(&mut values), None);
    }

    #[test]
    fn test_missing_slot_counts_as_unset() {
        let table = calver();
        let mut values = FieldValues::for_table(&table);
        assert!(!SentinelCheck::new([7]).is_populated(&mut values));
    }
}
