//! SemVer precedence
//!
//! Major, minor and patch compare numerically in that order. At equal
//! numbers a release outranks any pre-release. Two pre-releases compare
//! identifier by identifier (split on `.`): identifiers that both parse as
//! integers compare numerically, anything else compares byte-wise. When one
//! identifier list is a prefix of the other, the longer list is greater, so
//! `1.0.0-alpha < 1.0.0-alpha.1`. Build metadata is ignored.
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

use super::version::SemVersion;
use std::cmp::Ordering;

impl SemVersion {
    /// Precedence of `self` relative to `other`
    pub fn compare(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| compare_pre_release(&self.pre_release, &other.pre_release))
    }
}

/// Compare two pre-release strings; empty means "no pre-release"
pub fn compare_pre_release(a: &str, b: &str) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) if x == y => continue,
            (Some(x), Some(y)) => return compare_identifiers(x, y),
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// Compare two differing pre-release identifiers
///
/// Numeric only when both sides parse as integers; `"01"` and `"1"` are
/// therefore equal.
fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.as_bytes().cmp(b.as_bytes()),
    }
}
