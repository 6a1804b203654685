//! Semantic Versioning on top of the routing parser
//!
//! [`SemVersion`] is a plain record filled through the built-in SemVer
//! schema ([`crate::schema::Schema::semver`]). The functions here parse both
//! sides of an operation and delegate to the record.
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

pub mod precedence;
pub mod version;

pub use precedence::compare_pre_release;
pub use version::{field, semver_table, SemVersion};

use crate::error::Result;
use std::cmp::Ordering;

/// Compare two version strings by precedence
pub fn compare(ver1: &str, ver2: &str) -> Result<Ordering> {
    SemVersion::parse(ver1)?.compare_str(ver2)
}

/// Check whether two version strings share a major version
pub fn compatible(ver1: &str, ver2: &str) -> Result<bool> {
    SemVersion::parse(ver1)?.compatible_str(ver2)
}

/// Check that `ver` is a complete `MAJOR.MINOR.PATCH[-PRE][+BUILD]` string
pub fn is_valid(ver: &str) -> bool {
    SemVersion::is_valid(ver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_strings() {
        assert_eq!(compare("1.0.0", "1.0.0").unwrap(), Ordering::Equal);
        assert_eq!(compare("1.2.0", "1.0.0").unwrap(), Ordering::Greater);
        assert_eq!(compare("1.2.0", "1.2.1").unwrap(), Ordering::Less);
        assert!(compare("1.2.0", "1.2.x").is_err());
        assert!(compare("x", "1.2.0").is_err());
    }

    #[test]
    fn test_compatible_strings() {
        assert!(compatible("1.0.0", "1.0.0").unwrap());
        assert!(compatible("1.0.0", "1.9.3-rc.1").unwrap());
        assert!(!compatible("0.0.0", "1.0.0").unwrap());
    }

    #[test]
    fn test_compare_str_against_record() {
        let v = SemVersion::new(1, 2, 3);
        assert_eq!(v.compare_str("1.2.2+build").unwrap(), Ordering::Greater);
        assert_eq!(v.compare_str("1.2.3+build").unwrap(), Ordering::Equal);
        assert_eq!(v.compare_str("1.2.3-alpha+build").unwrap(), Ordering::Greater);
        assert_eq!(v.compare_str("1.2.3-alpha").unwrap(), Ordering::Greater);
    }
}
