//! Semantic version record
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

use crate::error::{ParseError, Result, SchemaError};
use crate::record::{Record, Routed, Slot};
use crate::schema::{RoutingTable, Schema};
use crate::validity::SentinelCheck;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Field indices of the SemVer layout
pub mod field {
    pub const MAJOR: usize = 0;
    pub const MINOR: usize = 1;
    pub const PATCH: usize = 2;
    pub const PRE_RELEASE: usize = 3;
    pub const BUILD: usize = 4;
}

static SEMVER_TABLE: OnceLock<std::result::Result<RoutingTable, SchemaError>> = OnceLock::new();

/// The SemVer routing table, compiled once per process
pub fn semver_table() -> std::result::Result<&'static RoutingTable, SchemaError> {
    SEMVER_TABLE
        .get_or_init(|| RoutingTable::compile(&Schema::semver()))
        .as_ref()
        .map_err(Clone::clone)
}

/// Semantic version: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`
///
/// An empty `pre_release` means a release version. `build` is informational
/// and never affects [`SemVersion::compare`]. Because of that, equality
/// (`==`) and precedence differ: two versions that only differ in build
/// metadata are unequal but compare as [`Ordering::Equal`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SemVersion {
    pub major: i64,
    pub minor: i64,
    pub patch: i64,
    pub pre_release: String,
    pub build: String,
}

impl SemVersion {
    /// Create a release version
    pub fn new(major: i64, minor: i64, patch: i64) -> Self {
        Self {
            major,
            minor,
            patch,
            ..Self::default()
        }
    }

    /// Set the pre-release identifiers
    pub fn with_pre_release(mut self, pre_release: impl Into<String>) -> Self {
        self.pre_release = pre_release.into();
        self
    }

    /// Set the build metadata
    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = build.into();
        self
    }

    /// Parse a version string
    ///
    /// Missing trailing components keep their zero value, so `"1"` parses as
    /// `1.0.0`. Use [`SemVersion::parse_complete`] to require all three
    /// numbers.
    pub fn parse(ver: &str) -> Result<Self> {
        let mut version = Self::default();
        semver_table()?.parse_into(&mut version, ver)?;
        Ok(version)
    }

    /// Parse a version string that must carry major, minor and patch
    ///
    /// Fails with [`ParseError::MissingField`] naming the first number the
    /// input never reached.
    pub fn parse_complete(ver: &str) -> Result<Self> {
        let table = semver_table()?;
        let check = required_fields();
        let mut version = Self::default();
        check.seed(&mut version);
        table.parse_into(&mut version, ver)?;

        if let Some(index) = check.first_unset(&mut version) {
            let name = table.field(index).map_or("", |f| f.name());
            return Err(ParseError::MissingField {
                field: name.to_string(),
            }
            .into());
        }
        Ok(version)
    }

    /// Re-parse `ver` into this version in place
    ///
    /// The version is reset first, so nothing from the previous contents
    /// survives: `"2.0.0"` into `1.2.3-rc.1+abc` leaves exactly `2.0.0`.
    pub fn parse_into(&mut self, ver: &str) -> Result<()> {
        *self = Self::default();
        semver_table()?.parse_into(self, ver)
    }

    /// Check that `ver` parses and carries major, minor and patch
    pub fn is_valid(ver: &str) -> bool {
        Self::parse_complete(ver).is_ok()
    }

    /// Check if this is a pre-release version
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Compare with a version string
    pub fn compare_str(&self, ver: &str) -> Result<Ordering> {
        let other = Self::parse(ver)?;
        Ok(self.compare(&other))
    }

    /// Same major version, which SemVer treats as API compatible
    pub fn compatible(&self, other: &Self) -> bool {
        self.major == other.major
    }

    /// Check compatibility with a version string
    pub fn compatible_str(&self, ver: &str) -> Result<bool> {
        let other = Self::parse(ver)?;
        Ok(self.compatible(&other))
    }
}

fn required_fields() -> SentinelCheck {
    SentinelCheck::new([field::MAJOR, field::MINOR, field::PATCH])
}

impl Record for SemVersion {
    fn slot(&mut self, index: usize) -> Option<Slot<'_>> {
        match index {
            field::MAJOR => Some(Slot::Signed(&mut self.major)),
            field::MINOR => Some(Slot::Signed(&mut self.minor)),
            field::PATCH => Some(Slot::Signed(&mut self.patch)),
            field::PRE_RELEASE => Some(Slot::Text(&mut self.pre_release)),
            field::BUILD => Some(Slot::Text(&mut self.build)),
            _ => None,
        }
    }
}

impl Routed for SemVersion {
    fn schema() -> Schema {
        Schema::semver()
    }
}

impl fmt::Display for SemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for SemVersion {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for SemVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Only complete versions deserialize, so what [`Serialize`] writes is
/// exactly what reads back.
impl<'de> Deserialize<'de> for SemVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_complete(&s).map_err(serde::de::Error::custom)
    }
}
