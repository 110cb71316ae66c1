use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use super::{parse_parts, Parts};
use crate::error::{Error, Result};

/// A dotted numeric version with up to four fields and a free-form suffix,
/// e.g. `1.2.42.1982-rc2` or `1.2a2`.
///
/// # Equality and precedence differ
///
/// `==` compares all five fields, the suffix included. Release precedence
/// ([`Version::cmp_precedence`]) looks at the numeric fields only, so
/// `3.1.4.1` and `3.1.4.1b5` have equal precedence while not being equal.
/// This is intended. The `Ord` impl breaks precedence ties by suffix so that
/// it stays consistent with `Eq` for sorting and ordered collections.
///
/// An absent field sorts below any present one, so `1` precedes `1.0`.
/// A present field is never preceded by an absent one: the builder fills
/// skipped fields with `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u32,
    minor: Option<u32>,
    maintenance: Option<u32>,
    build: Option<u32>,
    suffix: String,
}

impl Version {
    pub fn new(major: u32) -> Self {
        Self {
            major,
            minor: None,
            maintenance: None,
            build: None,
            suffix: String::new(),
        }
    }

    pub fn with_minor(mut self, minor: u32) -> Self {
        self.minor = Some(minor);
        self
    }

    /// Sets the maintenance field. A missing minor field becomes `0`.
    pub fn with_maintenance(mut self, maintenance: u32) -> Self {
        self.minor.get_or_insert(0);
        self.maintenance = Some(maintenance);
        self
    }

    /// Sets the build field. Missing minor and maintenance fields become `0`.
    pub fn with_build(mut self, build: u32) -> Self {
        self.minor.get_or_insert(0);
        self.maintenance.get_or_insert(0);
        self.build = Some(build);
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    fn from_parts(parts: Parts<'_>) -> Self {
        let field = |i: usize| parts.components.get(i).copied();
        Self {
            // The grammar always yields at least one component.
            major: field(0).unwrap_or_default(),
            minor: field(1),
            maintenance: field(2),
            build: field(3),
            suffix: parts.suffix.to_string(),
        }
    }

    /// Parses `major[.minor[.maintenance[.build]]][suffix]`.
    ///
    /// The suffix must start with an ASCII letter or `-` and may contain
    /// letters, digits, `.` and `-`. Whitespace is rejected everywhere, as
    /// are empty segments, a fifth numeric segment and values above
    /// [`MAX_COMPONENT_VALUE`](super::MAX_COMPONENT_VALUE).
    pub fn parse(input: &str) -> Result<Version> {
        match parse_parts(input) {
            Some(parts) => {
                let version = Version::from_parts(parts);
                trace!(input, %version, "parsed version");
                Ok(version)
            }
            None => {
                debug!(input, "rejected version string");
                Err(Error::invalid_format(input))
            }
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> Option<u32> {
        self.minor
    }

    pub fn maintenance(&self) -> Option<u32> {
        self.maintenance
    }

    pub fn build(&self) -> Option<u32> {
        self.build
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Numeric fields from `major` down, stopping at the first absent one.
    pub fn components(&self) -> impl Iterator<Item = u32> {
        std::iter::once(Some(self.major))
            .chain([self.minor, self.maintenance, self.build])
            .map_while(|component| component)
    }

    /// Release precedence over the numeric fields. The suffix is ignored.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.maintenance.cmp(&other.maintenance))
            .then_with(|| self.build.cmp(&other.build))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.components();
        if let Some(major) = components.next() {
            write!(f, "{major}")?;
        }
        for component in components {
            write!(f, ".{component}")?;
        }
        f.write_str(&self.suffix)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Version::parse(value)
    }
}

impl From<(u32,)> for Version {
    fn from((major,): (u32,)) -> Self {
        Version::new(major)
    }
}

impl From<(u32, u32)> for Version {
    fn from((major, minor): (u32, u32)) -> Self {
        Version::new(major).with_minor(minor)
    }
}

impl From<(u32, u32, u32)> for Version {
    fn from((major, minor, maintenance): (u32, u32, u32)) -> Self {
        Version::new(major)
            .with_minor(minor)
            .with_maintenance(maintenance)
    }
}

impl From<(u32, u32, u32, u32)> for Version {
    fn from((major, minor, maintenance, build): (u32, u32, u32, u32)) -> Self {
        Version::new(major)
            .with_minor(minor)
            .with_maintenance(maintenance)
            .with_build(build)
    }
}

impl From<(u32, u32, u32, u32, &str)> for Version {
    fn from((major, minor, maintenance, build, suffix): (u32, u32, u32, u32, &str)) -> Self {
        Version::new(major)
            .with_minor(minor)
            .with_maintenance(maintenance)
            .with_build(build)
            .with_suffix(suffix)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Version) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Version) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| self.suffix.cmp(&other.suffix))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let input = <String as serde::Deserialize>::deserialize(deserializer)?;
        Version::parse(&input).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod version_tests;
