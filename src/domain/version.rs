use crate::error::{AliasTagError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A release version as written in a tag: an optional `v`/`V` prefix followed
/// by a strict semantic version.
///
/// Ordering and equality follow semver precedence, so build metadata and the
/// prefix are ignored: `v1.2.3`, `1.2.3` and `v1.2.3+build.7` compare equal.
#[derive(Debug, Clone)]
pub struct ReleaseVersion {
    prefix: String,
    version: semver::Version,
}

impl ReleaseVersion {
    /// Parse a tag such as `v1.2.3`, `V1.2.3-rc.1` or `1.2.3+build`.
    ///
    /// Shorthand forms like `v1` or `v1.2` are rejected; those are alias tags,
    /// not releases.
    pub fn parse(tag: &str) -> Result<Self> {
        let (prefix, rest) = split_prefix(tag);
        let version = semver::Version::parse(rest)
            .map_err(|_| AliasTagError::invalid_version(tag))?;

        Ok(ReleaseVersion {
            prefix: prefix.to_string(),
            version,
        })
    }

    /// The prefix this version was written with (`""`, `"v"` or `"V"`)
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn major(&self) -> u64 {
        self.version.major
    }

    pub fn minor(&self) -> u64 {
        self.version.minor
    }

    pub fn patch(&self) -> u64 {
        self.version.patch
    }

    pub fn is_prerelease(&self) -> bool {
        !self.version.pre.is_empty()
    }

    /// The underlying semver value, build metadata included
    pub fn semver(&self) -> &semver::Version {
        &self.version
    }

    /// Alias naming the major lineage, e.g. `v1`
    pub fn major_alias(&self) -> String {
        format!("{}{}", self.prefix, self.version.major)
    }

    /// Alias naming the major.minor lineage, e.g. `v1.2`
    pub fn minor_alias(&self) -> String {
        format!(
            "{}{}.{}",
            self.prefix, self.version.major, self.version.minor
        )
    }

    pub fn same_major(&self, other: &ReleaseVersion) -> bool {
        self.version.major == other.version.major
    }

    pub fn same_minor(&self, other: &ReleaseVersion) -> bool {
        self.same_major(other) && self.version.minor == other.version.minor
    }

    fn precedence(&self) -> (u64, u64, u64, &semver::Prerelease) {
        (
            self.version.major,
            self.version.minor,
            self.version.patch,
            &self.version.pre,
        )
    }
}

/// Strip a single leading `v` or `V`.
fn split_prefix(tag: &str) -> (&str, &str) {
    match tag.as_bytes().first() {
        Some(b'v') | Some(b'V') => tag.split_at(1),
        _ => ("", tag),
    }
}

impl FromStr for ReleaseVersion {
    type Err = AliasTagError;

    fn from_str(s: &str) -> Result<Self> {
        ReleaseVersion::parse(s)
    }
}

impl PartialEq for ReleaseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.precedence() == other.precedence()
    }
}

impl Eq for ReleaseVersion {}

impl PartialOrd for ReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        // semver::Prerelease orders the empty (release) value above any
        // prerelease, which is exactly semver precedence
        self.precedence().cmp(&other.precedence())
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = ReleaseVersion::parse("v1.2.3").unwrap();
        assert_eq!(v.major(), 1);
        assert_eq!(v.minor(), 2);
        assert_eq!(v.patch(), 3);
        assert_eq!(v.prefix(), "v");
    }

    #[test]
    fn test_version_parse_without_v() {
        let v = ReleaseVersion::parse("1.2.3").unwrap();
        assert_eq!(v.prefix(), "");
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_version_parse_uppercase_v() {
        let v = ReleaseVersion::parse("V1.2.3").unwrap();
        assert_eq!(v.prefix(), "V");
        assert_eq!(v.major_alias(), "V1");
    }

    #[test]
    fn test_version_parse_invalid() {
        for tag in ["1.2", "v1", "v1.2.3.4", "latest", "vv1.2.3", "", "v01.2.3"] {
            let err = ReleaseVersion::parse(tag).unwrap_err();
            assert!(
                err.to_string().contains(tag),
                "error for {:?} should name it: {}",
                tag,
                err
            );
        }
    }

    #[test]
    fn test_prerelease_detection() {
        assert!(ReleaseVersion::parse("v1.2.3-rc.1").unwrap().is_prerelease());
        assert!(!ReleaseVersion::parse("v1.2.3+build.5").unwrap().is_prerelease());
    }

    #[test]
    fn test_aliases() {
        let v = ReleaseVersion::parse("v3.14.15").unwrap();
        assert_eq!(v.major_alias(), "v3");
        assert_eq!(v.minor_alias(), "v3.14");
    }

    #[test]
    fn test_equality_ignores_prefix_and_build() {
        let a = ReleaseVersion::parse("v1.2.3").unwrap();
        let b = ReleaseVersion::parse("1.2.3+build.9").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_prerelease_orders_below_release() {
        let rc = ReleaseVersion::parse("v1.3.0-rc.1").unwrap();
        let release = ReleaseVersion::parse("v1.3.0").unwrap();
        let older = ReleaseVersion::parse("v1.2.9").unwrap();
        assert!(rc < release);
        assert!(rc > older);
    }

    #[test]
    fn test_numeric_ordering() {
        let a = ReleaseVersion::parse("v1.10.0").unwrap();
        let b = ReleaseVersion::parse("v1.9.0").unwrap();
        assert!(a > b);
    }

    #[test]
    fn test_lineage() {
        let a = ReleaseVersion::parse("v1.2.0").unwrap();
        let b = ReleaseVersion::parse("v1.2.7").unwrap();
        let c = ReleaseVersion::parse("v1.3.0").unwrap();
        assert!(a.same_minor(&b));
        assert!(a.same_major(&c));
        assert!(!a.same_minor(&c));
    }
}
