//! Floating tag policy.
//!
//! Decides which alias tags (`vMAJOR.MINOR`, `vMAJOR`, `latest`) should point
//! at a new release, given every tag already published for the artifact.
//!
//! Example: releasing `v1.2.3` while `v1.3.0` exists yields only `v1.2`;
//! releasing `v1.2.3` as the newest version overall yields `v1.2`, `v1` and
//! `latest`.

use crate::domain::tag::partition_tags;
use crate::domain::version::ReleaseVersion;
use crate::error::{AliasTagError, Result};
use std::fmt;

/// Name of the alias that follows the newest release overall
pub const LATEST_TAG: &str = "latest";

/// One kind of floating tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alias {
    /// `vMAJOR.MINOR`
    MajorMinor,
    /// `vMAJOR`
    Major,
    /// `latest`
    Latest,
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alias::MajorMinor => write!(f, "major.minor"),
            Alias::Major => write!(f, "major"),
            Alias::Latest => write!(f, "latest"),
        }
    }
}

/// Aliases selected for a release, in publication order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTags {
    version: ReleaseVersion,
    aliases: Vec<Alias>,
}

impl AliasTags {
    pub fn version(&self) -> &ReleaseVersion {
        &self.version
    }

    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    pub fn contains(&self, alias: Alias) -> bool {
        self.aliases.contains(&alias)
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Keep only the aliases accepted by `keep`
    pub fn retain(mut self, keep: impl Fn(Alias) -> bool) -> Self {
        self.aliases.retain(|alias| keep(*alias));
        self
    }

    /// Render a single alias using the release's prefix convention
    pub fn tag_name(&self, alias: Alias) -> String {
        match alias {
            Alias::MajorMinor => self.version.minor_alias(),
            Alias::Major => self.version.major_alias(),
            Alias::Latest => LATEST_TAG.to_string(),
        }
    }

    /// Tag names, e.g. `["v1.2", "v1", "latest"]`
    pub fn names(&self) -> Vec<String> {
        self.aliases.iter().map(|a| self.tag_name(*a)).collect()
    }
}

/// Evaluates alias tags for a release against an existing tag set.
///
/// Stateless; one value can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasPolicy;

impl AliasPolicy {
    pub fn new() -> Self {
        AliasPolicy
    }

    /// Decide which aliases `target` should receive.
    ///
    /// Prereleases never receive aliases. Tags in `existing` that are not
    /// semantic versions are skipped.
    ///
    /// # Errors
    /// * [`AliasTagError::InvalidVersion`] - `target` is not strict semver
    /// * [`AliasTagError::VersionAlreadyExists`] - `existing` already holds
    ///   `target` (prefix and build metadata ignored)
    pub fn evaluate<S: AsRef<str>>(&self, target: &str, existing: &[S]) -> Result<AliasTags> {
        let version = ReleaseVersion::parse(target)?;

        if version.is_prerelease() {
            tracing::debug!(version = %version, "prerelease, no aliases");
            return Ok(AliasTags {
                version,
                aliases: Vec::new(),
            });
        }

        let partitioned = partition_tags(existing);
        for ignored in &partitioned.ignored {
            tracing::debug!(tag = %ignored, "ignoring non-semver tag");
        }

        let mut releases = partitioned.releases;
        if let Some(duplicate) = releases.iter().find(|r| **r == version) {
            tracing::debug!(existing = %duplicate, "target already published");
            return Err(AliasTagError::already_exists(version.to_string()));
        }

        // newest first
        releases.sort_by(|a, b| b.cmp(a));

        let mut newer_overall = false;
        let mut newer_same_major = false;
        let mut newer_same_minor = false;

        for release in releases.iter().take_while(|r| **r > version) {
            newer_overall = true;
            newer_same_major |= release.same_major(&version);
            newer_same_minor |= release.same_minor(&version);

            if newer_same_major && newer_same_minor {
                break;
            }
        }

        let mut aliases = Vec::with_capacity(3);
        if !newer_same_minor {
            aliases.push(Alias::MajorMinor);
        }
        if !newer_same_major {
            aliases.push(Alias::Major);
        }
        if !newer_overall {
            aliases.push(Alias::Latest);
        }

        tracing::debug!(
            version = %version,
            newer_overall,
            newer_same_major,
            newer_same_minor,
            "computed aliases"
        );

        Ok(AliasTags { version, aliases })
    }
}

/// Compute the alias tag names to publish for `target`.
///
/// Convenience wrapper over [`AliasPolicy::evaluate`]; returns e.g.
/// `["v1.2", "v1", "latest"]`, or an empty list for a prerelease.
pub fn compute_alias_tags<S: AsRef<str>>(target: &str, existing: &[S]) -> Result<Vec<String>> {
    Ok(AliasPolicy::new().evaluate(target, existing)?.names())
}
