use std::fmt;

/// Non-fatal conditions met while planning or publishing aliases.
/// These are reported to the user but never stop the workflow.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishWarning {
    /// Target is a prerelease, so no alias will move
    PrereleaseTarget { version: String },
    /// Existing tags that are not release versions and were left out
    IgnoredTags { tags: Vec<String> },
    /// Fetching remote tags failed; local tags were used instead
    FetchFailed { remote: String, reason: String },
}

impl fmt::Display for PublishWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishWarning::PrereleaseTarget { version } => {
                write!(f, "'{}' is a prerelease; no alias tags will be published", version)
            }
            PublishWarning::IgnoredTags { tags } => {
                const SHOWN: usize = 5;
                let listed: Vec<&str> = tags.iter().take(SHOWN).map(String::as_str).collect();
                write!(f, "Ignored {} non-version tag(s): {}", tags.len(), listed.join(", "))?;
                if tags.len() > SHOWN {
                    write!(f, ", ...")?;
                }
                Ok(())
            }
            PublishWarning::FetchFailed { remote, reason } => {
                write!(
                    f,
                    "Could not fetch tags from remote '{}': {}. Using local tags.",
                    remote, reason
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerelease_display() {
        let warning = PublishWarning::PrereleaseTarget {
            version: "v1.0.0-rc.1".to_string(),
        };
        assert!(warning.to_string().contains("v1.0.0-rc.1"));
    }

    #[test]
    fn test_ignored_tags_truncated() {
        let tags: Vec<String> = (0..7).map(|i| format!("branch-{}", i)).collect();
        let msg = PublishWarning::IgnoredTags { tags }.to_string();
        assert!(msg.starts_with("Ignored 7 non-version tag(s): branch-0"));
        assert!(msg.contains("branch-4"));
        assert!(!msg.contains("branch-5"));
        assert!(msg.ends_with(", ..."));
    }

    #[test]
    fn test_fetch_failed_display() {
        let msg = PublishWarning::FetchFailed {
            remote: "origin".to_string(),
            reason: "auth".to_string(),
        }
        .to_string();
        assert!(msg.contains("'origin'"));
        assert!(msg.contains("Using local tags"));
    }
}
