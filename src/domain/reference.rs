//! Artifact (OCI) references such as `localhost:5000/helloworld:v1.2.3`.
//!
//! Only what is needed to expand alias tags into fully qualified references:
//! split a reference into repository, tag and digest, and re-tag it.

use crate::error::{AliasTagError, Result};
use regex::Regex;
use std::fmt;

const PATH_COMPONENT: &str = r"[a-z0-9]+(?:(?:[._]|__|-+)[a-z0-9]+)*";
const DOMAIN: &str = r"(?:(?:[a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9])(?:\.(?:[a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9]))*|\[[a-fA-F0-9:]+\])(?::[0-9]+)?";
const TAG: &str = r"[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}";
const DIGEST: &str = r"[A-Za-z][A-Za-z0-9]*(?:[-_+.][A-Za-z][A-Za-z0-9]*)*:[0-9a-fA-F]{32,}";
const NAME_TOTAL_LENGTH_MAX: usize = 255;

/// A parsed artifact reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    name: String,
    tag: Option<String>,
    digest: Option<String>,
}

impl ImageReference {
    /// Parse `[domain[:port]/]path[:tag][@digest]`
    pub fn parse(reference: &str) -> Result<Self> {
        let pattern = format!(
            r"^((?:{domain}/)?{path}(?:/{path})*)(?::({tag}))?(?:@({digest}))?$",
            domain = DOMAIN,
            path = PATH_COMPONENT,
            tag = TAG,
            digest = DIGEST,
        );
        let re = Regex::new(&pattern)
            .map_err(|e| AliasTagError::reference(format!("invalid pattern: {}", e)))?;

        let captures = re.captures(reference).ok_or_else(|| {
            AliasTagError::reference(format!("'{}' is not a valid reference", reference))
        })?;

        let name = captures[1].to_string();
        if name.len() > NAME_TOTAL_LENGTH_MAX {
            return Err(AliasTagError::reference(format!(
                "repository name must not be more than {} characters",
                NAME_TOTAL_LENGTH_MAX
            )));
        }

        Ok(ImageReference {
            name,
            tag: captures.get(2).map(|m| m.as_str().to_string()),
            digest: captures.get(3).map(|m| m.as_str().to_string()),
        })
    }

    /// Repository name without tag or digest, e.g. `localhost:5000/helloworld`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    /// Same repository with `tag` in place of the current tag.
    ///
    /// A digest, if any, is kept so the alias stays pinned to the same
    /// content.
    pub fn with_tag(&self, tag: &str) -> Result<ImageReference> {
        let re = Regex::new(&format!("^{}$", TAG))
            .map_err(|e| AliasTagError::reference(format!("invalid pattern: {}", e)))?;
        if !re.is_match(tag) {
            return Err(AliasTagError::reference(format!(
                "failed to add tag {} to {}: invalid tag format",
                tag, self
            )));
        }

        Ok(ImageReference {
            name: self.name.clone(),
            tag: Some(tag.to_string()),
            digest: self.digest.clone(),
        })
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(tag) = &self.tag {
            write!(f, ":{}", tag)?;
        }
        if let Some(digest) = &self.digest {
            write!(f, "@{}", digest)?;
        }
        Ok(())
    }
}

/// Expand `tags` into full references on the repository named by `reference`.
pub fn tagged_references(reference: &str, tags: &[String]) -> Result<Vec<String>> {
    let parsed = ImageReference::parse(reference)?;

    tags.iter()
        .map(|tag| parsed.with_tag(tag).map(|r| r.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST_HEX: &str = "40c70689234e535d783a744b5a870fb1fb5b2f6c2ae19a34f25258d6ea72723b";

    #[test]
    fn test_parse_full_reference() {
        let input = format!("example.com:454/my/repo:v1.2.3@sha256:{}", DIGEST_HEX);
        let r = ImageReference::parse(&input).unwrap();
        assert_eq!(r.name(), "example.com:454/my/repo");
        assert_eq!(r.tag(), Some("v1.2.3"));
        assert_eq!(r.digest(), Some(format!("sha256:{}", DIGEST_HEX).as_str()));
        assert_eq!(r.to_string(), input);
    }

    #[test]
    fn test_parse_repository_only() {
        let r = ImageReference::parse("localhost:5000/helloworld").unwrap();
        assert_eq!(r.name(), "localhost:5000/helloworld");
        assert_eq!(r.tag(), None);
        assert_eq!(r.digest(), None);
    }

    #[test]
    fn test_parse_rejects_uppercase_repository() {
        assert!(ImageReference::parse("localhost:5000/HelloWorld").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ImageReference::parse("").is_err());
        assert!(ImageReference::parse("repo:").is_err());
        assert!(ImageReference::parse("repo@sha256:abc").is_err());
    }

    #[test]
    fn test_with_tag_replaces_tag() {
        let r = ImageReference::parse("localhost:5000/helloworld:v1.2.3").unwrap();
        assert_eq!(
            r.with_tag("v1").unwrap().to_string(),
            "localhost:5000/helloworld:v1"
        );
    }

    #[test]
    fn test_with_tag_keeps_digest() {
        let input = format!("registry.io/app@sha256:{}", DIGEST_HEX);
        let r = ImageReference::parse(&input).unwrap();
        assert_eq!(
            r.with_tag("latest").unwrap().to_string(),
            format!("registry.io/app:latest@sha256:{}", DIGEST_HEX)
        );
    }

    #[test]
    fn test_with_tag_rejects_invalid_tag() {
        let r = ImageReference::parse("registry.io/app").unwrap();
        assert!(r.with_tag(".hidden").is_err());
        assert!(r.with_tag("").is_err());
    }

    #[test]
    fn test_tagged_references() {
        let tags = vec!["v1.2".to_string(), "v1".to_string(), "latest".to_string()];
        let refs = tagged_references("localhost:5000/helloworld:v1.2.3", &tags).unwrap();
        assert_eq!(
            refs,
            vec![
                "localhost:5000/helloworld:v1.2",
                "localhost:5000/helloworld:v1",
                "localhost:5000/helloworld:latest",
            ]
        );
    }
}
