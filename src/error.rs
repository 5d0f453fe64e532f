use thiserror::Error;

/// Unified error type for alias-tags operations
#[derive(Error, Debug)]
pub enum AliasTagError {
    #[error("new version {version:?} is not valid semver")]
    InvalidVersion { version: String },

    #[error("version {version} already exists")]
    VersionAlreadyExists { version: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid reference: {0}")]
    Reference(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in alias-tags
pub type Result<T> = std::result::Result<T, AliasTagError>;

impl AliasTagError {
    /// Create an invalid version error for the offending string
    pub fn invalid_version(version: impl Into<String>) -> Self {
        AliasTagError::InvalidVersion {
            version: version.into(),
        }
    }

    /// Create a duplicate version error for the offending string
    pub fn already_exists(version: impl Into<String>) -> Self {
        AliasTagError::VersionAlreadyExists {
            version: version.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AliasTagError::Config(msg.into())
    }

    /// Create a reference error with context
    pub fn reference(msg: impl Into<String>) -> Self {
        AliasTagError::Reference(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        AliasTagError::Tag(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        AliasTagError::Remote(msg.into())
    }

    /// Whether this error was raised while validating the release version
    /// (as opposed to I/O, git or configuration failures).
    pub fn is_version_error(&self) -> bool {
        matches!(
            self,
            AliasTagError::InvalidVersion { .. } | AliasTagError::VersionAlreadyExists { .. }
        )
    }
}
