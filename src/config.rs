use crate::error::{AliasTagError, Result};
use crate::policy::Alias;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "alias-tags.toml";

/// Represents the complete configuration for alias-tags.
///
/// Contains which alias kinds to publish and how to talk to the git remote.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub aliases: AliasesConfig,

    #[serde(default)]
    pub git: GitConfig,
}

fn default_true() -> bool {
    true
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Which floating tags to publish.
///
/// Disabling a kind only drops it from the output; it never changes which
/// release the remaining aliases point at.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AliasesConfig {
    #[serde(default = "default_true")]
    pub major: bool,

    #[serde(default = "default_true")]
    pub minor: bool,

    #[serde(default = "default_true")]
    pub latest: bool,
}

impl AliasesConfig {
    pub fn allows(&self, alias: Alias) -> bool {
        match alias {
            Alias::MajorMinor => self.minor,
            Alias::Major => self.major,
            Alias::Latest => self.latest,
        }
    }
}

impl Default for AliasesConfig {
    fn default() -> Self {
        AliasesConfig {
            major: true,
            minor: true,
            latest: true,
        }
    }
}

/// Git remote behavior for `publish`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Push release and alias tags after creating them
    #[serde(default)]
    pub push: bool,

    /// Fetch remote tags before computing aliases
    #[serde(default = "default_true")]
    pub fetch: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            remote: default_remote(),
            push: false,
            fetch: true,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `alias-tags.toml` in current directory
/// 3. `.alias-tags.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => find_config_file(),
    };

    let Some(path) = path else {
        tracing::debug!("no config file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading config");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        AliasTagError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    parse_config(&config_str)
        .map_err(|e| AliasTagError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
}
