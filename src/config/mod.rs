use serde::{Deserialize, Serialize};

pub mod defaults;
pub mod manager;
pub mod validation;

pub use manager::ConfigManager;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub git: GitConfig,
    pub deletion: DeletionConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GitConfig {
    pub remote: String,
    #[serde(default = "defaults::default_ignore_patterns")]
    pub ignore_patterns: Vec<IgnorePatternConfig>,
    #[serde(default)]
    pub command_timeout_secs: Option<u64>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DeletionConfig {
    pub force: bool,
    pub workers: usize,
    #[serde(default)]
    pub strict: bool,
}

/// Stored as `{"match": "exact", "pattern": "* main"}`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "match", content = "pattern", rename_all = "snake_case")]
pub enum IgnorePatternConfig {
    Exact(String),
    Contains(String),
    Regex(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Json(error)
    }
}

impl Default for Config {
    fn default() -> Self {
        defaults::default_config()
    }
}

impl Config {
    pub fn load_or_default() -> Result<Self> {
        ConfigManager::load_or_default()
    }

    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    pub fn remote(&self) -> &str {
        &self.git.remote
    }

    pub fn is_strict(&self) -> bool {
        self.deletion.strict
    }
}
