use super::{Config, DeletionConfig, GitConfig, IgnorePatternConfig};
use crate::core::git::deletion::DEFAULT_DELETE_WORKERS;

pub const CONFIG_PATH_ENV: &str = "GIT_BATCH_CONFIG_PATH";

pub fn default_config() -> Config {
    Config {
        git: default_git_config(),
        deletion: default_deletion_config(),
    }
}

pub fn default_git_config() -> GitConfig {
    GitConfig {
        remote: "origin".to_string(),
        ignore_patterns: default_ignore_patterns(),
        command_timeout_secs: None,
    }
}

pub fn default_deletion_config() -> DeletionConfig {
    DeletionConfig {
        force: true,
        workers: DEFAULT_DELETE_WORKERS,
        strict: false,
    }
}

/// The checked-out default branch and symbolic HEAD pointers.
pub fn default_ignore_patterns() -> Vec<IgnorePatternConfig> {
    vec![
        IgnorePatternConfig::Exact("* master".to_string()),
        IgnorePatternConfig::Exact("* main".to_string()),
        IgnorePatternConfig::Contains("HEAD ->".to_string()),
    ]
}

pub fn get_default_config_dir() -> std::path::PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "git-batch") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(".config")
            .join("git-batch")
    }
}

pub fn get_config_file_path() -> std::path::PathBuf {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
        return std::path::PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}
