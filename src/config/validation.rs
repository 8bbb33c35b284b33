use super::{Config, ConfigError, DeletionConfig, GitConfig, Result};
use regex::Regex;

pub const MAX_DELETE_WORKERS: usize = 32;

pub fn validate_config(config: &Config) -> Result<()> {
    validate_git_config(&config.git)?;
    validate_deletion_config(&config.deletion)?;
    Ok(())
}

pub fn validate_git_config(config: &GitConfig) -> Result<()> {
    validate_remote_name(&config.remote)?;

    if config.command_timeout_secs == Some(0) {
        return Err(ConfigError::Validation(
            "command_timeout_secs must be greater than 0".to_string(),
        ));
    }

    for pattern in &config.ignore_patterns {
        if let super::IgnorePatternConfig::Regex(expr) = pattern {
            Regex::new(expr).map_err(|e| {
                ConfigError::Validation(format!("Invalid ignore pattern '{}': {}", expr, e))
            })?;
        }
    }

    Ok(())
}

pub fn validate_deletion_config(config: &DeletionConfig) -> Result<()> {
    validate_workers(config.workers)
}

pub fn validate_remote_name(remote: &str) -> Result<()> {
    if remote.is_empty() {
        return Err(ConfigError::Validation(
            "Remote name cannot be empty".to_string(),
        ));
    }

    if remote.chars().any(char::is_whitespace) || remote.contains('/') {
        return Err(ConfigError::Validation(format!(
            "Remote name '{}' contains invalid characters",
            remote
        )));
    }

    Ok(())
}

pub fn validate_workers(workers: usize) -> Result<()> {
    if !(1..=MAX_DELETE_WORKERS).contains(&workers) {
        return Err(ConfigError::Validation(format!(
            "workers must be between 1 and {}, got {}",
            MAX_DELETE_WORKERS, workers
        )));
    }
    Ok(())
}
