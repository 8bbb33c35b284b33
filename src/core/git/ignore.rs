use crate::config::IgnorePatternConfig;
use crate::utils::{GitBatchError, Result};
use regex::Regex;

/// A matcher tested against a trimmed branch listing line.
#[derive(Debug, Clone)]
pub enum IgnorePattern {
    Exact(String),
    Contains(String),
    Regex(Regex),
}

impl IgnorePattern {
    pub fn from_config(config: &IgnorePatternConfig) -> Result<Self> {
        Ok(match config {
            IgnorePatternConfig::Exact(text) => IgnorePattern::Exact(text.clone()),
            IgnorePatternConfig::Contains(text) => IgnorePattern::Contains(text.clone()),
            IgnorePatternConfig::Regex(expr) => {
                let regex = Regex::new(expr).map_err(|e| {
                    GitBatchError::config_error(format!("Invalid ignore pattern '{}': {}", expr, e))
                })?;
                IgnorePattern::Regex(regex)
            }
        })
    }

    pub fn matches(&self, line: &str) -> bool {
        match self {
            IgnorePattern::Exact(text) => line == text,
            IgnorePattern::Contains(text) => line.contains(text.as_str()),
            IgnorePattern::Regex(regex) => regex.is_match(line),
        }
    }
}

/// Ordered set of ignore patterns handed to the inventory at construction.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreRules {
    pub fn new(patterns: Vec<IgnorePattern>) -> Self {
        Self { patterns }
    }

    pub fn from_config(configs: &[IgnorePatternConfig]) -> Result<Self> {
        let patterns = configs
            .iter()
            .map(IgnorePattern::from_config)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn is_ignored(&self, line: &str) -> bool {
        let line = line.trim();
        self.patterns.iter().any(|pattern| pattern.matches(line))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
