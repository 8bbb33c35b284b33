pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use crate::config::Config;
pub use crate::core::git::{BranchFilter, BranchOperations, BranchRecord, DeletionResult, GitService};
pub use crate::utils::{GitBatchError, Result};
