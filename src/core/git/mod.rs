use crate::config::Config;
use crate::utils::error::Result;
use std::path::Path;
use std::time::Duration;

pub mod branch;
pub mod commit;
pub mod deletion;
pub mod executor;
pub mod ignore;
pub mod inventory;

pub use branch::{BranchOrigin, BranchRecord};
pub use commit::{CommitAnnotator, CommitInfo};
pub use deletion::{DeletionFailure, DeletionOptions, DeletionOrchestrator, DeletionResult};
pub use executor::{CommandExecutor, ExecError, GitCommand, GitExecutor};
pub use ignore::{IgnorePattern, IgnoreRules};
pub use inventory::{BranchFilter, BranchInventory};

pub trait BranchOperations {
    fn is_valid_repository(&self, working_dir: &Path) -> bool;
    fn list_branches(&self, working_dir: &Path, filter: BranchFilter) -> Result<Vec<BranchRecord>>;
    fn get_commit_info(&self, working_dir: &Path, reference: &str) -> Option<CommitInfo>;
    fn delete_branches(&self, working_dir: &Path, records: &[BranchRecord])
        -> Result<DeletionResult>;
}

/// Owns the executor and the configured policies, and hands out the
/// components that borrow them.
pub struct GitService {
    executor: Box<dyn CommandExecutor>,
    remote: String,
    ignore: IgnoreRules,
    deletion: DeletionOptions,
}

impl GitService {
    pub fn from_config(config: &Config) -> Result<Self> {
        let timeout = config.git.command_timeout_secs.map(Duration::from_secs);
        let executor = GitExecutor::new().with_timeout(timeout);
        Self::with_executor(Box::new(executor), config)
    }

    pub fn with_executor(executor: Box<dyn CommandExecutor>, config: &Config) -> Result<Self> {
        let ignore = IgnoreRules::from_config(&config.git.ignore_patterns)?;
        Ok(Self {
            executor,
            remote: config.git.remote.clone(),
            ignore,
            deletion: DeletionOptions {
                force: config.deletion.force,
                workers: config.deletion.workers,
            },
        })
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.deletion.workers = workers;
        self
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    pub fn deletion_options(&self) -> DeletionOptions {
        self.deletion
    }

    pub fn inventory(&self) -> BranchInventory<'_> {
        BranchInventory::new(self.executor.as_ref(), self.remote.clone(), self.ignore.clone())
    }

    pub fn annotator(&self) -> CommitAnnotator<'_> {
        CommitAnnotator::new(self.executor.as_ref())
    }

    pub fn orchestrator(&self) -> DeletionOrchestrator<'_> {
        DeletionOrchestrator::new(self.executor.as_ref(), self.deletion)
    }
}

impl BranchOperations for GitService {
    fn is_valid_repository(&self, working_dir: &Path) -> bool {
        self.inventory().is_valid_repository(working_dir)
    }

    fn list_branches(&self, working_dir: &Path, filter: BranchFilter) -> Result<Vec<BranchRecord>> {
        self.inventory().list_branches(working_dir, filter)
    }

    fn get_commit_info(&self, working_dir: &Path, reference: &str) -> Option<CommitInfo> {
        self.annotator().get_commit_info(working_dir, reference)
    }

    fn delete_branches(
        &self,
        working_dir: &Path,
        records: &[BranchRecord],
    ) -> Result<DeletionResult> {
        self.orchestrator().delete_branches(working_dir, records)
    }
}
