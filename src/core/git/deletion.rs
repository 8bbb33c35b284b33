use super::branch::{BranchOrigin, BranchRecord};
use super::executor::{CommandExecutor, ExecError, GitCommand};
use crate::utils::Result;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use tracing::{debug, info};

pub const DEFAULT_DELETE_WORKERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletionOptions {
    pub force: bool,
    pub workers: usize,
}

impl Default for DeletionOptions {
    fn default() -> Self {
        Self {
            force: true,
            workers: DEFAULT_DELETE_WORKERS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    pub record: BranchRecord,
    pub reason: String,
}

/// Partition of a deletion batch. Every input record lands in exactly one
/// list, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionResult {
    pub succeeded: Vec<BranchRecord>,
    pub failed: Vec<DeletionFailure>,
}

impl DeletionResult {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    pub fn failed_records(&self) -> impl Iterator<Item = &BranchRecord> {
        self.failed.iter().map(|failure| &failure.record)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum DeleteOutcome {
    Deleted,
    AlreadyAbsent,
    Failed(String),
}

pub struct DeletionOrchestrator<'a> {
    executor: &'a dyn CommandExecutor,
    options: DeletionOptions,
}

impl<'a> DeletionOrchestrator<'a> {
    pub fn new(executor: &'a dyn CommandExecutor, options: DeletionOptions) -> Self {
        Self { executor, options }
    }

    /// Deletes each record independently.
    ///
    /// Remote deletes run on a bounded worker pool. Local deletes run one at
    /// a time on a single worker alongside it: `git branch -D` rewrites
    /// `.git/config` and only warns when that lock is taken, so concurrent
    /// local deletes can leave stale `branch.<name>` sections behind.
    ///
    /// Per-branch failures are collected in the result. Only a failure to run
    /// the tool at all aborts the batch and is returned as an error.
    pub fn delete_branches(
        &self,
        working_dir: &Path,
        records: &[BranchRecord],
    ) -> Result<DeletionResult> {
        if records.is_empty() {
            return Ok(DeletionResult::default());
        }

        let (local, remote): (Vec<usize>, Vec<usize>) =
            (0..records.len()).partition(|&index| records[index].is_local());
        let remote_workers = if remote.is_empty() {
            0
        } else {
            self.options.workers.clamp(1, remote.len())
        };
        let local_cursor = AtomicUsize::new(0);
        let remote_cursor = AtomicUsize::new(0);
        let abort = AtomicBool::new(false);
        let (tx, rx) = mpsc::channel::<(usize, std::result::Result<DeleteOutcome, ExecError>)>();

        debug!(
            local = local.len(),
            remote = remote.len(),
            remote_workers,
            "starting branch deletion"
        );

        thread::scope(|scope| {
            let mut queues = Vec::with_capacity(remote_workers + 1);
            if !local.is_empty() {
                queues.push((local.as_slice(), &local_cursor));
            }
            for _ in 0..remote_workers {
                queues.push((remote.as_slice(), &remote_cursor));
            }

            for (queue, cursor) in queues {
                let tx = tx.clone();
                let abort = &abort;
                scope.spawn(move || loop {
                    if abort.load(Ordering::SeqCst) {
                        break;
                    }
                    let Some(&index) = queue.get(cursor.fetch_add(1, Ordering::SeqCst)) else {
                        break;
                    };

                    let outcome = self.delete_one(working_dir, &records[index]);
                    if outcome.is_err() {
                        abort.store(true, Ordering::SeqCst);
                    }
                    if tx.send((index, outcome)).is_err() {
                        break;
                    }
                });
            }
        });
        drop(tx);

        let mut outcomes: Vec<Option<DeleteOutcome>> = records.iter().map(|_| None).collect();
        let mut fatal: Option<ExecError> = None;
        for (index, outcome) in rx {
            match outcome {
                Ok(outcome) => outcomes[index] = Some(outcome),
                Err(e) if fatal.is_none() => fatal = Some(e),
                Err(_) => {}
            }
        }

        if let Some(err) = fatal {
            return Err(err.into());
        }

        let mut result = DeletionResult::default();
        for (record, outcome) in records.iter().zip(outcomes) {
            match outcome {
                Some(DeleteOutcome::Deleted) => result.succeeded.push(record.clone()),
                Some(DeleteOutcome::AlreadyAbsent) => {
                    debug!(target_ref = %record.deletion_target(), "branch was already absent");
                    result.succeeded.push(record.clone());
                }
                Some(DeleteOutcome::Failed(reason)) => {
                    info!(target_ref = %record.deletion_target(), %reason, "branch deletion failed");
                    result.failed.push(DeletionFailure {
                        record: record.clone(),
                        reason,
                    });
                }
                None => result.failed.push(DeletionFailure {
                    record: record.clone(),
                    reason: "deletion was not attempted".to_string(),
                }),
            }
        }

        info!(
            succeeded = result.succeeded.len(),
            failed = result.failed.len(),
            "branch deletion finished"
        );

        Ok(result)
    }

    fn delete_one(
        &self,
        working_dir: &Path,
        record: &BranchRecord,
    ) -> std::result::Result<DeleteOutcome, ExecError> {
        let command = match record.origin {
            BranchOrigin::Local => {
                if record.is_current {
                    return Ok(DeleteOutcome::Failed(
                        "Cannot delete the checked-out branch".to_string(),
                    ));
                }
                GitCommand::DeleteLocalBranch {
                    name: record.name.clone(),
                    force: self.options.force,
                }
            }
            BranchOrigin::Remote => GitCommand::DeleteRemoteBranch {
                remote: record.remote.clone(),
                name: record.name.clone(),
            },
        };

        match self.executor.run(&command, working_dir) {
            Ok(_) => Ok(DeleteOutcome::Deleted),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) if indicates_missing_ref(record, &e.message()) => Ok(DeleteOutcome::AlreadyAbsent),
            Err(e) => Ok(DeleteOutcome::Failed(e.message())),
        }
    }
}

/// The desired end state (ref gone) already holds.
fn indicates_missing_ref(record: &BranchRecord, error_text: &str) -> bool {
    let text = error_text.to_lowercase();
    if text.contains("does not exist") {
        return true;
    }

    record.origin == BranchOrigin::Local
        && text.contains(&format!("branch '{}' not found", record.name.to_lowercase()))
}
