pub mod display;
pub mod interaction;
pub mod reporter;

use crate::cli::parser::BranchesArgs;
use crate::config::Config;
use crate::core::git::{BranchOperations, BranchRecord, DeletionResult, GitService};
use crate::utils::{GitBatchError, Result};
use display::{branch_label, deletion_summary, LabelledBranch};
use indicatif::{ProgressBar, ProgressStyle};
use interaction::{SelectionFlow, TerminalFlow};
use reporter::DeletionReporter;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// How a `branches` run ended when it did not error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchesOutcome {
    NothingToDelete,
    Listed(usize),
    NothingSelected,
    Declined,
    Completed(DeletionResult),
}

pub fn execute(config: Config, args: BranchesArgs) -> Result<()> {
    args.validate()?;

    let mut service = GitService::from_config(&config)?;
    if let Some(ref remote) = args.remote_name {
        service = service.with_remote(remote.clone());
    }
    if let Some(workers) = args.workers {
        service = service.with_workers(workers);
    }

    let strict = args.strict || config.is_strict();
    run_with(&service, &TerminalFlow::new(), &args, strict).map(|_| ())
}

pub fn run_with(
    service: &GitService,
    flow: &dyn SelectionFlow,
    args: &BranchesArgs,
    strict: bool,
) -> Result<BranchesOutcome> {
    let repo_path = resolve_path(args.path.as_deref())?;
    if !service.is_valid_repository(&repo_path) {
        return Err(GitBatchError::invalid_repository(&repo_path));
    }

    let spinner = start_spinner("Reading branches...");
    let listed = service.list_branches(&repo_path, args.filter());
    let records = match listed {
        Ok(records) => records,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };

    if records.is_empty() {
        spinner.finish_and_clear();
        println!("No deletable branches found in {}", repo_path.display());
        return Ok(BranchesOutcome::NothingToDelete);
    }

    spinner.set_message("Reading commit info...");
    let items = label_records(service, &repo_path, records);
    spinner.finish_and_clear();

    if args.dry_run {
        println!("🌿 {} branch(es) in {}", items.len(), repo_path.display());
        for item in &items {
            println!("{}", item.label);
        }
        return Ok(BranchesOutcome::Listed(items.len()));
    }

    let selected = flow.select("Select branches to delete", &items)?;
    if selected.is_empty() {
        println!("No branches selected");
        return Ok(BranchesOutcome::NothingSelected);
    }

    let targets = expand_with_remote(selected, args.with_remote);
    if !flow.confirm(&deletion_summary(&targets))? {
        println!("❌ Deletion cancelled");
        return Ok(BranchesOutcome::Declined);
    }

    let spinner = start_spinner(&format!("Deleting {} branch(es)...", targets.len()));
    let deleted = service.delete_branches(&repo_path, &targets);
    spinner.finish_and_clear();
    let result = deleted?;

    DeletionReporter::new().show_results(&result);
    info!(
        succeeded = result.succeeded.len(),
        failed = result.failed.len(),
        repo = %repo_path.display(),
        "branch batch finished"
    );

    if strict && result.has_failures() {
        return Err(GitBatchError::partial_deletion(
            result.failed.len(),
            result.succeeded.len(),
        ));
    }

    Ok(BranchesOutcome::Completed(result))
}

fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

fn label_records(
    service: &GitService,
    repo_path: &Path,
    records: Vec<BranchRecord>,
) -> Vec<LabelledBranch> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let commit = service.get_commit_info(repo_path, &record.commit_ref());
            LabelledBranch {
                label: branch_label(index, &record, commit.as_ref()),
                record,
            }
        })
        .collect()
}

/// Each selected local branch that also exists on the remote is followed by
/// its explicit remote deletion record.
pub(crate) fn expand_with_remote(selected: Vec<BranchRecord>, with_remote: bool) -> Vec<BranchRecord> {
    if !with_remote {
        return selected;
    }

    let mut targets = Vec::with_capacity(selected.len() * 2);
    for record in selected {
        let remote = (record.is_local() && record.on_remote).then(|| record.as_remote());
        targets.push(record);
        targets.extend(remote);
    }
    targets
}

fn start_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
