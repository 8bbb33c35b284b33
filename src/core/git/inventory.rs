use super::branch::{BranchOrigin, BranchRecord};
use super::executor::{CommandExecutor, GitCommand};
use super::ignore::IgnoreRules;
use crate::utils::Result;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchFilter {
    #[default]
    All,
    LocalOnly,
    RemoteOnly,
}

impl BranchFilter {
    pub fn from_flags(remote_only: bool, local_only: bool) -> Self {
        match (remote_only, local_only) {
            (true, false) => BranchFilter::RemoteOnly,
            (false, true) => BranchFilter::LocalOnly,
            _ => BranchFilter::All,
        }
    }

    /// A merged record keeps the origin it was resolved to, so a name that
    /// exists in both places is never returned by `RemoteOnly`.
    pub fn accepts(&self, record: &BranchRecord) -> bool {
        match self {
            BranchFilter::All => true,
            BranchFilter::LocalOnly => record.origin == BranchOrigin::Local,
            BranchFilter::RemoteOnly => record.origin == BranchOrigin::Remote,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LocalEntry {
    pub name: String,
    pub is_current: bool,
}

pub struct BranchInventory<'a> {
    executor: &'a dyn CommandExecutor,
    remote: String,
    ignore: IgnoreRules,
}

impl<'a> BranchInventory<'a> {
    pub fn new(
        executor: &'a dyn CommandExecutor,
        remote: impl Into<String>,
        ignore: IgnoreRules,
    ) -> Self {
        Self {
            executor,
            remote: remote.into(),
            ignore,
        }
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Never errors: anything that is not a readable repository is `false`.
    pub fn is_valid_repository(&self, working_dir: &Path) -> bool {
        if !working_dir.is_dir() {
            return false;
        }

        match self.executor.run(&GitCommand::IsRepository, working_dir) {
            Ok(_) => true,
            Err(e) if e.is_fatal() => {
                warn!(error = %e, "could not probe repository");
                false
            }
            Err(e) => {
                debug!(dir = %working_dir.display(), error = %e, "not a git repository");
                false
            }
        }
    }

    pub fn list_branches(
        &self,
        working_dir: &Path,
        filter: BranchFilter,
    ) -> Result<Vec<BranchRecord>> {
        let local_output = self.executor.run(&GitCommand::ListLocalBranches, working_dir)?;
        let remote_output = self.executor.run(&GitCommand::ListRemoteBranches, working_dir)?;

        let local = parse_local_listing(&local_output, &self.ignore);
        let remote = parse_remote_listing(&remote_output, &self.remote, &self.ignore);

        let mut records = merge_listings(&local, &remote, &self.remote);
        records.retain(|record| filter.accepts(record));

        debug!(
            local = local.len(),
            remote = remote.len(),
            returned = records.len(),
            ?filter,
            "branch inventory built"
        );

        Ok(records)
    }
}

pub(crate) fn parse_local_listing(output: &str, ignore: &IgnoreRules) -> Vec<LocalEntry> {
    output
        .lines()
        .filter_map(|line| parse_local_line(line, ignore))
        .collect()
}

fn parse_local_line(line: &str, ignore: &IgnoreRules) -> Option<LocalEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if ignore.is_ignored(line) {
        debug!(line, "ignoring local branch line");
        return None;
    }

    // '+' marks a branch checked out in another worktree.
    let (is_current, rest) = if let Some(rest) = line.strip_prefix("* ") {
        (true, rest)
    } else if let Some(rest) = line.strip_prefix("+ ") {
        (false, rest)
    } else {
        (false, line)
    };

    let name = rest.trim();
    if !is_plain_branch_name(name) {
        debug!(line, "skipping unrecognised local branch line");
        return None;
    }

    Some(LocalEntry {
        name: name.to_string(),
        is_current,
    })
}

pub(crate) fn parse_remote_listing(
    output: &str,
    remote: &str,
    ignore: &IgnoreRules,
) -> Vec<String> {
    let prefix = format!("{}/", remote);

    output
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }

            if ignore.is_ignored(line) {
                debug!(line, "ignoring remote branch line");
                return None;
            }

            if line.contains(" -> ") {
                debug!(line, "skipping symbolic remote ref");
                return None;
            }

            let line = line.strip_prefix("remotes/").unwrap_or(line);
            let Some(name) = line.strip_prefix(&prefix) else {
                debug!(line, remote, "skipping branch of another remote");
                return None;
            };

            if name == "HEAD" {
                debug!(line, "skipping symbolic remote ref");
                return None;
            }

            if !is_plain_branch_name(name) {
                debug!(line, "skipping unrecognised remote branch line");
                return None;
            }

            Some(name.to_string())
        })
        .collect()
}

/// Union by name; a local entry wins over a remote one with the same name.
pub(crate) fn merge_listings(
    local: &[LocalEntry],
    remote: &[String],
    remote_name: &str,
) -> Vec<BranchRecord> {
    let remote_names: HashSet<&str> = remote.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut records = Vec::with_capacity(local.len() + remote.len());

    for entry in local {
        if !seen.insert(entry.name.as_str()) {
            continue;
        }
        records.push(
            BranchRecord::local(&entry.name, remote_name, entry.is_current)
                .with_remote_counterpart(remote_names.contains(entry.name.as_str())),
        );
    }

    for name in remote {
        if !seen.insert(name.as_str()) {
            continue;
        }
        records.push(BranchRecord::remote(name, remote_name));
    }

    records
}

/// Rejects detached-HEAD descriptions and anything with embedded whitespace.
fn is_plain_branch_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('(') && !name.chars().any(char::is_whitespace)
}
