use crate::core::git::{BranchOrigin, BranchRecord, CommitInfo};
use colored::*;

/// A record with the text shown for it in the selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledBranch {
    pub label: String,
    pub record: BranchRecord,
}

/// `l` local, `r` remote, `b` local with a remote counterpart.
pub fn origin_marker(record: &BranchRecord) -> char {
    match record.origin {
        BranchOrigin::Local if record.on_remote => 'b',
        BranchOrigin::Local => 'l',
        BranchOrigin::Remote => 'r',
    }
}

pub fn format_commit(commit: Option<&CommitInfo>) -> String {
    match commit {
        Some(info) => format!(
            "[{} - {} ({}) <{}>]",
            info.hash,
            info.subject,
            info.formatted_date(),
            info.author
        ),
        None => "[no commit info]".to_string(),
    }
}

/// `<origin> <index:03> <current><name>  <commit>`, numbered from 1.
pub fn branch_label(index: usize, record: &BranchRecord, commit: Option<&CommitInfo>) -> String {
    let marker = origin_marker(record).to_string();
    let marker = match record.origin {
        BranchOrigin::Local => marker.green(),
        BranchOrigin::Remote => marker.blue(),
    };
    let current = if record.is_current { "*" } else { " " };
    let name = if record.is_current {
        record.name.bold()
    } else {
        record.name.normal()
    };
    let commit = match commit {
        Some(_) => format_commit(commit).normal(),
        None => format_commit(commit).dimmed(),
    };

    format!("{} {:03} {}{}  {}", marker, index + 1, current, name, commit)
}

pub fn deletion_summary(records: &[BranchRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(format!("The following {} branch(es) will be deleted:", records.len()));
    for record in records {
        let target = match record.origin {
            BranchOrigin::Local => record.deletion_target().yellow(),
            BranchOrigin::Remote => record.deletion_target().red(),
        };
        lines.push(format!("  • {} ({})", target, record.origin));
    }
    lines.join("\n")
}
