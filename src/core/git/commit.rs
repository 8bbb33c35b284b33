use super::executor::{CommandExecutor, GitCommand, COMMIT_DATE_FORMAT, COMMIT_FIELD_SEPARATOR};
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::debug;

const SHORT_HASH_LEN: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub hash: String,
    pub full_hash: String,
    pub subject: String,
    pub author_date: NaiveDateTime,
    pub author: String,
}

impl CommitInfo {
    /// Author date in the fixed `YYYY-MM-DD-HH:MM:SS` form.
    pub fn formatted_date(&self) -> String {
        self.author_date.format(COMMIT_DATE_FORMAT).to_string()
    }
}

pub struct CommitAnnotator<'a> {
    executor: &'a dyn CommandExecutor,
}

impl<'a> CommitAnnotator<'a> {
    pub fn new(executor: &'a dyn CommandExecutor) -> Self {
        Self { executor }
    }

    /// Latest commit reachable from `reference`, or `None` when it cannot be
    /// resolved. Lookup failures are never surfaced to the caller.
    pub fn get_commit_info(&self, working_dir: &Path, reference: &str) -> Option<CommitInfo> {
        let command = GitCommand::LogOneCommit {
            reference: reference.to_string(),
        };

        match self.executor.run(&command, working_dir) {
            Ok(output) => {
                let info = parse_commit_line(&output);
                if info.is_none() {
                    debug!(reference, output = %output, "unparseable commit log output");
                }
                info
            }
            Err(e) => {
                debug!(reference, error = %e, "commit lookup failed");
                None
            }
        }
    }
}

/// Parses `hash, date, author, subject` separated by the unit separator.
pub(crate) fn parse_commit_line(output: &str) -> Option<CommitInfo> {
    let line = output.lines().next()?.trim_end();
    let mut fields = line.splitn(4, COMMIT_FIELD_SEPARATOR);

    let full_hash = fields.next()?.trim();
    let date = fields.next()?;
    let author = fields.next()?;
    let subject = fields.next()?;

    if full_hash.len() < SHORT_HASH_LEN || !full_hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let author_date = NaiveDateTime::parse_from_str(date, COMMIT_DATE_FORMAT).ok()?;

    Some(CommitInfo {
        hash: full_hash[..SHORT_HASH_LEN].to_string(),
        full_hash: full_hash.to_string(),
        subject: subject.to_string(),
        author_date,
        author: author.to_string(),
    })
}
