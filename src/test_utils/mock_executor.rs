use crate::core::git::{CommandExecutor, ExecError, GitCommand};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Scripted stand-in for the git binary. Listings default to empty, the
/// repository probe succeeds, deletes succeed and commit lookups fail.
pub struct MockExecutor {
    responses: HashMap<GitCommand, Result<String, String>>,
    spawn_failure: bool,
    calls: Mutex<Vec<GitCommand>>,
}

impl Default for MockExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockExecutor {
    pub fn new() -> Self {
        MockExecutor {
            responses: HashMap::new(),
            spawn_failure: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_output(mut self, command: GitCommand, output: &str) -> Self {
        self.responses.insert(command, Ok(output.to_string()));
        self
    }

    pub fn with_failure(mut self, command: GitCommand, stderr: &str) -> Self {
        self.responses.insert(command, Err(stderr.to_string()));
        self
    }

    pub fn with_local_branches(self, listing: &str) -> Self {
        self.with_output(GitCommand::ListLocalBranches, listing)
    }

    pub fn with_remote_branches(self, listing: &str) -> Self {
        self.with_output(GitCommand::ListRemoteBranches, listing)
    }

    pub fn with_commit(self, reference: &str, log_line: &str) -> Self {
        self.with_output(
            GitCommand::LogOneCommit {
                reference: reference.to_string(),
            },
            log_line,
        )
    }

    pub fn not_a_repository(self) -> Self {
        self.with_failure(
            GitCommand::IsRepository,
            "fatal: not a git repository (or any of the parent directories): .git",
        )
    }

    /// Every command fails as if the binary were missing.
    pub fn with_spawn_failure(mut self) -> Self {
        self.spawn_failure = true;
        self
    }

    pub fn calls(&self) -> Vec<GitCommand> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn was_called(&self, command: &GitCommand) -> bool {
        self.calls().iter().any(|call| call == command)
    }

    pub fn deletion_calls(&self) -> Vec<GitCommand> {
        self.calls()
            .into_iter()
            .filter(|call| {
                matches!(
                    call,
                    GitCommand::DeleteLocalBranch { .. } | GitCommand::DeleteRemoteBranch { .. }
                )
            })
            .collect()
    }
}

impl CommandExecutor for MockExecutor {
    fn run(&self, command: &GitCommand, _working_dir: &Path) -> Result<String, ExecError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command.clone());
        }

        if self.spawn_failure {
            return Err(ExecError::Spawn {
                program: "git".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
            });
        }

        let failed = |stderr: String| ExecError::Failed {
            command: command.to_string(),
            stderr,
            code: Some(1),
        };

        match self.responses.get(command) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(stderr)) => Err(failed(stderr.clone())),
            None => match command {
                GitCommand::IsRepository => Ok(".git".to_string()),
                GitCommand::LogOneCommit { reference } => Err(failed(format!(
                    "fatal: bad revision '{}'",
                    reference
                ))),
                _ => Ok(String::new()),
            },
        }
    }
}
