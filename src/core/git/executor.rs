use std::fmt;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// `git log` format for a single commit. Fields are separated by the ASCII
/// unit separator, which cannot appear in author names. The subject is last
/// so it may contain anything.
pub const COMMIT_LOG_FORMAT: &str = "%H%x1f%ad%x1f%an%x1f%s";
pub const COMMIT_FIELD_SEPARATOR: char = '\u{1f}';
pub const COMMIT_DATE_FORMAT: &str = "%Y-%m-%d-%H:%M:%S";

const TIMEOUT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Logical git operations the inventory and orchestrator depend on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GitCommand {
    IsRepository,
    ListLocalBranches,
    ListRemoteBranches,
    LogOneCommit { reference: String },
    DeleteLocalBranch { name: String, force: bool },
    DeleteRemoteBranch { remote: String, name: String },
}

impl GitCommand {
    pub fn args(&self) -> Vec<String> {
        let args: Vec<&str> = match self {
            GitCommand::IsRepository => vec!["rev-parse", "--git-dir"],
            GitCommand::ListLocalBranches => vec!["branch", "--no-color"],
            GitCommand::ListRemoteBranches => vec!["branch", "-r", "--no-color"],
            GitCommand::LogOneCommit { reference } => {
                return vec![
                    "log".to_string(),
                    reference.clone(),
                    "-1".to_string(),
                    format!("--format={}", COMMIT_LOG_FORMAT),
                    format!("--date=format:{}", COMMIT_DATE_FORMAT),
                    "--".to_string(),
                ];
            }
            GitCommand::DeleteLocalBranch { name, force } => {
                let flag = if *force { "-D" } else { "-d" };
                vec!["branch", flag, name.as_str()]
            }
            GitCommand::DeleteRemoteBranch { remote, name } => {
                vec!["push", remote.as_str(), "--delete", name.as_str()]
            }
        };

        args.into_iter().map(String::from).collect()
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git {}", self.args().join(" "))
    }
}

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Git command failed ({command}): {stderr}")]
    Failed {
        command: String,
        stderr: String,
        code: Option<i32>,
    },

    #[error("Failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Git command timed out after {after:?} ({command})")]
    TimedOut { command: String, after: Duration },
}

impl ExecError {
    /// Raw error text reported by the tool, used by callers to classify failures.
    pub fn message(&self) -> String {
        match self {
            ExecError::Failed { stderr, .. } => stderr.clone(),
            other => other.to_string(),
        }
    }

    /// The tool could not be run at all; nothing else in the batch will work either.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExecError::Spawn { .. })
    }
}

pub trait CommandExecutor: Send + Sync {
    fn run(&self, command: &GitCommand, working_dir: &Path) -> Result<String, ExecError>;
}

/// Runs commands through the `git` binary.
#[derive(Debug, Clone)]
pub struct GitExecutor {
    program: String,
    timeout: Option<Duration>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
            timeout: None,
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_command(&self, command: &GitCommand, working_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(working_dir)
            .args(command.args())
            .env("LC_ALL", "C")
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null());
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> ExecError {
        ExecError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

impl CommandExecutor for GitExecutor {
    fn run(&self, command: &GitCommand, working_dir: &Path) -> Result<String, ExecError> {
        debug!(command = %command, dir = %working_dir.display(), "running git command");

        let mut cmd = self.build_command(command, working_dir);
        let output = match self.timeout {
            None => cmd.output().map_err(|e| self.spawn_error(e))?,
            Some(limit) => match output_with_timeout(cmd, limit) {
                Ok(Some(output)) => output,
                Ok(None) => {
                    return Err(ExecError::TimedOut {
                        command: command.to_string(),
                        after: limit,
                    })
                }
                Err(e) => return Err(self.spawn_error(e)),
            },
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stderr = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(ExecError::Failed {
                command: command.to_string(),
                stderr,
                code: output.status.code(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim_end().to_string())
    }
}

/// Returns `Ok(None)` when the child had to be killed.
fn output_with_timeout(mut cmd: Command, limit: Duration) -> std::io::Result<Option<Output>> {
    let mut child = cmd.stdout(Stdio::piped()).stderr(Stdio::piped()).spawn()?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let stdout_reader = thread::spawn(move || read_pipe(stdout));
    let stderr_reader = thread::spawn(move || read_pipe(stderr));

    let deadline = Instant::now() + limit;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            // Readers are left detached: grandchildren (ssh) may still hold the pipes.
            return Ok(None);
        }
        thread::sleep(TIMEOUT_POLL_INTERVAL);
    };

    Ok(Some(Output {
        status,
        stdout: stdout_reader.join().unwrap_or_default(),
        stderr: stderr_reader.join().unwrap_or_default(),
    }))
}

fn read_pipe<R: Read>(pipe: Option<R>) -> Vec<u8> {
    let mut buffer = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buffer);
    }
    buffer
}
