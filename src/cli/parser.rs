use crate::config::validation::{validate_remote_name, validate_workers};
use crate::core::git::BranchFilter;
use crate::utils::{GitBatchError, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "git-batch")]
#[command(about = "Batch operations on git repositories")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Select and delete local and remote branches
    #[command(alias = "br")]
    Branches(BranchesArgs),
    /// Show or reset configuration
    Config(ConfigArgs),
    /// Generate shell completion script
    Completion(CompletionArgs),
}

#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:
    # Pick from every local and remote branch of the current repository
    git-batch branches

    # Only remote branches of another checkout
    git-batch branches ../service -r

    # Delete local branches together with their remote counterparts
    git-batch branches -l --with-remote")]
pub struct BranchesArgs {
    /// Repository path (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Only list remote branches
    #[arg(long, short = 'r', conflicts_with = "local")]
    pub remote: bool,

    /// Only list local branches
    #[arg(long, short = 'l')]
    pub local: bool,

    /// Remote to list and delete from (overrides git.remote)
    #[arg(long, value_name = "NAME")]
    pub remote_name: Option<String>,

    /// Also delete the remote branch of every selected local branch that has one
    #[arg(long)]
    pub with_remote: bool,

    /// Print the branch list without prompting or deleting
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error when any deletion fails
    #[arg(long)]
    pub strict: bool,

    /// Number of deletions to run in parallel (overrides deletion.workers)
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Reset configuration to defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completion for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

impl BranchesArgs {
    pub fn filter(&self) -> BranchFilter {
        BranchFilter::from_flags(self.remote, self.local)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(ref remote) = self.remote_name {
            validate_remote_name(remote).map_err(|e| {
                GitBatchError::invalid_args(format!("Invalid --remote-name: {}", e))
            })?;
        }

        if let Some(workers) = self.workers {
            validate_workers(workers)
                .map_err(|e| GitBatchError::invalid_args(format!("Invalid --workers: {}", e)))?;
        }

        if self.with_remote && self.remote {
            return Err(GitBatchError::invalid_args(
                "--with-remote applies to local branches and cannot be combined with --remote",
            ));
        }

        Ok(())
    }
}
