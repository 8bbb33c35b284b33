pub mod commands;
pub mod parser;

#[cfg(test)]
mod tests;

pub use parser::{Cli, Commands};

use crate::config::ConfigManager;
use crate::utils::{GitBatchError, Result};

pub fn execute_command(cli: Cli) -> Result<()> {
    execute_command_with_config(cli, None)
}

pub fn execute_command_with_config(
    cli: Cli,
    test_config: Option<crate::config::Config>,
) -> Result<()> {
    match cli.command {
        Commands::Branches(args) => {
            let config = match test_config {
                Some(cfg) => cfg,
                None => ConfigManager::load_or_default().map_err(|e| {
                    GitBatchError::config_error(format!("Failed to load config: {}", e))
                })?,
            };
            commands::branches::execute(config, args)
        }
        Commands::Config(args) => commands::config::execute(args),
        Commands::Completion(args) => commands::completion::execute(args),
    }
}
