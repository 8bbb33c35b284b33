use crate::cli::parser::{ConfigArgs, ConfigCommands};
use crate::config::defaults::get_config_file_path;
use crate::config::{Config, ConfigManager};
use crate::utils::{is_non_interactive, GitBatchError, Result};
use std::path::Path;

pub fn execute(args: ConfigArgs) -> Result<()> {
    let config_path = get_config_file_path();
    match args.command.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => execute_show(&config_path),
        ConfigCommands::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
        ConfigCommands::Reset { yes } => execute_reset(&config_path, yes),
    }
}

fn execute_show(config_path: &Path) -> Result<()> {
    println!("{}", render_config(config_path)?);
    Ok(())
}

pub(crate) fn render_config(config_path: &Path) -> Result<String> {
    let config = ConfigManager::load_or_default_with_path(Some(config_path))
        .map_err(|e| GitBatchError::config_error(format!("Failed to load configuration: {e}")))?;
    Ok(serde_json::to_string_pretty(&config)?)
}

fn execute_reset(config_path: &Path, skip_confirmation: bool) -> Result<()> {
    use dialoguer::{theme::ColorfulTheme, Confirm};

    if !skip_confirmation {
        if is_non_interactive() {
            return Err(GitBatchError::invalid_args(
                "Cannot reset configuration in non-interactive mode. Use --yes to skip confirmation.",
            ));
        }

        if !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Reset configuration to defaults? This cannot be undone.")
            .default(false)
            .interact()
            .map_err(|e| GitBatchError::config_error(format!("Failed to read input: {e}")))?
        {
            println!("❌ Configuration reset cancelled");
            return Ok(());
        }
    }

    reset_config(config_path)?;
    println!("✅ Configuration reset to defaults ({})", config_path.display());
    Ok(())
}

pub(crate) fn reset_config(config_path: &Path) -> Result<Config> {
    ConfigManager::reset_to_path(config_path).map_err(|e| {
        GitBatchError::config_error(format!("Failed to save default configuration: {e}"))
    })
}
