use tracing::Level;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GIT_BATCH_LOG";

pub fn level_for(verbosity: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn build_filter(verbosity: u8, quiet: bool) -> anyhow::Result<EnvFilter> {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        if !directives.trim().is_empty() {
            return Ok(EnvFilter::try_new(directives)?);
        }
    }

    let level = level_for(verbosity, quiet);
    let directive = format!("git_batch={}", level.as_str().to_lowercase());
    Ok(EnvFilter::new("warn").add_directive(directive.parse()?))
}

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// the branch listing on stdout.
pub fn init_logging(verbosity: u8, quiet: bool) -> anyhow::Result<()> {
    let filter = build_filter(verbosity, quiet)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))
}
