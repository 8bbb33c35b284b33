pub const NON_INTERACTIVE_ENV: &str = "GIT_BATCH_NON_INTERACTIVE";

/// True when prompts cannot be answered: forced by env, running under CI,
/// or stdin is not a terminal.
pub fn is_non_interactive() -> bool {
    std::env::var(NON_INTERACTIVE_ENV).is_ok()
        || std::env::var("CI").is_ok()
        || !atty::is(atty::Stream::Stdin)
}
