use crate::cli::parser::{Cli, CompletionArgs};
use crate::utils::{GitBatchError, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};

pub fn execute(args: CompletionArgs) -> Result<()> {
    let script = generate_completion(args.shell)?;
    print!("{}", script);
    Ok(())
}

pub fn generate_completion(shell: Shell) -> Result<String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "git-batch", &mut buf);

    String::from_utf8(buf).map_err(|e| {
        GitBatchError::invalid_args(format!("UTF-8 error generating completion: {}", e))
    })
}
