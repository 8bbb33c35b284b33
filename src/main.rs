use clap::Parser;
use git_batch::cli::{execute_command, Cli};
use git_batch::utils::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.quiet) {
        eprintln!("git-batch: {}", e);
    }

    if let Err(e) = execute_command(cli) {
        eprintln!("git-batch: {}", e);
        std::process::exit(1);
    }
}
