#[cfg(test)]
mod cli_tests {
    use crate::cli::parser::*;
    use crate::core::git::BranchFilter;
    use clap::Parser;
    use std::path::PathBuf;

    fn branches(argv: &[&str]) -> BranchesArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Branches(args) => args,
            _ => panic!("Expected Branches command"),
        }
    }

    #[test]
    fn test_branches_defaults() {
        let args = branches(&["git-batch", "branches"]);
        assert!(args.path.is_none());
        assert!(!args.remote);
        assert!(!args.local);
        assert!(args.remote_name.is_none());
        assert!(!args.with_remote);
        assert!(!args.dry_run);
        assert!(!args.strict);
        assert!(args.workers.is_none());
        assert_eq!(args.filter(), BranchFilter::All);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_branches_with_path_and_filter() {
        let args = branches(&["git-batch", "branches", "../service", "-r"]);
        assert_eq!(args.path, Some(PathBuf::from("../service")));
        assert_eq!(args.filter(), BranchFilter::RemoteOnly);

        let args = branches(&["git-batch", "branches", "--local"]);
        assert_eq!(args.filter(), BranchFilter::LocalOnly);
    }

    #[test]
    fn test_branches_alias() {
        let args = branches(&["git-batch", "br", "-l"]);
        assert!(args.local);
    }

    #[test]
    fn test_remote_and_local_conflict() {
        let result = Cli::try_parse_from(["git-batch", "branches", "-r", "-l"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_branches_overrides() {
        let args = branches(&[
            "git-batch",
            "branches",
            "--remote-name",
            "upstream",
            "--workers",
            "8",
            "--with-remote",
            "--strict",
            "--dry-run",
        ]);
        assert_eq!(args.remote_name.as_deref(), Some("upstream"));
        assert_eq!(args.workers, Some(8));
        assert!(args.with_remote);
        assert!(args.strict);
        assert!(args.dry_run);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_branches_validation() {
        let args = branches(&["git-batch", "branches", "--workers", "0"]);
        assert!(args.validate().is_err());

        let args = branches(&["git-batch", "branches", "--workers", "33"]);
        assert!(args.validate().is_err());

        let args = branches(&["git-batch", "branches", "--remote-name", "a b"]);
        assert!(args.validate().is_err());

        let args = branches(&["git-batch", "branches", "-r", "--with-remote"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_workers_must_be_a_number() {
        let result = Cli::try_parse_from(["git-batch", "branches", "--workers", "many"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_verbosity_flags() {
        let cli = Cli::try_parse_from(["git-batch", "-vv", "branches"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);

        let cli = Cli::try_parse_from(["git-batch", "branches", "--quiet"]).unwrap();
        assert!(cli.quiet);

        let result = Cli::try_parse_from(["git-batch", "-v", "-q", "branches"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::try_parse_from(["git-batch", "config"]).unwrap();
        match cli.command {
            Commands::Config(args) => assert!(args.command.is_none()),
            _ => panic!("Expected Config command"),
        }

        let cli = Cli::try_parse_from(["git-batch", "config", "path"]).unwrap();
        match cli.command {
            Commands::Config(args) => assert_eq!(args.command, Some(ConfigCommands::Path)),
            _ => panic!("Expected Config command"),
        }

        let cli = Cli::try_parse_from(["git-batch", "config", "reset", "--yes"]).unwrap();
        match cli.command {
            Commands::Config(args) => {
                assert_eq!(args.command, Some(ConfigCommands::Reset { yes: true }))
            }
            _ => panic!("Expected Config command"),
        }
    }

    #[test]
    fn test_completion_command() {
        let cli = Cli::try_parse_from(["git-batch", "completion", "zsh"]).unwrap();
        match cli.command {
            Commands::Completion(args) => assert_eq!(args.shell, clap_complete::Shell::Zsh),
            _ => panic!("Expected Completion command"),
        }

        assert!(Cli::try_parse_from(["git-batch", "completion", "tcsh"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["git-batch"]).is_err());
    }
}
