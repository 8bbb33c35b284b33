pub mod mock_executor;

pub mod test_helpers {
    use crate::config::Config;
    use std::fs;
    use std::path::Path;
    use std::process::Command;
    use tempfile::TempDir;

    pub use super::mock_executor::MockExecutor;

    pub fn create_test_config() -> Config {
        crate::config::defaults::default_config()
    }

    fn git(repo_path: &Path, args: &[&str]) {
        let status = Command::new("git")
            .current_dir(repo_path)
            .args(args)
            .status()
            .unwrap_or_else(|e| panic!("Failed to run git {:?}: {}", args, e));
        assert!(status.success(), "git {:?} failed", args);
    }

    pub fn setup_test_repo() -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo_path = temp_dir.path();

        git(repo_path, &["init", "--initial-branch=main"]);
        git(repo_path, &["config", "user.name", "Test User"]);
        git(repo_path, &["config", "user.email", "test@example.com"]);

        fs::write(repo_path.join("README.md"), "# Test Repository")
            .expect("Failed to write README");

        git(repo_path, &["add", "README.md"]);
        git(repo_path, &["commit", "-m", "Initial commit"]);

        temp_dir
    }

    pub fn create_branch(repo_path: &Path, name: &str) {
        git(repo_path, &["branch", name]);
    }

    pub fn branch_exists(repo_path: &Path, name: &str) -> bool {
        let reference = format!("refs/heads/{}", name);
        Command::new("git")
            .current_dir(repo_path)
            .args(["rev-parse", "--verify", "--quiet", reference.as_str()])
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }

    /// A working repository with a bare repository registered as `origin`.
    /// `main` and every name in `branches` are pushed.
    pub fn setup_repo_with_remote(branches: &[&str]) -> (TempDir, TempDir) {
        let remote_dir = TempDir::new().expect("Failed to create remote dir");
        git(remote_dir.path(), &["init", "--bare", "--initial-branch=main"]);

        let repo = setup_test_repo();
        let remote_url = remote_dir.path().to_string_lossy().to_string();
        git(repo.path(), &["remote", "add", "origin", remote_url.as_str()]);

        let mut push_args = vec!["push", "--quiet", "origin", "main"];
        for branch in branches {
            create_branch(repo.path(), branch);
            push_args.push(*branch);
        }
        git(repo.path(), &push_args);

        (repo, remote_dir)
    }
}
