use git_batch::config::defaults::default_config;
use git_batch::core::git::{BranchOrigin, DeletionOptions, GitCommand, GitExecutor};
use git_batch::{BranchFilter, BranchOperations, GitService};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Working repository plus a bare `origin` holding `main`, `shared-1`,
/// `shared-2` and `remote-only`. `local-only` exists only in the working copy.
fn setup() -> (TempDir, TempDir) {
    let remote = TempDir::new().unwrap();
    git(remote.path(), &["init", "--bare", "--initial-branch=main"]);

    let repo = TempDir::new().unwrap();
    let path = repo.path();
    git(path, &["init", "--initial-branch=main"]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "user.email", "test@example.com"]);
    fs::write(path.join("README.md"), "# Test Repository").unwrap();
    git(path, &["add", "README.md"]);
    git(path, &["commit", "-m", "Initial commit"]);
    let remote_url = remote.path().to_string_lossy().to_string();
    git(path, &["remote", "add", "origin", remote_url.as_str()]);

    for branch in ["shared-1", "shared-2", "remote-only", "local-only"] {
        git(path, &["branch", branch]);
    }
    git(
        path,
        &["push", "--quiet", "origin", "main", "shared-1", "shared-2", "remote-only"],
    );
    git(path, &["branch", "-D", "remote-only"]);

    (repo, remote)
}

fn branch_config_entries(dir: &Path) -> Vec<String> {
    // Exits 1 when nothing matches, so the status is not checked.
    let output = Command::new("git")
        .current_dir(dir)
        .args(["config", "--get-regexp", r"^branch\."])
        .output()
        .expect("Failed to run git");
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

fn remote_heads(remote: &Path) -> Vec<String> {
    git(remote, &["for-each-ref", "--format=%(refname:short)", "refs/heads"])
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn inventory_merges_local_and_remote_listings() {
    let (repo, _remote) = setup();
    let service = GitService::from_config(&default_config()).unwrap();

    let records = service.list_branches(repo.path(), BranchFilter::All).unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();

    // `* main` is ignored locally; the remote main is offered as a remote record.
    assert_eq!(
        names,
        vec!["local-only", "shared-1", "shared-2", "main", "remote-only"]
    );

    for record in &records {
        match record.name.as_str() {
            "shared-1" | "shared-2" => {
                assert_eq!(record.origin, BranchOrigin::Local);
                assert!(record.on_remote);
            }
            "local-only" => {
                assert_eq!(record.origin, BranchOrigin::Local);
                assert!(!record.on_remote);
            }
            _ => assert_eq!(record.origin, BranchOrigin::Remote),
        }
        assert!(!record.is_current);
    }

    let remote_only = service
        .list_branches(repo.path(), BranchFilter::RemoteOnly)
        .unwrap();
    let names: Vec<&str> = remote_only.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["main", "remote-only"]);
}

#[test]
fn batch_deletion_removes_local_and_remote_refs() {
    let (repo, remote) = setup();
    let service = GitService::from_config(&default_config()).unwrap();

    let records = service.list_branches(repo.path(), BranchFilter::All).unwrap();
    let shared = records.iter().find(|r| r.name == "shared-1").unwrap();
    let remote_only = records.iter().find(|r| r.name == "remote-only").unwrap();
    let local_only = records.iter().find(|r| r.name == "local-only").unwrap();

    let info = service
        .get_commit_info(repo.path(), &remote_only.commit_ref())
        .expect("remote-only should resolve");
    assert_eq!(info.subject, "Initial commit");

    let selection = vec![
        shared.clone(),
        shared.as_remote(),
        remote_only.clone(),
        local_only.clone(),
    ];
    let result = service.delete_branches(repo.path(), &selection).unwrap();

    assert_eq!(result.succeeded, selection);
    assert!(!result.has_failures());

    let heads = remote_heads(remote.path());
    assert!(heads.contains(&"main".to_string()));
    assert!(heads.contains(&"shared-2".to_string()));
    assert!(!heads.contains(&"shared-1".to_string()));
    assert!(!heads.contains(&"remote-only".to_string()));

    let remaining = service.list_branches(repo.path(), BranchFilter::All).unwrap();
    let names: Vec<&str> = remaining.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["shared-2", "main"]);
}

#[test]
fn externally_deleted_remote_branch_counts_as_deleted() {
    let (repo, remote) = setup();
    let service = GitService::from_config(&default_config()).unwrap();

    let records = service.list_branches(repo.path(), BranchFilter::RemoteOnly).unwrap();
    let stale = records.iter().find(|r| r.name == "remote-only").unwrap().clone();

    // Someone else removes it; the local tracking ref is now stale.
    git(remote.path(), &["branch", "-D", "remote-only"]);

    let result = service.delete_branches(repo.path(), &[stale.clone()]).unwrap();
    assert_eq!(result.succeeded, vec![stale]);
}

#[test]
fn checked_out_branch_is_reported_as_failed() {
    let (repo, _remote) = setup();
    git(repo.path(), &["checkout", "--quiet", "local-only"]);

    let service = GitService::from_config(&default_config()).unwrap();
    let records = service.list_branches(repo.path(), BranchFilter::LocalOnly).unwrap();

    let current = records.iter().find(|r| r.is_current).unwrap();
    assert_eq!(current.name, "local-only");

    let result = service
        .delete_branches(repo.path(), &[current.clone()])
        .unwrap();
    assert!(result.succeeded.is_empty());
    assert_eq!(result.failed.len(), 1);
    assert!(git(repo.path(), &["branch", "--list", "local-only"]).contains("local-only"));
}

#[test]
fn missing_git_binary_is_an_error() {
    let (repo, _remote) = setup();
    let executor = GitExecutor::new().with_program("git-batch-definitely-missing-binary");
    let service =
        GitService::with_executor(Box::new(executor), &default_config()).unwrap();

    assert!(!service.is_valid_repository(repo.path()));
    assert!(service.list_branches(repo.path(), BranchFilter::All).is_err());

    let record = git_batch::BranchRecord::local("local-only", "origin", false);
    assert!(service.delete_branches(repo.path(), &[record]).is_err());
}

#[test]
fn non_repository_path_is_rejected() {
    let plain = TempDir::new().unwrap();
    let service = GitService::from_config(&default_config()).unwrap();

    assert!(!service.is_valid_repository(plain.path()));
    assert!(!service.is_valid_repository(&plain.path().join("missing")));
}

#[test]
fn deletion_options_follow_config() {
    let mut config = default_config();
    config.deletion.force = false;
    config.deletion.workers = 2;

    let service = GitService::from_config(&config).unwrap();
    assert_eq!(
        service.deletion_options(),
        DeletionOptions {
            force: false,
            workers: 2
        }
    );
    assert_eq!(
        GitCommand::DeleteLocalBranch {
            name: "x".to_string(),
            force: service.deletion_options().force
        }
        .to_string(),
        "git branch -d x"
    );
}

#[test]
fn parallel_batch_leaves_no_tracking_config_behind() {
    let (repo, remote) = setup();
    let path = repo.path();

    let names: Vec<String> = (0..40).map(|i| format!("topic-{:02}", i)).collect();
    let mut push_args = vec!["push", "--quiet", "-u", "origin"];
    for name in &names {
        git(path, &["branch", name.as_str()]);
        push_args.push(name.as_str());
    }
    git(path, &push_args);
    git(path, &["pack-refs", "--all"]);
    assert!(branch_config_entries(path).len() >= names.len() * 2);

    let mut config = default_config();
    config.deletion.workers = 8;
    let service = GitService::from_config(&config).unwrap();

    let records = service.list_branches(path, BranchFilter::LocalOnly).unwrap();
    let topics: Vec<_> = records
        .into_iter()
        .filter(|r| r.name.starts_with("topic-"))
        .collect();
    assert_eq!(topics.len(), names.len());

    let mut selection = Vec::new();
    for record in &topics {
        selection.push(record.as_remote());
        selection.push(record.clone());
    }
    let result = service.delete_branches(path, &selection).unwrap();

    assert_eq!(result.succeeded, selection);
    assert!(branch_config_entries(path).is_empty());
    assert!(!remote_heads(remote.path())
        .iter()
        .any(|head| head.starts_with("topic-")));
    assert!(!git(path, &["branch", "--list", "topic-*"]).contains("topic-"));
}
