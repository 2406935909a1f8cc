use iconline::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn git(repo: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo)
        .output()
        .expect("Failed to run git");
    assert!(output.status.success(), "git {:?} failed: {}", args, String::from_utf8_lossy(&output.stderr));
}

fn init_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path();

    git(repo_path, &["init"]);
    git(repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(repo_path, &["config", "user.email", "test@example.com"]);
    git(repo_path, &["config", "user.name", "Test User"]);
    git(repo_path, &["config", "commit.gpgsign", "false"]);

    fs::write(repo_path.join("test.txt"), "test content").unwrap();
    git(repo_path, &["add", "."]);
    git(repo_path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

#[test]
fn test_clean_repository_status() {
    let repo = init_repo();

    let status = GitProvider::new().status(repo.path()).unwrap().unwrap();

    assert_eq!(status.mode_line, "Git-main");
    assert!(!status.dirty);
    assert_eq!(status.branch_label(), "main");
}

#[test]
fn test_dirty_repository_status() {
    let repo = init_repo();
    git(repo.path(), &["checkout", "-b", "feature-x"]);
    fs::write(repo.path().join("test.txt"), "changed").unwrap();

    let status = GitProvider::new().status(repo.path()).unwrap().unwrap();

    assert_eq!(status.mode_line, "Git:feature-x");
    assert!(status.dirty);
    assert_eq!(status.branch_label(), "feature-x");
}

#[test]
fn test_status_from_subdirectory() {
    let repo = init_repo();
    let nested = repo.path().join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    let status = GitProvider::new().status(&nested).unwrap();
    assert!(status.is_some());
}

#[test]
fn test_project_found_from_nested_path() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("widgets");
    let nested = root.join("src").join("bin");
    fs::create_dir_all(&nested).unwrap();
    fs::write(root.join("Cargo.toml"), "[package]\nname = \"widgets\"\n").unwrap();

    let project = find_project(&nested).unwrap();

    assert_eq!(project.name, "widgets");
    assert_eq!(project.root, root);
}

#[test]
fn test_nearest_marker_wins() {
    let temp_dir = TempDir::new().unwrap();
    let outer = temp_dir.path().join("outer");
    let inner = outer.join("packages").join("inner");
    fs::create_dir_all(&inner).unwrap();
    fs::write(outer.join(".projectile"), "").unwrap();
    fs::write(inner.join("package.json"), "{}").unwrap();

    assert_eq!(find_project(&inner).unwrap().name, "inner");
    assert_eq!(find_project(&outer.join("packages")).unwrap().name, "outer");
}

#[test]
fn test_snapshot_fills_vcs_and_project() {
    let repo = init_repo();
    let buffer = BufferState::new("test.txt", "text-mode").with_flags(true, false);

    let ctx = RenderContext::snapshot(buffer, repo.path(), true);

    assert_eq!(ctx.buffer.modified, "*");
    assert_eq!(ctx.vcs.as_ref().map(VcsStatus::branch_label).as_deref(), Some("main"));
    let dir_name = repo.path().file_name().unwrap().to_str().unwrap();
    assert_eq!(ctx.project.as_deref(), Some(dir_name));
}

#[test]
fn test_snapshot_renders_through_default_layout() {
    let repo = init_repo();
    let mut modeline = Modeline::with_builtins(Config::default()).unwrap();
    let mut engine = ConsoleEngine::new();
    modeline.install(&mut engine, None, None).unwrap();

    let buffer = BufferState::new("test.txt", "text-mode");
    let ctx = RenderContext::snapshot(buffer, repo.path(), false);
    let line = engine.render_plain(&ctx);

    assert!(line.contains("test.txt"));
    assert!(line.ends_with("main \u{f0f6}"));
}

#[test]
fn test_modification_codes() {
    assert_eq!(modification_code(false, false), "-");
    assert_eq!(modification_code(true, false), "*");
    assert_eq!(modification_code(true, true), "%");
    assert_eq!(modification_code(false, true), "%");
}
