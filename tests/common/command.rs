use crate::common::file::{FileSpec, write_file};
use crate::common::read_head;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_groot_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// Repository with `a.txt` committed as "hello" and then as "hello world"
#[fixture]
pub fn two_commit_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir;

    stage_and_commit(dir.path(), "a.txt", "hello", "first");
    stage_and_commit(dir.path(), "a.txt", "hello world", "second");

    dir
}

pub fn run_groot_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("groot").expect("Failed to find groot binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("GROOT_COMMIT_DATE");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn groot_commit(dir: &Path, message: &str) -> Command {
    run_groot_command(dir, &["commit", "-m", message])
}

/// Write `content` to `file_name`, stage it and commit it; returns the new HEAD
pub fn stage_and_commit(dir: &Path, file_name: &str, content: &str, message: &str) -> String {
    write_file(FileSpec::new(dir.join(file_name), content.to_string()));

    run_groot_command(dir, &["add", file_name])
        .assert()
        .success();
    groot_commit(dir, message).assert().success();

    get_head_commit_sha(dir)
}

pub fn get_head_commit_sha(dir: &Path) -> String {
    read_head(dir).trim().to_string()
}

/// Commit ids printed by `log --oneline`, newest first
pub fn log_oneline_shas(dir: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let output = run_groot_command(dir, &["log", "--oneline"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    Ok(stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect())
}
