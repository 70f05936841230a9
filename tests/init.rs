use crate::common::command::{
    init_repository_dir, repository_dir, run_groot_command, stage_and_commit,
};
use crate::common::{groot_path, read_head, read_index};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn new_repository_initiated_with_groot_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_groot_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty groot repository in .+\.groot\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    assert!(groot_path(repository_dir.path()).join("objects").is_dir());
    assert_eq!(read_head(repository_dir.path()), "");
    assert_eq!(read_index(repository_dir.path()), serde_json::json!([]));

    Ok(())
}

#[rstest]
fn init_at_path_creates_missing_directory(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let target = repository_dir.path().join("nested").join("project");

    run_groot_command(repository_dir.path(), &["init", &target.to_string_lossy()])
        .assert()
        .success();

    assert!(groot_path(&target).join("objects").is_dir());
    assert!(groot_path(&target).join("HEAD").is_file());
    assert!(groot_path(&target).join("index").is_file());

    Ok(())
}

#[rstest]
fn reinitializing_keeps_head_and_index(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = stage_and_commit(dir, "a.txt", "hello", "first");
    run_groot_command(dir, &["add", "a.txt"]).assert().success();
    let index_before = read_index(dir);

    run_groot_command(dir, &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    assert_eq!(read_head(dir), head);
    assert_eq!(read_index(dir), index_before);
    assert_eq!(index_before.as_array().map(Vec::len), Some(1));

    Ok(())
}

#[rstest]
fn commands_outside_a_repository_fail(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    for args in [vec!["log"], vec!["commit", "-m", "nothing"], vec!["show", "abcd"]] {
        run_groot_command(repository_dir.path(), &args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a groot repository"));
    }

    assert!(!groot_path(repository_dir.path()).exists());

    Ok(())
}
