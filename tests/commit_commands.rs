use crate::common::command::{
    groot_commit, init_repository_dir, repository_dir, run_groot_command, stage_and_commit,
};
use crate::common::file::{FileSpec, write_file};
use crate::common::{groot_path, read_commit, read_head, read_index, read_object};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;
use serde_json::json;
use sha1::{Digest, Sha1};

mod common;

#[rstest]
fn first_commit_has_no_parent(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    run_groot_command(dir, &["add", "a.txt"]).assert().success();

    let output = groot_commit(dir, "first")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[\(root-commit\) [0-9a-f]{7}\] first\n$")?);
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let head = read_head(dir);
    assert_eq!(head.len(), 40);
    assert!(stdout.contains(&head[..7]));

    let commit = read_commit(dir, &head);
    assert_eq!(commit["parent"], serde_json::Value::Null);
    assert_eq!(commit["message"], "first");
    assert_eq!(
        commit["files"],
        json!([{ "path": "a.txt", "hash": "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d" }])
    );
    assert_eq!(read_index(dir), json!([]));

    Ok(())
}

#[rstest]
fn commit_id_is_the_hash_of_the_stored_record(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = stage_and_commit(dir, "a.txt", "hello", "first");

    let mut hasher = Sha1::new();
    hasher.update(read_object(dir, &head));

    assert_eq!(format!("{:x}", hasher.finalize()), head);

    Ok(())
}

#[rstest]
fn second_commit_links_to_the_first(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = stage_and_commit(dir, "a.txt", "hello", "first");

    write_file(FileSpec::new(dir.join("a.txt"), "hello world".to_string()));
    run_groot_command(dir, &["add", "a.txt"]).assert().success();
    groot_commit(dir, "second")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[[0-9a-f]{7}\] second\n$")?);

    let second = read_head(dir);
    assert_ne!(first, second);
    assert_eq!(read_commit(dir, &second)["parent"], json!(first));

    Ok(())
}

#[rstest]
fn committing_an_empty_index_records_no_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    groot_commit(dir, "nothing staged").assert().success();

    let commit = read_commit(dir, &read_head(dir));
    assert_eq!(commit["files"], json!([]));

    Ok(())
}

#[rstest]
fn commit_timestamp_is_iso_8601_with_milliseconds(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let head = stage_and_commit(dir, "a.txt", "hello", "first");

    let timestamp = read_commit(dir, &head)["timeStamp"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    assert!(
        predicate::str::is_match(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z$")?
            .eval(timestamp.as_str()),
        "unexpected timestamp {timestamp}"
    );

    Ok(())
}

#[rstest]
fn identical_history_with_fixed_date_yields_identical_commit_ids(
    #[from(repository_dir)] left: TempDir,
    #[from(repository_dir)] right: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut heads = Vec::new();

    for dir in [left.path(), right.path()] {
        run_groot_command(dir, &["init"]).assert().success();
        write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
        run_groot_command(dir, &["add", "a.txt"]).assert().success();
        groot_commit(dir, "first")
            .env("GROOT_COMMIT_DATE", "2024-01-02T03:04:05Z")
            .assert()
            .success();

        heads.push(read_head(dir));
    }

    assert_eq!(heads[0], heads[1]);
    assert_eq!(
        read_commit(left.path(), &heads[0])["timeStamp"],
        "2024-01-02T03:04:05.000Z"
    );

    Ok(())
}

#[rstest]
fn invalid_commit_date_aborts_without_mutation(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    run_groot_command(dir, &["add", "a.txt"]).assert().success();
    let index_before = read_index(dir);

    groot_commit(dir, "first")
        .env("GROOT_COMMIT_DATE", "yesterday")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GROOT_COMMIT_DATE"));

    assert_eq!(read_head(dir), "");
    assert_eq!(read_index(dir), index_before);

    Ok(())
}

#[rstest]
fn unreadable_index_aborts_commit_without_mutation(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    stage_and_commit(dir, "a.txt", "hello", "first");
    let head_before = read_head(dir);
    let objects_dir = groot_path(dir).join("objects");
    let objects_before = std::fs::read_dir(&objects_dir)?.count();

    std::fs::write(groot_path(dir).join("index"), "{not json")?;

    groot_commit(dir, "x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt index file"));

    assert_eq!(read_head(dir), head_before);
    assert_eq!(std::fs::read_dir(&objects_dir)?.count(), objects_before);

    Ok(())
}

#[rstest]
fn unreadable_index_on_first_commit_leaves_head_empty(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    std::fs::write(groot_path(dir).join("index"), "{not json")?;

    groot_commit(dir, "x").assert().failure();

    assert_eq!(read_head(dir), "");
    assert_eq!(std::fs::read_dir(groot_path(dir).join("objects"))?.count(), 0);

    Ok(())
}
