#![allow(dead_code)]

pub mod command;
pub mod file;

use std::path::Path;

pub const REPOSITORY_DIR: &str = ".groot";

pub fn groot_path(dir: &Path) -> std::path::PathBuf {
    dir.join(REPOSITORY_DIR)
}

pub fn read_head(dir: &Path) -> String {
    std::fs::read_to_string(groot_path(dir).join("HEAD")).expect("Failed to read HEAD")
}

pub fn read_index(dir: &Path) -> serde_json::Value {
    let content =
        std::fs::read_to_string(groot_path(dir).join("index")).expect("Failed to read index");
    serde_json::from_str(&content).expect("Index is not valid JSON")
}

pub fn read_object(dir: &Path, oid: &str) -> Vec<u8> {
    std::fs::read(groot_path(dir).join("objects").join(oid))
        .unwrap_or_else(|e| panic!("Failed to read object {}: {}", oid, e))
}

pub fn read_commit(dir: &Path, oid: &str) -> serde_json::Value {
    serde_json::from_slice(&read_object(dir, oid)).expect("Commit object is not valid JSON")
}
