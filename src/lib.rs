//! groot: a minimal content-addressable version control engine
//!
//! File snapshots and commit records live side by side in a flat object
//! store keyed by their SHA-1. A staging index accumulates `(path, hash)`
//! entries until `commit` freezes them into a parent-linked record and moves
//! `HEAD`. History is walked lazily from `HEAD`, and any commit can be shown
//! as a line diff against its parent.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

/// Name of the hidden repository directory
pub const REPOSITORY_DIR: &str = ".groot";
