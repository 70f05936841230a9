//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `database`: Object database for storing blobs and commits
//! - `index`: Staging area for files waiting to be committed
//! - `refs`: The `HEAD` pointer to the latest commit
//! - `repository`: High-level repository handle and coordination
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
