//! Command implementations
//!
//! Commands are methods on `Repository`, split the same way git splits them:
//!
//! - `plumbing`: direct object store access (hash-object, cat-file)
//! - `porcelain`: the version control workflow (init, add, commit, log, show)

pub mod plumbing;
pub mod porcelain;
