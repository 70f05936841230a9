//! Data structures and algorithms
//!
//! - `core`: Terminal output (pager wrapper)
//! - `diff`: Line diff and commit-against-parent comparison
//! - `index`: Staging entries
//! - `log`: Commit history traversal
//! - `objects`: Object types (blob, commit) and their ids

pub mod core;
pub mod diff;
pub mod index;
pub mod log;
pub mod objects;
