//! Staging index data structures
//!
//! - `index_entry`: a single `(path, hash)` pair waiting for the next commit

pub mod index_entry;
