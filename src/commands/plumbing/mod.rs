//! Plumbing commands (low-level object store access)
//!
//! - `hash_object`: Compute a file's object id, optionally storing it
//! - `cat_file`: Print the raw content of an object

pub mod cat_file;
pub mod hash_object;
