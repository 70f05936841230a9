//! Commit history traversal
//!
//! - `rev_list`: lazy walk from `HEAD` back to the root commit

pub mod rev_list;
