//! Diffing
//!
//! - `line_diff`: Myers' diff over lines, grouped into unchanged/added/removed segments
//! - `commit_diff`: resolves a commit's files against its parent and diffs matching paths

pub mod commit_diff;
pub mod line_diff;
