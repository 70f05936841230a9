//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `commit`: Create a new commit
//! - `log`: Show commit history
//! - `show`: Show a commit's files and their diff against its parent

pub mod add;
pub mod commit;
pub mod init;
pub mod log;
pub mod show;
