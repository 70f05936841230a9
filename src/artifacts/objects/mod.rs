//! Object types stored in the object database
//!
//! Every object is identified by the SHA-1 of its stored bytes. There are two kinds:
//!
//! - **Blob**: raw file content, stored verbatim
//! - **Commit**: a JSON snapshot of the staging index plus a timestamp, message and parent link
//!
//! Nothing on disk tells the two apart; readers know which one they expect.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Shortest prefix accepted when resolving an abbreviated object id
pub const MIN_PREFIX_LENGTH: usize = 4;

/// Length of the abbreviated form printed by `log --oneline` and `commit`
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
