//! Staging entry
//!
//! One staged file: the path it was added under and the id of the blob holding
//! its content at that moment. The same record type is embedded in commits as
//! their `files` list.

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct IndexEntry {
    /// Path relative to the repository root, `/`-separated
    pub path: String,
    /// Blob id of the staged content
    pub hash: ObjectId,
}
