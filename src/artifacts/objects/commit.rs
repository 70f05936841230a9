//! Commit object
//!
//! A commit freezes the staging index at the moment it was created. It holds:
//! - The creation timestamp (UTC, millisecond precision)
//! - The commit message
//! - The staged `(path, hash)` entries, in staging order
//! - The id of the previous commit, or `null` for the root commit
//!
//! ## Format
//!
//! Stored as compact JSON, keys in this order:
//! ```text
//! {"timeStamp":"2024-05-01T12:00:00.000Z","message":"...","files":[{"path":"a.txt","hash":"..."}],"parent":null}
//! ```

use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, DurationRound, TimeDelta, Utc};
use std::io::BufRead;

/// Environment variable overriding the commit timestamp (RFC 3339)
pub const COMMIT_DATE_ENV: &str = "GROOT_COMMIT_DATE";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Commit {
    #[serde(rename = "timeStamp", alias = "timestamp", with = "iso_millis")]
    timestamp: DateTime<Utc>,
    message: String,
    files: Vec<IndexEntry>,
    parent: Option<ObjectId>,
}

impl Commit {
    /// Build a commit record
    ///
    /// The timestamp is truncated to whole milliseconds, the precision of the
    /// stored record, so a loaded commit equals the one that was stored.
    pub fn new(
        parent: Option<ObjectId>,
        files: Vec<IndexEntry>,
        message: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Commit {
            timestamp: timestamp
                .duration_trunc(TimeDelta::milliseconds(1))
                .unwrap_or(timestamp),
            message,
            files,
            parent,
        }
    }

    /// Commit time taken from `GROOT_COMMIT_DATE` when set, otherwise now
    pub fn timestamp_from_env() -> anyhow::Result<DateTime<Utc>> {
        let timestamp = match std::env::var(COMMIT_DATE_ENV) {
            Ok(date_str) => DateTime::parse_from_rfc3339(&date_str)
                .with_context(|| format!("{COMMIT_DATE_ENV} is not an RFC 3339 date: {date_str}"))?
                .with_timezone(&Utc),
            Err(_) => Utc::now(),
        };

        Ok(timestamp)
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn files(&self) -> &[IndexEntry] {
        &self.files
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Timestamp exactly as stored, e.g. `2024-05-01T12:00:00.000Z`
    pub fn iso_timestamp(&self) -> String {
        iso_millis::format(&self.timestamp)
    }

    /// First line of the message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or_default().to_string()
    }

    /// First entry staged under `path`
    ///
    /// The index does not deduplicate paths, so a commit may list the same path
    /// more than once; the earliest entry wins.
    pub fn find_file(&self, path: &str) -> Option<&IndexEntry> {
        self.files.iter().find(|entry| entry.path == path)
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content = serde_json::to_vec(self).context("Unable to serialize commit")?;
        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        serde_json::from_reader(reader).context("Unable to parse commit record")
    }
}

impl Object for Commit {}

/// ISO-8601 with exactly three fractional digits and a `Z` suffix
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(timestamp: &DateTime<Utc>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn parse(value: &str) -> anyhow::Result<DateTime<Utc>> {
        Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
    }

    pub fn serialize<S: Serializer>(
        timestamp: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(timestamp))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse(&value).map_err(serde::de::Error::custom)
    }
}
