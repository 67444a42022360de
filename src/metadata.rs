//! Node metadata and its display block
//!
//! `NodeMetadata` is the structural snapshot returned alongside a node's payload.
//! `MetadataBlock` is its display form: seven fields in a fixed order, serialized as
//! an indented JSON object that sits beneath the node's line in the tree.

use std::fmt::Display;

use chrono::{Local, TimeZone};
use serde::Serialize;

/// Timestamp layout used when human-readable timestamps are requested.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Field names of a rendered block, in output order.
pub const FIELD_ORDER: [&str; 7] = [
    "dataVersion",
    "childVersion",
    "createdAt",
    "modifiedAt",
    "ephemeralOwner",
    "dataLength",
    "childCount",
];

/// Structural metadata of a single node.
///
/// The all-zero `Default` stands in for nodes whose contents could not be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeMetadata {
    /// Incremented on every payload write
    pub data_version: i32,
    /// Incremented on every change to the child set
    pub child_version: i32,
    /// Creation time, milliseconds since the epoch
    pub created_at: i64,
    /// Last modification time, milliseconds since the epoch
    pub modified_at: i64,
    /// Owning session id for ephemeral nodes, zero otherwise
    pub ephemeral_owner: i64,
    pub data_length: i32,
    pub child_count: i32,
}

impl NodeMetadata {
    pub fn has_children(&self) -> bool {
        self.child_count > 0
    }
}

/// Configuration for the metadata block shown beneath each node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetadataConfig {
    /// Show the metadata block at all
    pub show: bool,
    /// Render timestamps as local date-times instead of raw milliseconds
    pub human_timestamps: bool,
}

impl MetadataConfig {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn shown(human_timestamps: bool) -> Self {
        Self {
            show: true,
            human_timestamps,
        }
    }
}

/// A timestamp field, either raw or already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Formatted(String),
}

/// Display form of `NodeMetadata`.
///
/// Field declaration order is the serialization order and must match `FIELD_ORDER`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataBlock {
    pub data_version: i32,
    pub child_version: i32,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
    pub ephemeral_owner: i64,
    pub data_length: i32,
    pub child_count: i32,
}

impl MetadataBlock {
    /// Build a block, formatting timestamps in the local time zone when requested.
    pub fn from_metadata(metadata: &NodeMetadata, human_timestamps: bool) -> Self {
        Self::from_metadata_in(metadata, human_timestamps, &Local)
    }

    /// Build a block, formatting timestamps in the given time zone when requested.
    pub fn from_metadata_in<Tz>(metadata: &NodeMetadata, human_timestamps: bool, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let timestamp = |millis: i64| {
            if human_timestamps {
                Timestamp::Formatted(format_timestamp(millis, tz))
            } else {
                Timestamp::Millis(millis)
            }
        };

        Self {
            data_version: metadata.data_version,
            child_version: metadata.child_version,
            created_at: timestamp(metadata.created_at),
            modified_at: timestamp(metadata.modified_at),
            ephemeral_owner: metadata.ephemeral_owner,
            data_length: metadata.data_length,
            child_count: metadata.child_count,
        }
    }

    /// Serialize as a multi-line JSON object with `prefix` in front of every line.
    pub fn render(&self, prefix: &str) -> serde_json::Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json
            .lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Format a millisecond timestamp with second precision.
///
/// Milliseconds are truncated toward zero before conversion. Timestamps outside
/// chrono's range fall back to the raw millisecond value.
pub fn format_timestamp<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match tz.timestamp_opt(millis / 1000, 0).single() {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => millis.to_string(),
    }
}
