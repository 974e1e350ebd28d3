//! Output formats for parsed trees
//!
//! This module contains the format implementations for serializing parsed
//! program trees: a one-line-per-node treeviz rendering for quick visual
//! scanning, and an owned snapshot mirror for JSON output.

pub mod snapshot;
pub mod treeviz;

pub use snapshot::{snapshot_from_node, to_json_str, NodeKind, TreeSnapshot};
pub use treeviz::to_treeviz_str;
