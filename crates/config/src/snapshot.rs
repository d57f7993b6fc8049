//! Deep-copy snapshots of decoded configuration trees.
//!
//! Responsibilities:
//! - Produce fully independent copies of decoded nodes so application code
//!   never shares mutable state with the live tree.
//!
//! Does NOT handle:
//! - Decoding (see `decode`) or publishing the live tree (see `section`).
//!
//! Invariants:
//! - A snapshot shares no mutable state with its source.
//! - Node types do not implement `Clone`; this trait is the only copying
//!   path, so every deep copy is explicit at the call site.

use crate::types::{LoggerServerConfiguration, PipeServerConfig, TcpServerConfig};

/// Deep copy of a decoded configuration node.
///
/// Implemented once per node type, so the set of copyable nodes is closed
/// at compile time and an "unknown node kind" failure cannot exist.
pub trait Snapshot {
    /// Produce an independent copy of this node and its whole subtree.
    fn snapshot(&self) -> Self;
}

impl Snapshot for TcpServerConfig {
    fn snapshot(&self) -> Self {
        Self {
            is_enabled: self.is_enabled,
            port: self.port,
            service_name: self.service_name.clone(),
        }
    }
}

impl Snapshot for PipeServerConfig {
    fn snapshot(&self) -> Self {
        Self {
            is_enabled: self.is_enabled,
            pipe_name: self.pipe_name.clone(),
            service_name: self.service_name.clone(),
        }
    }
}

impl Snapshot for LoggerServerConfiguration {
    fn snapshot(&self) -> Self {
        Self {
            tcp_server: self.tcp_server.snapshot(),
            pipe_server: self.pipe_server.snapshot(),
        }
    }
}
