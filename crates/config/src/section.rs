//! Live configuration tree and its publishing seam.
//!
//! Responsibilities:
//! - Run the root decoder once per load and publish the decoded tree.
//! - Hand out deep-copy snapshots to application code.
//!
//! Does NOT handle:
//! - Sourcing the document bytes or deciding when to load (the hosting
//!   process does both).
//! - Decode mechanics (see `decode`); the engine itself emits no logs.
//!
//! Invariants:
//! - The published tree is immutable after publish; readers and snapshot
//!   calls are lock-free (atomic pointer swap, never a mutex).
//! - A failed load leaves the previously published tree untouched; a
//!   partial configuration is never surfaced.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::cursor::Cursor;
use crate::decode::decode_root;
use crate::error::ConfigError;
use crate::snapshot::Snapshot;
use crate::types::LoggerServerConfiguration;

/// Decode one configuration document into a tree owned by the caller.
pub fn decode_document(document: &str) -> Result<LoggerServerConfiguration, ConfigError> {
    let mut cursor = Cursor::new(document);
    decode_root(&mut cursor)
}

/// Holder of the live configuration tree.
///
/// The section owns the only long-lived decoded tree in the process; all
/// values exposed to application code are snapshots of it.
pub struct ConfigurationSection {
    live: ArcSwapOption<LoggerServerConfiguration>,
}

impl ConfigurationSection {
    /// An empty section; nothing is published until the first successful
    /// load.
    pub fn new() -> Self {
        Self {
            live: ArcSwapOption::const_empty(),
        }
    }

    /// Decode `document` and publish the resulting tree.
    pub fn load_from_str(&self, document: &str) -> Result<(), ConfigError> {
        tracing::debug!(bytes = document.len(), "decoding configuration document");
        let root = decode_document(document)?;
        tracing::info!(
            tcp_enabled = root.tcp_server.is_enabled,
            tcp_port = root.tcp_server.port,
            pipe_enabled = root.pipe_server.is_enabled,
            pipe_name = %root.pipe_server.pipe_name,
            "configuration loaded"
        );
        self.live.store(Some(Arc::new(root)));
        Ok(())
    }

    /// Deep copy of the currently published tree, or `None` before the
    /// first successful load.
    pub fn snapshot(&self) -> Option<LoggerServerConfiguration> {
        self.live.load_full().map(|live| live.snapshot())
    }
}

impl Default for ConfigurationSection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"<loggerServerConfiguration>
    <tcpServerConfig port="9000"/>
    <pipeServerConfig pipeName="svc"/>
</loggerServerConfiguration>"#;

    #[test]
    fn test_snapshot_is_none_before_first_load() {
        let section = ConfigurationSection::new();
        assert!(section.snapshot().is_none());
    }

    #[test]
    fn test_load_publishes_tree() {
        let section = ConfigurationSection::new();
        section.load_from_str(DOCUMENT).unwrap();
        let snapshot = section.snapshot().unwrap();
        assert_eq!(snapshot.tcp_server.port, 9000);
        assert_eq!(snapshot.pipe_server.pipe_name, "svc");
    }

    #[test]
    fn test_failed_load_keeps_previous_tree() {
        let section = ConfigurationSection::new();
        section.load_from_str(DOCUMENT).unwrap();

        let result = section.load_from_str("<loggerServerConfiguration/>");
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredElement { .. })
        ));

        let snapshot = section.snapshot().unwrap();
        assert_eq!(snapshot.tcp_server.port, 9000);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let section = ConfigurationSection::new();
        section.load_from_str(DOCUMENT).unwrap();

        let mut first = section.snapshot().unwrap();
        first.tcp_server.port = 1;
        first.pipe_server.pipe_name.clear();

        let second = section.snapshot().unwrap();
        assert_eq!(second.tcp_server.port, 9000);
        assert_eq!(second.pipe_server.pipe_name, "svc");
    }
}
