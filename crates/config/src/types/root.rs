//! Root of the decoded configuration tree.

use crate::types::{PipeServerConfig, TcpServerConfig};

/// The fully decoded configuration tree.
///
/// Both children are guaranteed present: a document missing either never
/// decodes successfully.
#[derive(Debug, PartialEq, Eq)]
pub struct LoggerServerConfiguration {
    /// TCP server settings.
    pub tcp_server: TcpServerConfig,
    /// Named-pipe server settings.
    pub pipe_server: PipeServerConfig,
}
