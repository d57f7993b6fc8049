//! TCP server configuration node.

/// Configuration for the TCP log-intake server.
#[derive(Debug, PartialEq, Eq)]
pub struct TcpServerConfig {
    /// Whether the TCP server starts at all. Defaults to `true`.
    pub is_enabled: bool,
    /// Listening port. Required on the wire; there is no default.
    pub port: u16,
    /// Service name announced by the server. Defaults to `"LoggerService"`.
    pub service_name: String,
}
