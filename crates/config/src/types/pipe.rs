//! Named-pipe server configuration node.

/// Configuration for the named-pipe log-intake server.
#[derive(Debug, PartialEq, Eq)]
pub struct PipeServerConfig {
    /// Whether the pipe server starts at all. Defaults to `true`.
    pub is_enabled: bool,
    /// Pipe name to listen on. Required on the wire; there is no default.
    pub pipe_name: String,
    /// Service name announced by the server. Defaults to `"LoggerService"`.
    pub service_name: String,
}
