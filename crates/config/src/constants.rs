//! Centralized constants for the logger server configuration schema.
//!
//! This module contains the wire-contract names and default values used by
//! the decoders to avoid magic string/number duplication.

/// Wire-contract element and attribute names.
///
/// These are the actual on-the-wire contract and must stay bit-exact for
/// compatibility with existing configuration documents.
pub mod wire {
    /// Root configuration element.
    pub const ROOT: &str = "loggerServerConfiguration";

    /// TCP server configuration element.
    pub const TCP_SERVER: &str = "tcpServerConfig";

    /// Named-pipe server configuration element.
    pub const PIPE_SERVER: &str = "pipeServerConfig";

    /// Generic keyed extension element, recognized at every node.
    pub const EXTENSION: &str = "add";

    /// Enablement flag attribute.
    pub const IS_ENABLED: &str = "isEnabled";

    /// TCP listening port attribute.
    pub const PORT: &str = "port";

    /// Pipe name attribute.
    pub const PIPE_NAME: &str = "pipeName";

    /// Service name attribute.
    pub const SERVICE_NAME: &str = "serviceName";

    /// Key attribute of keyed-mapping children and extension entries.
    pub const KEY: &str = "key";

    /// Value attribute of simple-value leaf elements.
    pub const VALUE: &str = "value";
}

// =============================================================================
// Schema Defaults
// =============================================================================

/// Default service name for both the TCP and pipe servers.
pub const DEFAULT_SERVICE_NAME: &str = "LoggerService";

/// Servers are enabled unless the document says otherwise.
pub const DEFAULT_IS_ENABLED: bool = true;
