//! Recursive-descent decoders for the configuration node types.
//!
//! Responsibilities:
//! - One decoder per node type: read declared attributes, loop over
//!   children through the node's slot table, freeze the builder.
//!
//! Does NOT handle:
//! - The traversal mechanics themselves (see the driver in `decode`).
//!
//! Invariants:
//! - Builders are mutable only inside their decode call; the public types
//!   are constructed whole on success and never observed partially built.
//! - Required attributes fail before any child of the element is read.

use crate::constants::{DEFAULT_IS_ENABLED, DEFAULT_SERVICE_NAME, wire};
use crate::cursor::{Cursor, Element};
use crate::decode::{
    ChildSlot, decode_children, expect_start, missing_required, optional_attr, required_attr,
};
use crate::error::ConfigError;
use crate::types::{LoggerServerConfiguration, PipeServerConfig, TcpServerConfig};

/// Decode a whole `loggerServerConfiguration` tree starting at the
/// cursor's current position.
pub fn decode_root(cursor: &mut Cursor<'_>) -> Result<LoggerServerConfiguration, ConfigError> {
    let element = expect_start(cursor, Some(wire::ROOT))?;
    decode_root_at(cursor, element)
}

/// Seen-set for the root's child slots: one `Option` per slot, populated
/// by the slot's decoder.
#[derive(Default)]
struct RootBuilder {
    tcp_server: Option<TcpServerConfig>,
    pipe_server: Option<PipeServerConfig>,
}

impl RootBuilder {
    /// Freeze into the immutable root, reporting every required child
    /// never seen by the time the element closed.
    fn freeze(self, element: &Element) -> Result<LoggerServerConfiguration, ConfigError> {
        match (self.tcp_server, self.pipe_server) {
            (Some(tcp_server), Some(pipe_server)) => Ok(LoggerServerConfiguration {
                tcp_server,
                pipe_server,
            }),
            (tcp_server, pipe_server) => {
                let mut missing = Vec::new();
                if tcp_server.is_none() {
                    missing.push(wire::TCP_SERVER);
                }
                if pipe_server.is_none() {
                    missing.push(wire::PIPE_SERVER);
                }
                Err(missing_required(element, missing))
            }
        }
    }
}

const ROOT_SLOTS: &[ChildSlot<RootBuilder>] = &[
    ChildSlot {
        name: wire::TCP_SERVER,
        decode: decode_tcp_slot,
    },
    ChildSlot {
        name: wire::PIPE_SERVER,
        decode: decode_pipe_slot,
    },
];

fn decode_tcp_slot(
    cursor: &mut Cursor<'_>,
    element: Element,
    builder: &mut RootBuilder,
) -> Result<(), ConfigError> {
    builder.tcp_server = Some(decode_tcp_at(cursor, element)?);
    Ok(())
}

fn decode_pipe_slot(
    cursor: &mut Cursor<'_>,
    element: Element,
    builder: &mut RootBuilder,
) -> Result<(), ConfigError> {
    builder.pipe_server = Some(decode_pipe_at(cursor, element)?);
    Ok(())
}

fn decode_root_at(
    cursor: &mut Cursor<'_>,
    element: Element,
) -> Result<LoggerServerConfiguration, ConfigError> {
    let mut builder = RootBuilder::default();
    decode_children(cursor, &element, ROOT_SLOTS, &mut builder)?;
    builder.freeze(&element)
}

/// Optional attributes start at their defaults and are overwritten when
/// present.
struct TcpServerBuilder {
    is_enabled: bool,
    service_name: String,
}

impl Default for TcpServerBuilder {
    fn default() -> Self {
        Self {
            is_enabled: DEFAULT_IS_ENABLED,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

impl TcpServerBuilder {
    fn freeze(self, port: u16) -> TcpServerConfig {
        TcpServerConfig {
            is_enabled: self.is_enabled,
            port,
            service_name: self.service_name,
        }
    }
}

// No declared children; every child element is rejected.
const TCP_SLOTS: &[ChildSlot<TcpServerBuilder>] = &[];

fn decode_tcp_at(cursor: &mut Cursor<'_>, element: Element) -> Result<TcpServerConfig, ConfigError> {
    let mut builder = TcpServerBuilder::default();
    if let Some(enabled) = optional_attr(&element, wire::IS_ENABLED)? {
        builder.is_enabled = enabled;
    }
    let port = required_attr(&element, wire::PORT)?;
    if let Some(name) = optional_attr(&element, wire::SERVICE_NAME)? {
        builder.service_name = name;
    }
    decode_children(cursor, &element, TCP_SLOTS, &mut builder)?;
    Ok(builder.freeze(port))
}

struct PipeServerBuilder {
    is_enabled: bool,
    service_name: String,
}

impl Default for PipeServerBuilder {
    fn default() -> Self {
        Self {
            is_enabled: DEFAULT_IS_ENABLED,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

impl PipeServerBuilder {
    fn freeze(self, pipe_name: String) -> PipeServerConfig {
        PipeServerConfig {
            is_enabled: self.is_enabled,
            pipe_name,
            service_name: self.service_name,
        }
    }
}

const PIPE_SLOTS: &[ChildSlot<PipeServerBuilder>] = &[];

fn decode_pipe_at(
    cursor: &mut Cursor<'_>,
    element: Element,
) -> Result<PipeServerConfig, ConfigError> {
    let mut builder = PipeServerBuilder::default();
    if let Some(enabled) = optional_attr(&element, wire::IS_ENABLED)? {
        builder.is_enabled = enabled;
    }
    let pipe_name: String = required_attr(&element, wire::PIPE_NAME)?;
    if let Some(name) = optional_attr(&element, wire::SERVICE_NAME)? {
        builder.service_name = name;
    }
    decode_children(cursor, &element, PIPE_SLOTS, &mut builder)?;
    Ok(builder.freeze(pipe_name))
}
