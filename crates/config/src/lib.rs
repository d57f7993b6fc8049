//! Configuration loading for the logger server.
//!
//! This crate decodes the server's XML configuration document
//! (`loggerServerConfiguration`) into strongly-typed values using a
//! streaming, forward-only cursor, validates required attributes and child
//! elements as it goes, and publishes the decoded tree so application code
//! only ever sees independent snapshots of it.

pub mod constants;
mod convert;
mod cursor;
mod decode;
mod error;
mod section;
mod snapshot;
pub mod types;

pub use convert::FromConfigText;
pub use cursor::{Cursor, Element, Node, Position};
pub use decode::{decode_keyed_map, decode_root, decode_sequence, decode_simple_value};
pub use error::ConfigError;
pub use section::{ConfigurationSection, decode_document};
pub use snapshot::Snapshot;
pub use types::{LoggerServerConfiguration, PipeServerConfig, TcpServerConfig};
