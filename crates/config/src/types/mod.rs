//! Configuration type definitions for the logger server.
//!
//! Responsibilities:
//! - Define the decoded configuration tree: root, TCP server, pipe server.
//!
//! Does NOT handle:
//! - Decoding documents into these types (see the `decode` module).
//! - Copying trees for application code (see the `snapshot` module).
//!
//! Invariants:
//! - Values are immutable once a decoder returns them; the types do not
//!   implement `Clone`, so every copy goes through `Snapshot` explicitly.
//! - Types with a required field (`port`, `pipe_name`) have no `Default`.

mod pipe;
mod root;
mod tcp;

pub use pipe::PipeServerConfig;
pub use root::LoggerServerConfiguration;
pub use tcp::TcpServerConfig;
