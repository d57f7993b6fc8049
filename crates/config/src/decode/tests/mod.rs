//! Tests for the streaming decode engine.
//!
//! Responsibilities:
//! - Test the happy path and default handling (basic_tests).
//! - Test every failure mode of the schema (validation_tests).
//! - Test the container decoders against a synthetic schema, since the
//!   shipped schema declares no containers (container_tests).
//!
//! Does NOT handle:
//! - Cursor mechanics (tested in `cursor`).
//! - Primitive conversions (tested in `convert`).
//! - Snapshot and publishing behavior (tested in `snapshot` / `section`).

pub mod basic_tests;

use crate::cursor::Cursor;
use crate::error::ConfigError;
use crate::types::LoggerServerConfiguration;

/// Decode a document from a fresh cursor.
pub fn decode(document: &str) -> Result<LoggerServerConfiguration, ConfigError> {
    let mut cursor = Cursor::new(document);
    super::decode_root(&mut cursor)
}
