//! Decode error types.
//!
//! Responsibilities:
//! - Define the single error enum surfaced by every decode operation.
//! - Carry the cursor position at the point of failure for diagnostics.
//!
//! Does NOT handle:
//! - Logging or operator-facing reporting (the hosting process decides how
//!   to surface a failed load).
//!
//! Invariants:
//! - Every failure is unrecoverable for the in-progress decode; there is no
//!   partial recovery or default-substitution on error.
//! - `MissingRequiredElement` reports every missing child name at once.

use thiserror::Error;

use crate::cursor::Position;

/// Errors that can occur while decoding a configuration document.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Wrong node kind where an element was required, or an end tag that
    /// does not match the element being decoded.
    #[error("malformed structure at {position}: {message}")]
    MalformedStructure {
        /// What was expected and what was found instead.
        message: String,
        /// Where the cursor was when the failure was detected.
        position: Position,
    },

    /// A required attribute is absent on the current element.
    #[error("missing required attribute '{attribute}' on <{element}> at {position}")]
    MissingRequiredAttribute {
        /// The absent attribute.
        attribute: String,
        /// The element that should have carried it.
        element: String,
        /// Where the element begins.
        position: Position,
    },

    /// One or more required child elements were never seen by the time the
    /// parent element closed.
    #[error("<{element}> at {position} is missing required child element(s): {}", .missing.join(", "))]
    MissingRequiredElement {
        /// The parent element.
        element: String,
        /// Every missing child name, not just the first.
        missing: Vec<String>,
        /// Where the parent element begins.
        position: Position,
    },

    /// A child element name not recognized by the current node's schema.
    #[error("unknown element <{name}> at {position}")]
    UnknownElement {
        /// The offending element name.
        name: String,
        /// Where the offending element begins.
        position: Position,
    },

    /// A keyed-mapping child repeats a key already inserted.
    #[error("duplicate key '{key}' at {position}")]
    DuplicateKey {
        /// The repeated key, as written in the document.
        key: String,
        /// Where the repeating child begins.
        position: Position,
    },

    /// Attribute or key text could not be converted to its declared type.
    #[error("cannot convert '{raw}' to {target} at {position}")]
    ValueConversionFailure {
        /// The raw text from the document.
        raw: String,
        /// The declared target type name.
        target: &'static str,
        /// Where the carrying element begins.
        position: Position,
    },
}

impl ConfigError {
    /// Shorthand for structural failures.
    pub(crate) fn malformed(message: impl Into<String>, position: Position) -> Self {
        ConfigError::MalformedStructure {
            message: message.into(),
            position,
        }
    }
}
