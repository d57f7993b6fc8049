//! Schema-driven streaming decode engine.
//!
//! Responsibilities:
//! - Drive the recursive-descent decode of one element: structural check,
//!   attributes, children dispatch, required-slot validation.
//! - Provide the generic container and leaf decoders built on the same
//!   children loop.
//!
//! Does NOT handle:
//! - Tokenizing the document (see `cursor`).
//! - Primitive text parsing (see `convert`).
//!
//! Invariants:
//! - A decoder leaves the cursor immediately after its element's closing
//!   tag (or after the element itself when self-closing).
//! - The children loop terminates only on the end tag whose name matches
//!   the element's own tag; any other end tag means a child decoder
//!   mis-consumed and is a structural failure, never silent drift.
//! - Failure is all-or-nothing for the subtree being decoded; no partial
//!   node is ever returned.

mod containers;
mod leaf;
mod nodes;

#[cfg(test)]
mod tests;

pub use containers::{decode_keyed_map, decode_sequence};
pub use leaf::decode_simple_value;
pub use nodes::decode_root;

use crate::convert::{FromConfigText, convert};
use crate::cursor::{Cursor, Element, Node};
use crate::error::ConfigError;

/// A declared child slot: an element name and the decoder dispatched when
/// that name is seen. A node type's slot table is its child schema,
/// resolved by lookup instead of per-call name switches.
pub(crate) struct ChildSlot<B> {
    pub name: &'static str,
    pub decode: fn(&mut Cursor<'_>, Element, &mut B) -> Result<(), ConfigError>,
}

/// Skip leading trivia and require a start element, optionally checking
/// its tag name.
pub(crate) fn expect_start(
    cursor: &mut Cursor<'_>,
    expected: Option<&str>,
) -> Result<Element, ConfigError> {
    loop {
        match cursor.advance()? {
            Node::Trivia => continue,
            Node::Start(element) => {
                if let Some(tag) = expected {
                    if element.name() != tag {
                        return Err(ConfigError::malformed(
                            format!("expected <{}>, found <{}>", tag, element.name()),
                            element.position(),
                        ));
                    }
                }
                return Ok(element);
            }
            Node::End(name) => {
                return Err(ConfigError::malformed(
                    format!("expected an element, found closing tag </{}>", name),
                    cursor.position(),
                ));
            }
            Node::Eof => {
                return Err(ConfigError::malformed(
                    "expected an element, found end of document",
                    cursor.position(),
                ));
            }
        }
    }
}

/// Read a required attribute, converted to its declared type.
///
/// Absence fails immediately, before any child of the element is read.
pub(crate) fn required_attr<T: FromConfigText>(
    element: &Element,
    name: &str,
) -> Result<T, ConfigError> {
    match element.attribute(name) {
        Some(raw) => convert(raw, element.position()),
        None => Err(ConfigError::MissingRequiredAttribute {
            attribute: name.to_string(),
            element: element.name().to_string(),
            position: element.position(),
        }),
    }
}

/// Read an optional attribute; `None` means "keep the default".
pub(crate) fn optional_attr<T: FromConfigText>(
    element: &Element,
    name: &str,
) -> Result<Option<T>, ConfigError> {
    match element.attribute(name) {
        Some(raw) => convert(raw, element.position()).map(Some),
        None => Ok(None),
    }
}

/// The children loop: skip trivia, dispatch declared names through the
/// slot table, reject everything else, and stop at the element's own end
/// tag. Self-closing elements have no children and return immediately.
pub(crate) fn decode_children<B>(
    cursor: &mut Cursor<'_>,
    element: &Element,
    slots: &[ChildSlot<B>],
    builder: &mut B,
) -> Result<(), ConfigError> {
    if element.is_empty() {
        return Ok(());
    }
    loop {
        match cursor.advance()? {
            Node::Trivia => continue,
            Node::End(name) if name == element.name() => return Ok(()),
            Node::End(name) => return Err(mismatched_end_tag(element, &name, cursor)),
            Node::Eof => return Err(unclosed_element(element, cursor)),
            Node::Start(child) => {
                match slots.iter().find(|slot| slot.name == child.name()) {
                    Some(slot) => (slot.decode)(cursor, child, builder)?,
                    // This also rejects the reserved <add key="..."> extension
                    // entries: they are structurally recognized at every node,
                    // but no node type registers a key for them.
                    None => {
                        return Err(ConfigError::UnknownElement {
                            name: child.name().to_string(),
                            position: child.position(),
                        });
                    }
                }
            }
        }
    }
}

/// Report every required child slot never seen before the element closed.
pub(crate) fn missing_required(element: &Element, missing: Vec<&'static str>) -> ConfigError {
    ConfigError::MissingRequiredElement {
        element: element.name().to_string(),
        missing: missing.into_iter().map(str::to_string).collect(),
        position: element.position(),
    }
}

pub(crate) fn mismatched_end_tag(
    element: &Element,
    found: &str,
    cursor: &Cursor<'_>,
) -> ConfigError {
    ConfigError::malformed(
        format!("expected </{}>, found </{}>", element.name(), found),
        cursor.position(),
    )
}

pub(crate) fn unclosed_element(element: &Element, cursor: &Cursor<'_>) -> ConfigError {
    ConfigError::malformed(
        format!("<{}> is never closed", element.name()),
        cursor.position(),
    )
}
