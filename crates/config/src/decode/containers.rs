//! Container decoders: ordered sequences and keyed mappings.
//!
//! Responsibilities:
//! - Decode repeated homogeneous child elements into a `Vec` (document
//!   order) or a uniquely-keyed `HashMap`.
//! - Delegate each item to a caller-supplied element decoder.
//!
//! Invariants:
//! - An empty container element is an empty collection, not an error.
//! - A repeated mapping key is a hard error, never a silent overwrite or
//!   merge.

use std::collections::HashMap;
use std::hash::Hash;

use crate::constants::wire;
use crate::convert::{FromConfigText, convert};
use crate::cursor::{Cursor, Element, Node};
use crate::decode::{mismatched_end_tag, unclosed_element};
use crate::error::ConfigError;

/// Decode zero or more homogeneous children of `element` into a sequence
/// preserving document order.
///
/// When `expected_item` is given, a child with any other name fails with
/// `UnknownElement`. Each matching child is handed to `decode_item`, which
/// must consume the child's whole subtree.
pub fn decode_sequence<'a, T, F>(
    cursor: &mut Cursor<'a>,
    element: &Element,
    expected_item: Option<&str>,
    mut decode_item: F,
) -> Result<Vec<T>, ConfigError>
where
    F: FnMut(&mut Cursor<'a>, Element) -> Result<T, ConfigError>,
{
    let mut items = Vec::new();
    if element.is_empty() {
        return Ok(items);
    }
    loop {
        match cursor.advance()? {
            Node::Trivia => continue,
            Node::End(name) if name == element.name() => return Ok(items),
            Node::End(name) => return Err(mismatched_end_tag(element, &name, cursor)),
            Node::Eof => return Err(unclosed_element(element, cursor)),
            Node::Start(child) => {
                if let Some(expected) = expected_item {
                    if child.name() != expected {
                        return Err(ConfigError::UnknownElement {
                            name: child.name().to_string(),
                            position: child.position(),
                        });
                    }
                }
                items.push(decode_item(cursor, child)?);
            }
        }
    }
}

/// Decode repeated `key`-attributed children of `element` into a uniquely
/// keyed mapping.
///
/// Every child must carry a `key` attribute, converted to `K` through the
/// conversion seam. Insertion order is not significant; a repeated key
/// fails with `DuplicateKey`.
pub fn decode_keyed_map<'a, K, T, F>(
    cursor: &mut Cursor<'a>,
    element: &Element,
    expected_item: Option<&str>,
    mut decode_item: F,
) -> Result<HashMap<K, T>, ConfigError>
where
    K: FromConfigText + Eq + Hash,
    F: FnMut(&mut Cursor<'a>, Element) -> Result<T, ConfigError>,
{
    let mut entries = HashMap::new();
    if element.is_empty() {
        return Ok(entries);
    }
    loop {
        match cursor.advance()? {
            Node::Trivia => continue,
            Node::End(name) if name == element.name() => return Ok(entries),
            Node::End(name) => return Err(mismatched_end_tag(element, &name, cursor)),
            Node::Eof => return Err(unclosed_element(element, cursor)),
            Node::Start(child) => {
                if let Some(expected) = expected_item {
                    if child.name() != expected {
                        return Err(ConfigError::UnknownElement {
                            name: child.name().to_string(),
                            position: child.position(),
                        });
                    }
                }
                let raw_key = child.attribute(wire::KEY).ok_or_else(|| {
                    ConfigError::MissingRequiredAttribute {
                        attribute: wire::KEY.to_string(),
                        element: child.name().to_string(),
                        position: child.position(),
                    }
                })?;
                let key: K = convert(raw_key, child.position())?;
                if entries.contains_key(&key) {
                    return Err(ConfigError::DuplicateKey {
                        key: raw_key.to_string(),
                        position: child.position(),
                    });
                }
                let value = decode_item(cursor, child)?;
                entries.insert(key, value);
            }
        }
    }
}
