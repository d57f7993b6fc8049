//! Simple-value leaf decoder.

use crate::constants::wire;
use crate::convert::{FromConfigText, convert};
use crate::cursor::{Cursor, Element, Node};
use crate::decode::{mismatched_end_tag, unclosed_element};
use crate::error::ConfigError;

/// Decode an element that must carry exactly one `value` attribute and no
/// child elements into a scalar.
///
/// Nested elements under a simple-value leaf are rejected, never ignored.
pub fn decode_simple_value<T: FromConfigText>(
    cursor: &mut Cursor<'_>,
    element: &Element,
) -> Result<T, ConfigError> {
    let raw = element
        .attribute(wire::VALUE)
        .ok_or_else(|| ConfigError::MissingRequiredAttribute {
            attribute: wire::VALUE.to_string(),
            element: element.name().to_string(),
            position: element.position(),
        })?;
    let value = convert(raw, element.position())?;
    if element.is_empty() {
        return Ok(value);
    }
    loop {
        match cursor.advance()? {
            Node::Trivia => continue,
            Node::End(name) if name == element.name() => return Ok(value),
            Node::End(name) => return Err(mismatched_end_tag(element, &name, cursor)),
            Node::Eof => return Err(unclosed_element(element, cursor)),
            Node::Start(child) => {
                return Err(ConfigError::malformed(
                    format!(
                        "<{}> is a simple value and cannot contain <{}>",
                        element.name(),
                        child.name()
                    ),
                    child.position(),
                ));
            }
        }
    }
}
