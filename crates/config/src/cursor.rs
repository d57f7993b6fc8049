//! Forward-only cursor over an XML configuration document.
//!
//! Responsibilities:
//! - Surface the document as a stream of typed nodes (start, end, trivia).
//! - Materialize element names and attributes as owned, unescaped strings.
//! - Track the cursor's 1-based line/column position for diagnostics.
//!
//! Does NOT handle:
//! - Any schema knowledge (see the `decode` module).
//! - Sourcing the document bytes (the hosting process does that).
//!
//! Invariants:
//! - The cursor only moves forward; decoded nodes never retain it.
//! - Reader-level failures (ill-formed markup, mismatched close tags,
//!   broken attribute syntax) surface as `MalformedStructure`.

use std::fmt;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ConfigError;

/// A 1-based line/column location in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number within the line, starting at 1.
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// An opening element as surfaced by the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    self_closing: bool,
    position: Position,
}

impl Element {
    /// Local tag name (namespace prefixes are not part of the schema).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by name.
    ///
    /// Declared attributes are read through this accessor; attributes the
    /// schema never asks for are simply ignored.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// True for self-closing elements, which cannot contain children.
    pub fn is_empty(&self) -> bool {
        self.self_closing
    }

    /// Where the element's opening tag begins.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// One node surfaced by the cursor.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An opening element. Self-closing elements are surfaced as `Start`
    /// with [`Element::is_empty`] set; no matching `End` follows them.
    Start(Element),
    /// A closing element, carrying its local name.
    End(String),
    /// Text, CDATA, comments, processing instructions, and the XML
    /// declaration: content the schema never sees.
    Trivia,
    /// End of the document.
    Eof,
}

/// Forward-only cursor over a borrowed configuration document.
pub struct Cursor<'a> {
    reader: Reader<&'a [u8]>,
    source: &'a str,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned before the first node of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        let config = reader.config_mut();
        config.trim_text_start = true;
        config.trim_text_end = true;
        Self { reader, source }
    }

    /// The cursor's current location.
    pub fn position(&self) -> Position {
        position_at(self.source, self.reader.buffer_position() as usize)
    }

    /// Advance past the next node and return it.
    pub fn advance(&mut self) -> Result<Node, ConfigError> {
        let position = self.position();
        let event = self
            .reader
            .read_event()
            .map_err(|err| ConfigError::malformed(err.to_string(), position))?;
        Ok(match event {
            Event::Start(start) => Node::Start(to_element(&start, position, false)?),
            Event::Empty(start) => Node::Start(to_element(&start, position, true)?),
            Event::End(end) => Node::End(name_string(end.local_name().as_ref())),
            Event::Eof => Node::Eof,
            _ => Node::Trivia,
        })
    }
}

fn to_element(
    start: &BytesStart<'_>,
    position: Position,
    self_closing: bool,
) -> Result<Element, ConfigError> {
    let name = name_string(start.local_name().as_ref());
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute =
            attribute.map_err(|err| ConfigError::malformed(err.to_string(), position))?;
        let value = attribute
            .unescape_value()
            .map_err(|err| ConfigError::malformed(err.to_string(), position))?;
        attributes.push((
            name_string(attribute.key.local_name().as_ref()),
            value.into_owned(),
        ));
    }
    Ok(Element {
        name,
        attributes,
        self_closing,
        position,
    })
}

fn name_string(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn position_at(source: &str, offset: usize) -> Position {
    let bytes = source.as_bytes();
    let mut offset = offset.min(bytes.len());
    // The reader consumes insignificant whitespace together with the node
    // that follows it; report the node's own location, not the whitespace.
    while offset < bytes.len() && bytes[offset].is_ascii_whitespace() {
        offset += 1;
    }
    let consumed = &bytes[..offset];
    let line = consumed.iter().filter(|byte| **byte == b'\n').count() as u32 + 1;
    let column = match consumed.iter().rposition(|byte| *byte == b'\n') {
        Some(newline) => (offset - newline) as u32,
        None => offset as u32 + 1,
    };
    Position { line, column }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(cursor: &mut Cursor<'_>) -> Element {
        loop {
            match cursor.advance().unwrap() {
                Node::Start(element) => return element,
                Node::Trivia => continue,
                other => panic!("expected a start element, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_start_element_with_attributes() {
        let mut cursor = Cursor::new(r#"<tcpServerConfig port="9000" isEnabled="false"/>"#);
        let element = start(&mut cursor);
        assert_eq!(element.name(), "tcpServerConfig");
        assert!(element.is_empty());
        assert_eq!(element.attribute("port"), Some("9000"));
        assert_eq!(element.attribute("isEnabled"), Some("false"));
        assert_eq!(element.attribute("serviceName"), None);
    }

    #[test]
    fn test_open_element_is_not_empty() {
        let mut cursor = Cursor::new("<root></root>");
        let element = start(&mut cursor);
        assert!(!element.is_empty());
        assert_eq!(cursor.advance().unwrap(), Node::End("root".to_string()));
        assert_eq!(cursor.advance().unwrap(), Node::Eof);
    }

    #[test]
    fn test_declaration_comments_and_whitespace_are_trivia() {
        let document = "<?xml version=\"1.0\"?>\n<!-- config -->\n<root/>";
        let mut cursor = Cursor::new(document);
        assert_eq!(cursor.advance().unwrap(), Node::Trivia);
        assert_eq!(cursor.advance().unwrap(), Node::Trivia);
        assert!(matches!(cursor.advance().unwrap(), Node::Start(_)));
    }

    #[test]
    fn test_attribute_entities_are_unescaped() {
        let mut cursor = Cursor::new(r#"<pipe pipeName="a&amp;b"/>"#);
        let element = start(&mut cursor);
        assert_eq!(element.attribute("pipeName"), Some("a&b"));
    }

    #[test]
    fn test_position_tracks_lines_and_columns() {
        let document = "<root>\n  <child/>\n</root>";
        let mut cursor = Cursor::new(document);
        let root = start(&mut cursor);
        assert_eq!(root.position(), Position { line: 1, column: 1 });
        let child = start(&mut cursor);
        assert_eq!(child.position().line, 2);
    }

    #[test]
    fn test_mismatched_close_tag_is_malformed() {
        let mut cursor = Cursor::new("<root><a></b></root>");
        let _root = start(&mut cursor);
        let _a = start(&mut cursor);
        let result = cursor.advance();
        assert!(matches!(
            result,
            Err(ConfigError::MalformedStructure { .. })
        ));
    }

    #[test]
    fn test_position_display() {
        let position = Position { line: 3, column: 7 };
        assert_eq!(position.to_string(), "line 3, column 7");
    }
}
