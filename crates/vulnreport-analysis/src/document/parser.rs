//! quick-xml event stream → owned [`XmlElement`] tree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use vulnreport_core::errors::ParseError;

use super::element::XmlElement;

/// A parsed document with exactly one root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    /// Parse raw bytes. The document must be UTF-8.
    pub fn parse_bytes(input: &[u8]) -> Result<Self, ParseError> {
        let text = std::str::from_utf8(input).map_err(|_| ParseError::InvalidUtf8)?;
        Self::parse(text)
    }

    /// Parse a complete document. Fails on malformed markup, unclosed
    /// elements, a missing root, or more than one root.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        let mut reader = Reader::from_str(input);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let event = reader.read_event().map_err(|e| ParseError::Malformed {
                position: reader.error_position() as u64,
                message: e.to_string(),
            })?;
            match event {
                Event::Start(start) => {
                    let element = open_element(&start, &reader)?;
                    if stack.is_empty() {
                        ensure_single_root(&root, &element)?;
                    }
                    stack.push(element);
                }
                Event::Empty(start) => {
                    let element = open_element(&start, &reader)?;
                    close_element(element, &mut stack, &mut root)?;
                }
                Event::End(_) => {
                    // quick-xml has already checked that the end tag matches.
                    let element = stack.pop().ok_or_else(|| malformed(&reader, "unmatched end tag"))?;
                    close_element(element, &mut stack, &mut root)?;
                }
                Event::Text(text) => {
                    let value = text.unescape().map_err(|e| malformed(&reader, &e.to_string()))?;
                    append_text(&mut stack, &value, &reader)?;
                }
                Event::CData(data) => {
                    let raw = data.into_inner();
                    append_text(&mut stack, &String::from_utf8_lossy(&raw), &reader)?;
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions and doctypes
                // carry nothing the extractor reads.
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(ParseError::UnexpectedEof {
                open_element: open.name.clone(),
            });
        }
        root.map(|root| Self { root }).ok_or(ParseError::NoRootElement)
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }
}

fn malformed(reader: &Reader<&[u8]>, message: &str) -> ParseError {
    ParseError::Malformed {
        position: reader.buffer_position() as u64,
        message: message.to_string(),
    }
}

fn open_element(start: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<XmlElement, ParseError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|_| ParseError::InvalidUtf8)?
        .to_string();
    let mut element = XmlElement::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| malformed(reader, &e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|_| ParseError::InvalidUtf8)?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| malformed(reader, &e.to_string()))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn ensure_single_root(root: &Option<XmlElement>, next: &XmlElement) -> Result<(), ParseError> {
    match root {
        Some(_) => Err(ParseError::MultipleRoots {
            name: next.name.clone(),
        }),
        None => Ok(()),
    }
}

fn close_element(
    element: XmlElement,
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(parent) => {
            // Indentation before the first child is layout, not content.
            if parent.children.is_empty() && parent.text.trim().is_empty() {
                parent.text.clear();
            }
            parent.children.push(element);
            Ok(())
        }
        None => {
            ensure_single_root(root, &element)?;
            *root = Some(element);
            Ok(())
        }
    }
}

/// Character data is kept byte for byte, except whitespace-only runs that
/// follow a child element.
fn append_text(stack: &mut [XmlElement], value: &str, reader: &Reader<&[u8]>) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(current) if !current.children.is_empty() && value.trim().is_empty() => Ok(()),
        Some(current) => {
            current.text.push_str(value);
            Ok(())
        }
        None if value.trim().is_empty() => Ok(()),
        None => Err(malformed(reader, "character data outside the root element")),
    }
}
