// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flumen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flumen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::model::{Document, Element};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlReadError {
    Syntax { position: u64, message: String },
    Attribute { position: u64, message: String },
    UnclosedElement { name: String },
}

impl fmt::Display for XmlReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { position, message } => {
                write!(f, "malformed XML at byte {position}: {message}")
            }
            Self::Attribute { position, message } => {
                write!(f, "malformed attribute at byte {position}: {message}")
            }
            Self::UnclosedElement { name } => {
                write!(f, "element '{name}' is never closed")
            }
        }
    }
}

impl std::error::Error for XmlReadError {}

fn element_from_start(start: &BytesStart, position: u64) -> Result<Element, XmlReadError> {
    let binding = start.name();
    let name = String::from_utf8_lossy(binding.as_ref());
    let mut element = Element::new(name.as_ref());

    for attr in start.attributes() {
        let attr = attr.map_err(|err| XmlReadError::Attribute {
            position,
            message: err.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref());
        let value = attr.unescape_value().map_err(|err| XmlReadError::Attribute {
            position,
            message: err.to_string(),
        })?;
        element.push_attr(key.as_ref(), value.as_ref());
    }

    Ok(element)
}

/// Parse source text into a [`Document`] tree.
///
/// Element and attribute case is preserved exactly as written, attributes keep
/// their declared order, and an element's own text is its direct character
/// data only (whitespace-trimmed, pieces joined with a single space). CDATA is
/// treated as text. Comments, processing instructions, and the XML declaration
/// are not part of the element tree.
pub fn parse_document(input: &str) -> Result<Document, XmlReadError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(false);

    let mut document = Document::new();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        let position = reader.buffer_position() as u64;
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let element = element_from_start(&start, position)?;
                stack.push(element);
            }
            Ok(Event::Empty(start)) => {
                let element = element_from_start(&start, position)?;
                match stack.last_mut() {
                    Some(parent) => parent.push_child(element),
                    None => document.push_element(element),
                }
            }
            Ok(Event::End(_)) => {
                // The reader rejects unmatched and misnamed end tags before
                // this arm is reached.
                let element = stack.pop().expect("open element for end tag");
                match stack.last_mut() {
                    Some(parent) => parent.push_child(element),
                    None => document.push_element(element),
                }
            }
            Ok(Event::Text(text)) => {
                let value = text.unescape().map_err(|err| XmlReadError::Syntax {
                    position,
                    message: err.to_string(),
                })?;
                if let Some(open) = stack.last_mut() {
                    open.append_own_text(value.trim());
                }
            }
            Ok(Event::CData(data)) => {
                let value = String::from_utf8_lossy(&data.into_inner()).into_owned();
                if let Some(open) = stack.last_mut() {
                    open.append_own_text(value.trim());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                return Err(XmlReadError::Syntax {
                    position: reader.buffer_position() as u64,
                    message: err.to_string(),
                })
            }
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlReadError::UnclosedElement {
            name: open.name().to_owned(),
        });
    }

    Ok(document)
}

fn push_escaped_text(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn push_escaped_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.name());
    for (name, value) in element.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        push_escaped_attr(value, out);
        out.push('"');
    }

    if element.own_text().is_none() && element.children().is_empty() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if let Some(text) = element.own_text() {
        push_escaped_text(text, out);
    }
    for child in element.children() {
        write_element(child, out);
    }
    out.push_str("</");
    out.push_str(element.name());
    out.push('>');
}

/// Serialize a [`Document`] back to XML text.
///
/// Output is compact and deterministic: attributes in stored order, own text
/// before child elements, self-closing tags for childless text-less elements,
/// no XML declaration, one line per top-level element.
pub fn write_document(document: &Document) -> String {
    let mut out = String::new();
    for element in document.elements() {
        write_element(element, &mut out);
        out.push('\n');
    }
    out
}
