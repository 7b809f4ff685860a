//! Hand-rolled XML writing and reading.
//!
//! The export schemas are attribute-heavy and shallow, so the documents
//! are written directly into a `String` the same way the machine-format
//! generators do, and read back with a small element-tree parser that
//! covers exactly the documents this crate produces: start/end tags,
//! quoted attributes, text, CDATA sections, and skipped declarations
//! and comments.

use std::fmt::Write;

use crate::error::{GenerateError, Result};

/// Indenting XML writer. Produces no XML declaration; empty elements are
/// self-closed.
pub struct XmlWriter {
    buffer: String,
    stack: Vec<Frame>,
    tag_open: bool,
}

struct Frame {
    name: String,
    has_children: bool,
    has_text: bool,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            stack: Vec::new(),
            tag_open: false,
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.stack.len() {
            self.buffer.push_str("  ");
        }
    }

    fn close_start_tag(&mut self, newline: bool) {
        if self.tag_open {
            self.buffer.push('>');
            if newline {
                self.buffer.push('\n');
            }
            self.tag_open = false;
        }
    }

    /// Open an element. Attributes may follow until the next call that
    /// produces content.
    pub fn begin_element(&mut self, name: &str) {
        self.close_start_tag(true);
        if let Some(parent) = self.stack.last_mut() {
            parent.has_children = true;
        }
        self.indent();
        write!(self.buffer, "<{}", name).unwrap();
        self.stack.push(Frame {
            name: name.to_string(),
            has_children: false,
            has_text: false,
        });
        self.tag_open = true;
    }

    /// Write an attribute on the currently open start tag.
    pub fn attr(&mut self, name: &str, value: &str) {
        debug_assert!(self.tag_open, "attribute written outside a start tag");
        write!(self.buffer, " {}=\"{}\"", name, escape_attr(value)).unwrap();
    }

    /// Write escaped text content into the current element.
    pub fn text(&mut self, text: &str) {
        self.close_start_tag(false);
        if let Some(top) = self.stack.last_mut() {
            top.has_text = true;
        }
        self.buffer.push_str(&escape_text(text));
    }

    /// Write a CDATA section into the current element.
    pub fn cdata(&mut self, text: &str) {
        self.close_start_tag(false);
        if let Some(top) = self.stack.last_mut() {
            top.has_text = true;
        }
        // A "]]>" inside the payload would terminate the section early;
        // split it across two sections.
        let safe = text.replace("]]>", "]]]]><![CDATA[>");
        write!(self.buffer, "<![CDATA[{}]]>", safe).unwrap();
    }

    /// Close the current element.
    pub fn end_element(&mut self) {
        let frame = self.stack.pop().expect("end_element without begin_element");
        if self.tag_open {
            self.buffer.push_str(" />\n");
            self.tag_open = false;
        } else if frame.has_children && !frame.has_text {
            self.indent();
            writeln!(self.buffer, "</{}>", frame.name).unwrap();
        } else {
            writeln!(self.buffer, "</{}>", frame.name).unwrap();
        }
    }

    /// Finish the document and take the output.
    pub fn finish(mut self) -> String {
        debug_assert!(self.stack.is_empty(), "unclosed elements at finish");
        // Documents end without a trailing newline.
        if self.buffer.ends_with('\n') {
            self.buffer.pop();
        }
        self.buffer
    }
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        let (entity, len) = if rest.starts_with("&amp;") {
            ('&', 5)
        } else if rest.starts_with("&lt;") {
            ('<', 4)
        } else if rest.starts_with("&gt;") {
            ('>', 4)
        } else if rest.starts_with("&quot;") {
            ('"', 6)
        } else if rest.starts_with("&apos;") {
            ('\'', 6)
        } else {
            ('&', 1)
        };
        out.push(entity);
        rest = &rest[len..];
    }
    out.push_str(rest);
    out
}

/// A parsed element: name, attributes, child elements and accumulated
/// text content (CDATA included, entities resolved).
#[derive(Debug, Clone, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    pub text: String,
}

impl XmlElement {
    /// Element name with any namespace prefix stripped.
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// First child whose local name matches.
    pub fn child(&self, local: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.local_name() == local)
    }

    /// All children whose local name matches.
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.local_name() == local)
    }
}

fn local_name(name: &str) -> &str {
    match name.rfind(':') {
        Some(pos) => &name[pos + 1..],
        None => name,
    }
}

/// Parse a document into its root element.
pub fn parse_document(input: &str) -> Result<XmlElement> {
    let mut parser = Parser {
        input,
        pos: 0,
    };
    parser.skip_prolog();
    let root = parser.parse_element()?;
    Ok(root)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn err(&self, message: impl Into<String>) -> GenerateError {
        GenerateError::MalformedXml {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn skip_prolog(&mut self) {
        loop {
            self.skip_whitespace();
            if self.rest().starts_with("<?") {
                match self.rest().find("?>") {
                    Some(end) => self.pos += end + 2,
                    None => return,
                }
            } else if self.rest().starts_with("<!--") {
                match self.rest().find("-->") {
                    Some(end) => self.pos += end + 3,
                    None => return,
                }
            } else {
                return;
            }
        }
    }

    fn parse_element(&mut self) -> Result<XmlElement> {
        self.skip_whitespace();
        if !self.rest().starts_with('<') {
            return Err(self.err("expected start tag"));
        }
        self.pos += 1;

        let name = self.parse_name()?;
        let mut element = XmlElement {
            name,
            ..Default::default()
        };

        loop {
            self.skip_whitespace();
            if self.rest().starts_with("/>") {
                self.pos += 2;
                return Ok(element);
            }
            if self.rest().starts_with('>') {
                self.pos += 1;
                break;
            }
            let (attr_name, attr_value) = self.parse_attribute()?;
            element.attributes.push((attr_name, attr_value));
        }

        // Content until the matching end tag.
        loop {
            if self.rest().starts_with("<![CDATA[") {
                self.pos += 9;
                let end = self
                    .rest()
                    .find("]]>")
                    .ok_or_else(|| self.err("unterminated CDATA section"))?;
                element.text.push_str(&self.rest()[..end]);
                self.pos += end + 3;
            } else if self.rest().starts_with("<!--") {
                let end = self
                    .rest()
                    .find("-->")
                    .ok_or_else(|| self.err("unterminated comment"))?;
                self.pos += end + 3;
            } else if self.rest().starts_with("</") {
                self.pos += 2;
                let end_name = self.parse_name()?;
                if local_name(&end_name) != element.local_name() {
                    return Err(self.err(format!(
                        "mismatched end tag: expected {}, got {}",
                        element.name, end_name
                    )));
                }
                self.skip_whitespace();
                if !self.rest().starts_with('>') {
                    return Err(self.err("malformed end tag"));
                }
                self.pos += 1;
                return Ok(element);
            } else if self.rest().starts_with('<') {
                let child = self.parse_element()?;
                element.children.push(child);
            } else if self.rest().is_empty() {
                return Err(self.err(format!("unexpected end of input inside {}", element.name)));
            } else {
                let end = self.rest().find('<').unwrap_or(self.rest().len());
                let raw = &self.rest()[..end];
                if !raw.trim().is_empty() {
                    element.text.push_str(&unescape(raw.trim()));
                }
                self.pos += end;
            }
        }
    }

    fn parse_name(&mut self) -> Result<String> {
        let rest = self.rest();
        let end = rest
            .find(|c: char| c.is_whitespace() || c == '>' || c == '/' || c == '=')
            .unwrap_or(rest.len());
        if end == 0 {
            return Err(self.err("empty name"));
        }
        let name = rest[..end].to_string();
        self.pos += end;
        Ok(name)
    }

    fn parse_attribute(&mut self) -> Result<(String, String)> {
        let name = self.parse_name()?;
        self.skip_whitespace();
        if !self.rest().starts_with('=') {
            return Err(self.err(format!("attribute '{}' without value", name)));
        }
        self.pos += 1;
        self.skip_whitespace();

        let quote = self
            .rest()
            .chars()
            .next()
            .ok_or_else(|| self.err("unexpected end of input in attribute"))?;
        if quote != '"' && quote != '\'' {
            return Err(self.err("attribute value must be quoted"));
        }
        self.pos += 1;

        let end = self
            .rest()
            .find(quote)
            .ok_or_else(|| self.err("unterminated attribute value"))?;
        let value = unescape(&self.rest()[..end]);
        self.pos += end + 1;
        Ok((name, value))
    }
}
