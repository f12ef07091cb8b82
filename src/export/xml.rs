//! Minimal immutable XML tree.
//!
//! The layer documents are built as plain element trees (build child lists,
//! attach once) and rendered in a single pass. This replaces the mutable
//! cursor-style builder the desktop tool used, where a miscounted `up()`
//! silently reparented the rest of the document.

use crate::error::{CopError, Result};

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Element {
            name: name.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the tree as a standalone document: XML declaration plus the
    /// pretty-printed root element, two-space indent.
    pub fn to_document_string(&self) -> Result<String> {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        self.write(&mut out, 0)?;
        Ok(out)
    }

    fn write(&self, out: &mut String, depth: usize) -> Result<()> {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value)?);
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>\n");
            return Ok(());
        }

        // A lone text child stays on one line.
        if let [Node::Text(text)] = self.children.as_slice() {
            out.push('>');
            out.push_str(&escape(text)?);
            out.push_str("</");
            out.push_str(&self.name);
            out.push_str(">\n");
            return Ok(());
        }

        out.push_str(">\n");
        for child in &self.children {
            match child {
                Node::Element(el) => el.write(out, depth + 1)?,
                Node::Text(text) => {
                    out.push_str(&"  ".repeat(depth + 1));
                    out.push_str(&escape(text)?);
                    out.push('\n');
                }
            }
        }
        out.push_str(&indent);
        out.push_str("</");
        out.push_str(&self.name);
        out.push_str(">\n");
        Ok(())
    }
}

/// Escape text for element content and attribute values.
///
/// Control characters below U+0020 (other than tab, LF, CR) cannot be
/// represented in XML 1.0 at all, so they fail the whole serialization
/// rather than producing a document the consumer will reject.
fn escape(value: &str) -> Result<String> {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            c if c < '\u{20}' && c != '\t' && c != '\n' && c != '\r' => {
                return Err(CopError::SerializationFailure(format!(
                    "control character U+{:04X} in text content",
                    c as u32
                )));
            }
            c => out.push(c),
        }
    }
    Ok(out)
}
