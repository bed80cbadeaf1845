//! The tagged base shared by every scene node.

use indexmap::IndexMap;

use super::document::{Document, ElementRef, SVG_NS, fmt_num};
use super::{Drawable, Node};
use crate::types::BBox;

/// Attribute value as stored on a node
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    /// Explicitly unset; skipped when rendering
    Absent,
}

impl AttrValue {
    /// Serialized form, `None` for absent values
    pub fn to_attr_string(&self) -> Option<String> {
        match self {
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::Number(n) => Some(fmt_num(*n)),
            AttrValue::Absent => None,
        }
    }

    /// Numeric reading of the value; text is parsed leniently like a CSS number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(s) => parse_leading_number(s),
            AttrValue::Absent => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Parse the numeric prefix of a string (`"12px"` -> 12, `"1e3"` -> 1000).
fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim();
    let bytes = s.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    end += bytes[end..].iter().take_while(|b| b.is_ascii_digit() || **b == b'.').count();
    // an exponent only counts when digits follow, so "12em" stays 12
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let digits = bytes[exponent..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            end = exponent + digits;
        }
    }
    s[..end].parse().ok()
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        AttrValue::Text(s.clone())
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Number(n.into())
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        AttrValue::Number(n.into())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(AttrValue::Absent, Into::into)
    }
}

/// A tagged node with ordered attributes, children and optional text.
///
/// Used directly for containers without geometry (`defs`, `style`, ...) and
/// embedded in every other node type.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: IndexMap<String, AttrValue>,
    children: Vec<Node>,
    text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Numeric attribute, `None` when missing, absent or unparsable
    pub fn number(&self, name: &str) -> Option<f64> {
        self.attrs.get(name).and_then(AttrValue::as_number)
    }

    /// Numeric attribute with missing values read as zero
    pub fn number_or_zero(&self, name: &str) -> f64 {
        self.number(name).filter(|n| n.is_finite()).unwrap_or(0.0)
    }

    /// Set an attribute, keeping its position if it already exists
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.attrs.shift_remove(name)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub(crate) fn insert_child(&mut self, index: usize, child: Node) {
        self.children.insert(index, child);
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Union of the children's boxes
    pub fn children_box(&self) -> Option<BBox> {
        BBox::union_all(self.children.iter().map(Drawable::bounding_box))
    }

    /// Create the element, copy attributes, render children, then assign text.
    pub(crate) fn render_element(&self, doc: &mut dyn Document) -> ElementRef {
        let el = doc.create_element_ns(SVG_NS, &self.tag);
        for (name, value) in &self.attrs {
            if let Some(value) = value.to_attr_string() {
                doc.set_attribute(el, name, &value);
            }
        }
        for child in &self.children {
            let rendered = child.render(doc);
            doc.append_child(el, rendered);
        }
        if let Some(text) = &self.text {
            doc.set_text_content(el, text);
        }
        el
    }
}

impl Drawable for Element {
    fn element(&self) -> &Element {
        self
    }

    fn element_mut(&mut self) -> &mut Element {
        self
    }

    fn bounding_box(&self) -> Option<BBox> {
        self.children_box()
    }
}
