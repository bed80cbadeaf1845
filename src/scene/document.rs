//! Render targets
//!
//! Nodes render into anything implementing [`Document`], a minimal DOM-like
//! factory. [`XmlDocument`] is the built-in arena implementation that
//! serializes to SVG markup.

use super::Drawable;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// XLink namespace URI, needed for `xlink:href` on images
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Handle to an element created by a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef(pub usize);

/// Element factory used by `Drawable::render`
pub trait Document {
    fn create_element_ns(&mut self, namespace: &str, tag: &str) -> ElementRef;

    /// Set an attribute, replacing any previous value of the same name
    fn set_attribute(&mut self, el: ElementRef, name: &str, value: &str);

    fn append_child(&mut self, parent: ElementRef, child: ElementRef);

    /// Replace the element's children with a single text node
    fn set_text_content(&mut self, el: ElementRef, text: &str);
}

#[derive(Debug, Clone, PartialEq)]
enum Content {
    Element(ElementRef),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
struct XmlElement {
    namespace: String,
    tag: String,
    attrs: Vec<(String, String)>,
    content: Vec<Content>,
}

/// Arena-backed document that serializes to compact XML
#[derive(Debug, Clone, Default)]
pub struct XmlDocument {
    elements: Vec<XmlElement>,
}

impl XmlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn tag(&self, el: ElementRef) -> Option<&str> {
        self.elements.get(el.0).map(|e| e.tag.as_str())
    }

    pub fn namespace(&self, el: ElementRef) -> Option<&str> {
        self.elements.get(el.0).map(|e| e.namespace.as_str())
    }

    pub fn attribute(&self, el: ElementRef, name: &str) -> Option<&str> {
        self.elements
            .get(el.0)?
            .attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Child elements in document order (text content excluded)
    pub fn children(&self, el: ElementRef) -> Vec<ElementRef> {
        self.elements
            .get(el.0)
            .map(|e| {
                e.content
                    .iter()
                    .filter_map(|c| match c {
                        Content::Element(r) => Some(*r),
                        Content::Text(_) => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Serialize the subtree rooted at `root`
    pub fn to_xml(&self, root: ElementRef) -> String {
        let mut out = String::new();
        self.write_element(root, &mut out);
        out
    }

    fn write_element(&self, el: ElementRef, out: &mut String) {
        let Some(element) = self.elements.get(el.0) else {
            return;
        };
        out.push('<');
        out.push_str(&element.tag);
        for (name, value) in &element.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        if element.content.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for content in &element.content {
            match content {
                Content::Element(child) => self.write_element(*child, out),
                Content::Text(text) => out.push_str(&escape_text(text)),
            }
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }
}

impl Document for XmlDocument {
    fn create_element_ns(&mut self, namespace: &str, tag: &str) -> ElementRef {
        self.elements.push(XmlElement {
            namespace: namespace.to_string(),
            tag: tag.to_string(),
            attrs: Vec::new(),
            content: Vec::new(),
        });
        ElementRef(self.elements.len() - 1)
    }

    fn set_attribute(&mut self, el: ElementRef, name: &str, value: &str) {
        let Some(element) = self.elements.get_mut(el.0) else {
            return;
        };
        match element.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => element.attrs.push((name.to_string(), value.to_string())),
        }
    }

    fn append_child(&mut self, parent: ElementRef, child: ElementRef) {
        if let Some(element) = self.elements.get_mut(parent.0) {
            element.content.push(Content::Element(child));
        }
    }

    fn set_text_content(&mut self, el: ElementRef, text: &str) {
        if let Some(element) = self.elements.get_mut(el.0) {
            element.content.clear();
            if !text.is_empty() {
                element.content.push(Content::Text(text.to_string()));
            }
        }
    }
}

/// Render a node into a fresh [`XmlDocument`] and serialize it
pub fn render_to_string(node: &impl Drawable) -> String {
    let mut doc = XmlDocument::new();
    let root = node.render(&mut doc);
    doc.to_xml(root)
}

/// Format a number for an attribute value.
///
/// Integral values print without a fractional part; `-0` and non-finite
/// values print as `0`.
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
