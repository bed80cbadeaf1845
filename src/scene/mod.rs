//! SVG scene graph
//!
//! This module is organized into submodules:
//! - `element`: the tagged attribute/children base every node carries
//! - `shapes`: leaf primitives (circle, rect, text, image) and their boxes
//! - `group`: transformable containers and the `<svg>` root
//! - `align`: placing one node next to another
//! - `document`: the render target abstraction and the XML serializer

pub mod align;
pub mod document;
pub mod element;
pub mod group;
pub mod shapes;

pub use align::{Alignment, Placement, align};
pub use document::{Document, ElementRef, SVG_NS, XLINK_NS, XmlDocument, fmt_num, render_to_string};
pub use element::{AttrValue, Element};
pub use group::{Group, Root};
pub use shapes::{Circle, Image, Rect, STROKE_EXPANSION, TEXT_WIDTH_FACTOR, Text};

use enum_dispatch::enum_dispatch;

use crate::types::BBox;

/// Common behavior for all scene nodes
#[enum_dispatch]
pub trait Drawable {
    /// Tag, attributes, children and text of this node
    fn element(&self) -> &Element;

    fn element_mut(&mut self) -> &mut Element;

    /// Bounding box in the parent's coordinate space, `None` when the node
    /// has no geometry at all.
    fn bounding_box(&self) -> Option<BBox>;

    /// Render this node (and its subtree) into a document
    fn render(&self, doc: &mut dyn Document) -> ElementRef {
        self.element().render_element(doc)
    }
}

/// Any node of the scene tree
#[enum_dispatch(Drawable)]
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Circle(Circle),
    Rect(Rect),
    Text(Text),
    Image(Image),
    Group(Group),
    Root(Root),
}

impl Node {
    pub fn tag(&self) -> &str {
        self.element().tag()
    }

    pub fn children(&self) -> &[Node] {
        self.element().children()
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(g) => Some(g),
            _ => None,
        }
    }
}

/// Builder-style mutation shared by every node type.
///
/// The `&mut Self` methods mutate in place and return the node for chaining;
/// the `with_*` methods consume and return it, for building nodes inline.
pub trait NodeBuilder: Drawable + Sized {
    fn append(&mut self, child: impl Into<Node>) -> &mut Self {
        self.element_mut().push_child(child.into());
        self
    }

    fn prepend(&mut self, child: impl Into<Node>) -> &mut Self {
        self.element_mut().insert_child(0, child.into());
        self
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &mut Self {
        self.element_mut().set(name, value);
        self
    }

    fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(name, value);
        self
    }

    fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.append(child);
        self
    }
}

impl<T: Drawable> NodeBuilder for T {}
