//! Structured markup tree
//!
//! Markup is built as elements and text nodes instead of interpolated
//! strings. Text reaches HTML only through [`Element::to_html`], which
//! escapes it.

use super::style::{style_for, ElementKind};

/// Tags the renderer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Ul,
    Li,
    Img,
    P,
    H4,
    Span,
}

impl Tag {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ul => "ul",
            Self::Li => "li",
            Self::Img => "img",
            Self::P => "p",
            Self::H4 => "h4",
            Self::Span => "span",
        }
    }

    /// Style category of the tag.
    pub const fn kind(self) -> ElementKind {
        match self {
            Self::Ul => ElementKind::ListContainer,
            Self::Li => ElementKind::ListItem,
            Self::Img => ElementKind::Image,
            Self::P => ElementKind::Paragraph,
            Self::H4 => ElementKind::Heading,
            Self::Span => ElementKind::LabelSpan,
        }
    }

    const fn is_void(self) -> bool {
        matches!(self, Self::Img)
    }
}

/// A child of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// One element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Tag,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Element carrying the inline style of its kind.
    pub fn styled(tag: Tag) -> Self {
        Self::new(tag).with_attr("style", style_for(tag.kind()))
    }

    /// Set an attribute, replacing an earlier value of the same name.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name.to_string(), value));
        }
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Element(element) => element.collect_text(out),
                Node::Text(text) => out.push_str(text),
            }
        }
    }

    /// Serialize to HTML with text and attribute values escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let name = self.tag.name();
        out.push('<');
        out.push_str(name);
        for (attr, value) in &self.attrs {
            out.push(' ');
            out.push_str(attr);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');
        if self.tag.is_void() {
            return;
        }
        for node in &self.children {
            match node {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(&escape_text(text)),
            }
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
}

/// Serialize a sequence of sibling elements.
pub fn to_html(elements: &[Element]) -> String {
    elements.iter().map(Element::to_html).collect()
}

/// Nearest element with `tag` on the path from a root to the clicked node.
///
/// `path[0]` indexes `roots`; each following index selects a child node of
/// the previous element. A path ending on a text node resolves from its
/// parent. Returns `None` for an empty or out-of-range path, or when no
/// element on the path has the tag.
pub fn closest<'a>(roots: &'a [Element], path: &[usize], tag: Tag) -> Option<&'a Element> {
    let (first, rest) = path.split_first()?;
    let mut current = roots.get(*first)?;
    let mut chain = vec![current];

    for index in rest {
        match current.children.get(*index)? {
            Node::Element(element) => {
                current = element;
                chain.push(element);
            }
            Node::Text(_) => break,
        }
    }

    chain.into_iter().rev().find(|element| element.tag == tag)
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
