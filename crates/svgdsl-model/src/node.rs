//! The document tree.
//!
//! A tree is built once, top-down, and never mutated afterwards. Every parent
//! owns its children outright; there are no back-references.

/// A single node in a document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A markup element with ordered attributes and children.
    Element(Element),

    /// Literal character data. Emitted verbatim, without escaping.
    Text(String),
}

/// A markup element.
///
/// Attribute names need not be unique; duplicates are kept in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// A `name="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Borrow the attribute as a `(name, value)` pair.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.name, &self.value)
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Attribute {
    fn from((name, value): (K, V)) -> Self {
        Self::new(name, value)
    }
}

impl Node {
    /// The tag name, or `None` for text.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element(el) => Some(&el.tag),
            Node::Text(_) => None,
        }
    }

    /// Child nodes. Text nodes have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(el) => &el.children,
            Node::Text(_) => &[],
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// Build a text node from anything string-like.
pub fn text_node(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// Build an element with an arbitrary tag.
///
/// The typed constructors in [`crate::tags`] all go through here.
pub fn el<A, C>(
    tag: impl Into<String>,
    attributes: impl IntoIterator<Item = A>,
    children: impl IntoIterator<Item = C>,
) -> Node
where
    A: Into<Attribute>,
    C: Into<Node>,
{
    Node::Element(Element {
        tag: tag.into(),
        attributes: attributes.into_iter().map(Into::into).collect(),
        children: children.into_iter().map(Into::into).collect(),
    })
}
