//! One constructor per known tag.
//!
//! Container tags (`svg`, `g`, `text`) take children; shape tags take only
//! attributes and always produce an element with no children.

use crate::node::{el, Attribute, Node};

/// Tags that accept children.
pub const CONTAINER_TAGS: &[&str] = &["svg", "g", "text"];

/// Shape tags; these never carry children.
pub const SHAPE_TAGS: &[&str] = &[
    "rect", "circle", "ellipse", "line", "polygon", "polyline", "path",
];

/// Whether `tag` has a constructor in this module.
pub fn is_known_tag(tag: &str) -> bool {
    CONTAINER_TAGS.contains(&tag) || SHAPE_TAGS.contains(&tag)
}

pub fn is_shape_tag(tag: &str) -> bool {
    SHAPE_TAGS.contains(&tag)
}

fn shape(tag: &str, attributes: impl IntoIterator<Item = Attribute>) -> Node {
    el(tag, attributes, std::iter::empty::<Node>())
}

pub fn svg<C: Into<Node>>(
    attributes: impl IntoIterator<Item = Attribute>,
    children: impl IntoIterator<Item = C>,
) -> Node {
    el("svg", attributes, children)
}

pub fn g<C: Into<Node>>(
    attributes: impl IntoIterator<Item = Attribute>,
    children: impl IntoIterator<Item = C>,
) -> Node {
    el("g", attributes, children)
}

/// A `<text>` element. Children may be plain strings: `text(attrs, ["SVG"])`.
pub fn text<C: Into<Node>>(
    attributes: impl IntoIterator<Item = Attribute>,
    children: impl IntoIterator<Item = C>,
) -> Node {
    el("text", attributes, children)
}

pub fn rect(attributes: impl IntoIterator<Item = Attribute>) -> Node {
    shape("rect", attributes)
}

pub fn circle(attributes: impl IntoIterator<Item = Attribute>) -> Node {
    shape("circle", attributes)
}

pub fn ellipse(attributes: impl IntoIterator<Item = Attribute>) -> Node {
    shape("ellipse", attributes)
}

pub fn line(attributes: impl IntoIterator<Item = Attribute>) -> Node {
    shape("line", attributes)
}

pub fn polygon(attributes: impl IntoIterator<Item = Attribute>) -> Node {
    shape("polygon", attributes)
}

pub fn polyline(attributes: impl IntoIterator<Item = Attribute>) -> Node {
    shape("polyline", attributes)
}

pub fn path(attributes: impl IntoIterator<Item = Attribute>) -> Node {
    shape("path", attributes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::{fill, x, y};
    use crate::node::text_node;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shape_tags() {
        let shapes = [
            rect([]),
            circle([]),
            ellipse([]),
            line([]),
            polygon([]),
            polyline([]),
            path([]),
        ];
        let tags: Vec<&str> = shapes.iter().filter_map(Node::tag).collect();
        assert_eq!(tags, SHAPE_TAGS.to_vec());
        assert!(shapes.iter().all(|s| s.children().is_empty()));
    }

    #[test]
    fn test_text_accepts_string_children() {
        let node = text([x(150), y(125)], ["SVG"]);
        assert_eq!(node.tag(), Some("text"));
        assert_eq!(node.children(), &[text_node("SVG")]);
    }

    #[test]
    fn test_container_nesting() {
        let node = svg([], [g([fill("red")], [rect([])])]);
        assert_eq!(node.children()[0].tag(), Some("g"));
        assert_eq!(node.children()[0].children()[0].tag(), Some("rect"));
    }

    #[test]
    fn test_known_tags() {
        assert!(is_known_tag("svg"));
        assert!(is_known_tag("path"));
        assert!(!is_known_tag("div"));
        assert!(is_shape_tag("line"));
        assert!(!is_shape_tag("g"));
    }
}
