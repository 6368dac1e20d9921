//! Geometry records used as helper parameters and as shape shorthands.

use std::fmt;

use crate::attrs::{cx, cy, height, points, r, rx, ry, width, x, y};
use crate::node::Node;
use crate::tags::{circle, ellipse, polyline, rect};

/// A position in user space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Renders as `x="X" y="Y"`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x=\"{}\" y=\"{}\"", self.x, self.y)
    }
}

/// A width/height extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub width: u32,
    pub height: u32,
}

impl Span {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Renders as `width="W" height="H"`.
impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width=\"{}\" height=\"{}\"", self.width, self.height)
    }
}

/// The `viewBox` rectangle: origin plus extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewBox {
    pub position: Point,
    pub span: Span,
}

impl ViewBox {
    pub fn new(position: Point, span: Span) -> Self {
        Self { position, span }
    }
}

/// Renders as `minX minY width height`.
impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.position.x, self.position.y, self.span.width, self.span.height
        )
    }
}

/// A rectangle with optional rounded corners (`radius` is `rx`/`ry`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub position: Point,
    pub radius: Point,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub position: Point,
    pub radius: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub position: Point,
    pub radius: Point,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyLine {
    pub points: Vec<Point>,
}

impl From<Rectangle> for Node {
    fn from(shape: Rectangle) -> Self {
        rect([
            x(shape.position.x),
            y(shape.position.y),
            width(shape.span.width),
            height(shape.span.height),
            rx(shape.radius.x),
            ry(shape.radius.y),
        ])
    }
}

impl From<Circle> for Node {
    fn from(shape: Circle) -> Self {
        circle([cx(shape.position.x), cy(shape.position.y), r(shape.radius)])
    }
}

impl From<Ellipse> for Node {
    fn from(shape: Ellipse) -> Self {
        ellipse([
            cx(shape.position.x),
            cy(shape.position.y),
            rx(shape.radius.x),
            ry(shape.radius.y),
        ])
    }
}

impl From<PolyLine> for Node {
    fn from(shape: PolyLine) -> Self {
        polyline([points(&shape.points)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Attribute;
    use pretty_assertions::assert_eq;

    fn attrs_of(node: &Node) -> Vec<(&str, &str)> {
        match node {
            Node::Element(el) => el.attributes.iter().map(Attribute::as_pair).collect(),
            Node::Text(_) => panic!("expected element"),
        }
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(10, 10).to_string(), "x=\"10\" y=\"10\"");
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(300, 200).to_string(), "width=\"300\" height=\"200\"");
    }

    #[test]
    fn test_view_box_display() {
        let vb = ViewBox::new(Point::new(-5, 0), Span::new(300, 200));
        assert_eq!(vb.to_string(), "-5 0 300 200");
    }

    #[test]
    fn test_rectangle_into_node() {
        let node: Node = Rectangle {
            position: Point::new(1, 2),
            radius: Point::new(3, 4),
            span: Span::new(50, 60),
        }
        .into();
        assert_eq!(node.tag(), Some("rect"));
        assert_eq!(
            attrs_of(&node),
            vec![
                ("x", "1"),
                ("y", "2"),
                ("width", "50"),
                ("height", "60"),
                ("rx", "3"),
                ("ry", "4"),
            ]
        );
    }

    #[test]
    fn test_rectangle_wide_span_matches_view_box() {
        let span = Span::new(3_000_000_000, 10);
        let node: Node = Rectangle {
            position: Point::default(),
            radius: Point::default(),
            span,
        }
        .into();
        let attrs = attrs_of(&node);
        assert_eq!(attrs[2], ("width", "3000000000"));
        assert_eq!(attrs[3], ("height", "10"));
        assert_eq!(
            ViewBox::new(Point::default(), span).to_string(),
            "0 0 3000000000 10"
        );
    }

    #[test]
    fn test_circle_into_node() {
        let node: Node = Circle {
            position: Point::new(150, 100),
            radius: 80,
        }
        .into();
        assert_eq!(node.tag(), Some("circle"));
        assert_eq!(attrs_of(&node), vec![("cx", "150"), ("cy", "100"), ("r", "80")]);
    }

    #[test]
    fn test_ellipse_into_node() {
        let node: Node = Ellipse {
            position: Point::new(0, 0),
            radius: Point::new(10, 5),
        }
        .into();
        assert_eq!(
            attrs_of(&node),
            vec![("cx", "0"), ("cy", "0"), ("rx", "10"), ("ry", "5")]
        );
    }

    #[test]
    fn test_polyline_into_node() {
        let node: Node = PolyLine {
            points: vec![Point::new(0, 0), Point::new(10, -10)],
        }
        .into();
        assert_eq!(node.tag(), Some("polyline"));
        assert_eq!(attrs_of(&node), vec![("points", "0,0 10,-10")]);
    }
}
