//! svgdsl document model
//!
//! An immutable tree of elements and text, plus a typed builder API so
//! documents read like markup without hand-written attribute strings.
//!
//! ```
//! use svgdsl_model::prelude::*;
//!
//! let doc = svg(
//!     [version("1.1"), width(300), height(200), xmlns()],
//!     [circle([cx(150), cy(100), r(80), fill("green")])],
//! );
//! assert_eq!(doc.tag(), Some("svg"));
//! ```

pub mod attrs;
pub mod geometry;
pub mod node;
pub mod tags;
pub mod units;
pub mod validate;

pub use geometry::{Circle, Ellipse, Point, PolyLine, Rectangle, Span, ViewBox};
pub use node::{el, text_node, Attribute, Element, Node};
pub use units::{pixel_to_millimeter, Length, TextAnchor, Unit, MILLIMETERS_PER_PIXEL};
pub use validate::{validate, ValidationError, ValidationErrors};

/// Everything needed to write a document in one import.
pub mod prelude {
    pub use crate::attrs::*;
    pub use crate::geometry::{Circle, Ellipse, Point, PolyLine, Rectangle, Span, ViewBox};
    pub use crate::node::{el, text_node, Attribute, Element, Node};
    pub use crate::tags::{circle, ellipse, g, line, path, polygon, polyline, rect, svg, text};
    pub use crate::units::{Length, TextAnchor, Unit};
}
