//! Typed attribute helpers.
//!
//! Each helper turns a typed value into an [`Attribute`]. Nothing is checked
//! here: negative radii, opacities above one and repeated names all pass
//! through untouched. See [`crate::validate`] for the opt-in checks.

use crate::geometry::{Point, ViewBox};
use crate::node::Attribute;
use crate::units::{Length, TextAnchor};

/// Namespace URI written by [`xmlns`].
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Version written by the sample document.
pub const SVG_VERSION: &str = "1.1";

fn int(name: &str, value: i32) -> Attribute {
    Attribute::new(name, value.to_string())
}

pub fn version(value: &str) -> Attribute {
    Attribute::new("version", value)
}

/// `xmlns="http://www.w3.org/2000/svg"`.
pub fn xmlns() -> Attribute {
    xmlns_with(SVG_NAMESPACE)
}

pub fn xmlns_with(value: &str) -> Attribute {
    Attribute::new("xmlns", value)
}

pub fn id(value: &str) -> Attribute {
    Attribute::new("id", value)
}

/// `width(300)` or `width((100, Unit::Percent))`.
pub fn width(value: impl Into<Length>) -> Attribute {
    Attribute::new("width", value.into().to_string())
}

pub fn height(value: impl Into<Length>) -> Attribute {
    Attribute::new("height", value.into().to_string())
}

pub fn cx(value: i32) -> Attribute {
    int("cx", value)
}

pub fn cy(value: i32) -> Attribute {
    int("cy", value)
}

pub fn r(value: i32) -> Attribute {
    int("r", value)
}

pub fn rx(value: i32) -> Attribute {
    int("rx", value)
}

pub fn ry(value: i32) -> Attribute {
    int("ry", value)
}

pub fn x(value: i32) -> Attribute {
    int("x", value)
}

pub fn y(value: i32) -> Attribute {
    int("y", value)
}

pub fn x1(value: i32) -> Attribute {
    int("x1", value)
}

pub fn y1(value: i32) -> Attribute {
    int("y1", value)
}

pub fn x2(value: i32) -> Attribute {
    int("x2", value)
}

pub fn y2(value: i32) -> Attribute {
    int("y2", value)
}

// Colors are free-form: names, `#rgb`, `rgb(...)` and friends.
pub fn fill(value: &str) -> Attribute {
    Attribute::new("fill", value)
}

pub fn stroke(value: &str) -> Attribute {
    Attribute::new("stroke", value)
}

/// Opacity as the shortest decimal that round-trips (`0.5`, `1`).
pub fn fill_opacity(value: f64) -> Attribute {
    Attribute::new("fill-opacity", value.to_string())
}

pub fn stroke_opacity(value: f64) -> Attribute {
    Attribute::new("stroke-opacity", value.to_string())
}

pub fn stroke_width(value: i32) -> Attribute {
    int("stroke-width", value)
}

pub fn font_size(value: i32) -> Attribute {
    int("font-size", value)
}

pub fn text_anchor(value: TextAnchor) -> Attribute {
    Attribute::new("text-anchor", value.keyword())
}

/// `viewBox="minX minY width height"`.
pub fn view_box(value: ViewBox) -> Attribute {
    Attribute::new("viewBox", value.to_string())
}

/// Point list for `polyline`/`polygon`: `x,y x,y ...`.
pub fn points(value: &[Point]) -> Attribute {
    let list: Vec<String> = value.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
    Attribute::new("points", list.join(" "))
}

/// Raw path data for `path`.
pub fn d(value: &str) -> Attribute {
    Attribute::new("d", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Span;
    use crate::units::Unit;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_width_default_unit() {
        assert_eq!(width(300), Attribute::new("width", "300"));
    }

    #[test]
    fn test_width_percent() {
        assert_eq!(width((100, Unit::Percent)), Attribute::new("width", "100%"));
    }

    #[test]
    fn test_height_units() {
        assert_eq!(height((5, Unit::Millimeter)).value, "5mm");
        assert_eq!(height((2, Unit::Centimeter)).value, "2cm");
        assert_eq!(height((1, Unit::Inch)).value, "1in");
    }

    #[test]
    fn test_helpers_are_repeatable() {
        assert_eq!(width((100, Unit::Percent)), width((100, Unit::Percent)));
    }

    #[test]
    fn test_integer_helpers() {
        let pairs: Vec<(String, String)> = [
            cx(150),
            cy(100),
            r(80),
            rx(1),
            ry(2),
            x(3),
            y(4),
            x1(10),
            y1(110),
            x2(50),
            y2(150),
            stroke_width(5),
            font_size(60),
        ]
        .into_iter()
        .map(|a| (a.name, a.value))
        .collect();
        let expected: Vec<(String, String)> = [
            ("cx", "150"),
            ("cy", "100"),
            ("r", "80"),
            ("rx", "1"),
            ("ry", "2"),
            ("x", "3"),
            ("y", "4"),
            ("x1", "10"),
            ("y1", "110"),
            ("x2", "50"),
            ("y2", "150"),
            ("stroke-width", "5"),
            ("font-size", "60"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_negative_values_pass_through() {
        assert_eq!(r(-3).value, "-3");
        assert_eq!(width(-1).value, "-1");
    }

    #[test]
    fn test_string_helpers() {
        assert_eq!(fill("red"), Attribute::new("fill", "red"));
        assert_eq!(stroke("black"), Attribute::new("stroke", "black"));
        assert_eq!(id("logo"), Attribute::new("id", "logo"));
        assert_eq!(version("1.1"), Attribute::new("version", "1.1"));
    }

    #[test]
    fn test_xmlns_default() {
        assert_eq!(xmlns(), Attribute::new("xmlns", "http://www.w3.org/2000/svg"));
        assert_eq!(xmlns_with("urn:x").value, "urn:x");
    }

    #[test]
    fn test_opacity() {
        assert_eq!(fill_opacity(0.5), Attribute::new("fill-opacity", "0.5"));
        assert_eq!(stroke_opacity(1.0), Attribute::new("stroke-opacity", "1"));
        assert_eq!(fill_opacity(0.25).value, "0.25");
    }

    #[test]
    fn test_text_anchor() {
        assert_eq!(
            text_anchor(TextAnchor::Middle),
            Attribute::new("text-anchor", "middle")
        );
        assert_eq!(text_anchor(TextAnchor::Inherit).value, "inherit");
    }

    #[test]
    fn test_view_box() {
        let vb = ViewBox::new(Point::new(0, 0), Span::new(300, 200));
        assert_eq!(view_box(vb), Attribute::new("viewBox", "0 0 300 200"));
    }

    #[test]
    fn test_points_and_path_data() {
        assert_eq!(
            points(&[Point::new(0, 0), Point::new(5, 10)]).value,
            "0,0 5,10"
        );
        assert_eq!(points(&[]).value, "");
        assert_eq!(d("M 0 0 L 10 10").value, "M 0 0 L 10 10");
    }
}
