//! The reference document: a red background, a green circle and a label.

use svgdsl_model::attrs::SVG_VERSION;
use svgdsl_model::prelude::*;

/// The three-shape sample document.
pub fn document() -> Node {
    svg(
        [version(SVG_VERSION), width(300), height(200), xmlns()],
        body(),
    )
}

/// The sample document with a trailing black diagonal line.
pub fn document_with_line() -> Node {
    let mut children = body();
    children.push(line([
        x1(10),
        y1(110),
        x2(50),
        y2(150),
        stroke("black"),
        stroke_width(5),
    ]));
    svg(
        [version(SVG_VERSION), width(300), height(200), xmlns()],
        children,
    )
}

fn body() -> Vec<Node> {
    vec![
        rect([width((100, Unit::Percent)), height((100, Unit::Percent)), fill("red")]),
        circle([cx(150), cy(100), r(80), fill("green")]),
        text(
            [
                x(150),
                y(125),
                font_size(60),
                text_anchor(TextAnchor::Middle),
                fill("white"),
            ],
            ["SVG"],
        ),
    ]
}
