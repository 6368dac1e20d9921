//! svgdsl renderer
//!
//! Serializes a document tree into markup text. Rendering is total and pure:
//! every tree renders, and the same tree always yields the same bytes.
//!
//! ```text
//! Node tree → render() → "<svg ...>...</svg>"
//! ```
//!
//! Text content is written verbatim. Characters such as `<` and `&` are not
//! escaped, so text containing them produces markup that XML parsers reject.

pub mod markup;
pub mod preview;
pub mod sample;

use std::fmt;

use svgdsl_model::Node;

/// Output settings. The default is compact markup with no stray spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Write `<g ></g>` instead of `<g></g>` for elements without attributes.
    pub empty_attribute_space: bool,

    /// One element per line, indented two spaces per level. Elements whose
    /// children are all text stay on one line.
    pub pretty: bool,
}

/// Render a tree as compact markup.
pub fn render(node: &Node) -> String {
    render_with(node, &RenderOptions::default())
}

/// Render a tree with explicit options.
pub fn render_with(node: &Node, options: &RenderOptions) -> String {
    let mut out = String::new();
    markup::write_node(node, options, &mut out);
    log::trace!("rendered {} bytes of markup", out.len());
    out
}

/// Display adapter: `Markup(&node).to_string() == render(&node)`.
pub struct Markup<'a>(pub &'a Node);

impl fmt::Display for Markup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.0))
    }
}
