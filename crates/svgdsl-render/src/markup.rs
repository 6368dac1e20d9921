//! Markup serializer.
//!
//! Walks the tree in pre-order and appends to a single output string.
//! Traversal runs off an explicit work stack instead of the call stack, so
//! serializing does not grow the call stack with nesting depth. Other
//! operations on `Node` (`Drop`, `Clone`, `PartialEq`, `Debug`) are still
//! recursive and overflow on trees many thousands of levels deep.

use svgdsl_model::{Element, Node};

use crate::RenderOptions;

const INDENT: &str = "  ";

enum Step<'a> {
    Open {
        node: &'a Node,
        depth: usize,
        own_line: bool,
    },
    Close {
        tag: &'a str,
        depth: usize,
        block: bool,
    },
}

/// Serialize `root` into `out` according to `options`.
pub fn write_node(root: &Node, options: &RenderOptions, out: &mut String) {
    let mut stack = vec![Step::Open {
        node: root,
        depth: 0,
        own_line: options.pretty && !root.is_text(),
    }];

    while let Some(step) = stack.pop() {
        match step {
            Step::Open {
                node: Node::Text(text),
                depth,
                own_line,
            } => {
                if own_line {
                    push_indent(out, depth);
                    out.push_str(text);
                    out.push('\n');
                } else {
                    out.push_str(text);
                }
            }
            Step::Open {
                node: Node::Element(el),
                depth,
                own_line,
            } => {
                let block = options.pretty && el.children.iter().any(|c| !c.is_text());

                if own_line {
                    push_indent(out, depth);
                }
                write_open_tag(el, options, out);
                if block {
                    out.push('\n');
                }

                stack.push(Step::Close {
                    tag: &el.tag,
                    depth,
                    block,
                });
                for child in el.children.iter().rev() {
                    stack.push(Step::Open {
                        node: child,
                        depth: depth + 1,
                        own_line: block,
                    });
                }
            }
            Step::Close { tag, depth, block } => {
                if block {
                    push_indent(out, depth);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
                if options.pretty {
                    out.push('\n');
                }
            }
        }
    }
}

fn write_open_tag(el: &Element, options: &RenderOptions, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);

    if el.attributes.is_empty() {
        if options.empty_attribute_space {
            out.push(' ');
        }
    } else {
        for attr in &el.attributes {
            out.push(' ');
            out.push_str(&attr.name);
            out.push_str("=\"");
            out.push_str(&attr.value);
            out.push('"');
        }
    }

    out.push('>');
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
