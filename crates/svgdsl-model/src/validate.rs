//! Opt-in structural checks.
//!
//! Builders and the renderer never call into this module. Callers that want
//! stricter guarantees run [`validate`] themselves before rendering; a tree
//! that fails here still renders exactly as it would have otherwise.

use std::collections::HashSet;
use std::fmt;

use crate::node::{Element, Node};
use crate::tags::{is_known_tag, is_shape_tag};
use crate::units::TextAnchor;

/// Attributes whose numeric part must not be negative.
const NON_NEGATIVE: &[&str] = &["r", "rx", "ry", "width", "height", "stroke-width", "font-size"];

const OPACITIES: &[&str] = &["fill-opacity", "stroke-opacity"];

/// A single problem found in a tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown tag <{tag}>")]
    UnknownTag { tag: String },

    #[error("<{tag}> cannot have children (found {count})")]
    UnexpectedChildren { tag: String, count: usize },

    #[error("duplicate attribute '{name}' on <{tag}>")]
    DuplicateAttribute { tag: String, name: String },

    #[error("attribute '{name}' on <{tag}> must not be negative, got \"{value}\"")]
    NegativeValue {
        tag: String,
        name: String,
        value: String,
    },

    #[error("attribute '{name}' on <{tag}> must be between 0 and 1, got \"{value}\"")]
    OpacityOutOfRange {
        tag: String,
        name: String,
        value: String,
    },

    #[error("unknown text-anchor keyword \"{value}\" on <{tag}>")]
    UnknownAnchor { tag: String, value: String },
}

/// Every problem found in a tree, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

/// Check a tree, collecting every problem rather than stopping at the first.
pub fn validate(root: &Node) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if let Node::Element(el) = node {
            check_element(el, &mut errors);
            stack.extend(el.children.iter().rev());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        log::debug!("validation found {} problem(s)", errors.len());
        Err(ValidationErrors { errors })
    }
}

fn check_element(el: &Element, errors: &mut Vec<ValidationError>) {
    if !is_known_tag(&el.tag) {
        errors.push(ValidationError::UnknownTag {
            tag: el.tag.clone(),
        });
    }

    if is_shape_tag(&el.tag) && !el.children.is_empty() {
        errors.push(ValidationError::UnexpectedChildren {
            tag: el.tag.clone(),
            count: el.children.len(),
        });
    }

    let mut seen = HashSet::new();
    for attr in &el.attributes {
        let name = attr.name.as_str();
        let value = attr.value.as_str();

        if !seen.insert(name) {
            errors.push(ValidationError::DuplicateAttribute {
                tag: el.tag.clone(),
                name: name.to_string(),
            });
        }

        if NON_NEGATIVE.contains(&name) && value.starts_with('-') {
            errors.push(ValidationError::NegativeValue {
                tag: el.tag.clone(),
                name: name.to_string(),
                value: value.to_string(),
            });
        }

        if OPACITIES.contains(&name) {
            let in_range = value
                .parse::<f64>()
                .map(|v| (0.0..=1.0).contains(&v))
                .unwrap_or(false);
            if !in_range {
                errors.push(ValidationError::OpacityOutOfRange {
                    tag: el.tag.clone(),
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if name == "text-anchor" && TextAnchor::from_keyword(value).is_none() {
            errors.push(ValidationError::UnknownAnchor {
                tag: el.tag.clone(),
                value: value.to_string(),
            });
        }
    }
}
