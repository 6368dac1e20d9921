//! Preview wrapping for browser hosts.
//!
//! The host view receives rendered markup inside a `<header>` container.
//! How and when the host displays it is up to the host.

/// Wrap rendered markup in the container the preview host expects.
pub fn wrap(markup: &str) -> String {
    format!("<header>{markup}</header>")
}

/// Build a standalone HTML page showing `markup`.
pub fn page(title: &str, markup: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n");
    html.push_str(&format!("  <title>{title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&wrap(markup));
    html.push('\n');
    html.push_str("</body>\n</html>\n");
    html
}
