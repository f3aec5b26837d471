//! HTML serialisation of the element tree

use std::fmt::Write;

use crate::element::{Element, Node};

/// Elements written without a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serialise a node
///
/// Attributes are written as `id`, `class`, the rest in insertion order,
/// then `style`.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

pub fn render_element(element: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

/// Head contents for [`render_document`]
#[derive(Clone, Debug, Default)]
pub struct DocumentHead {
    pub title: String,
    /// Classes on the `<html>` element, e.g. `dark`
    pub root_class: Option<String>,
    /// Extra CSS placed in a `<style>` block
    pub stylesheet: String,
}

/// A complete HTML5 document with `body` as the only child of `<body>`
pub fn render_document(head: &DocumentHead, body: &Element) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    out.push_str("<html lang=\"en\"");
    if let Some(class) = head.root_class.as_deref().filter(|c| !c.is_empty()) {
        let _ = write!(out, " class=\"{}\"", escape_attr(class));
    }
    out.push_str(">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_text(&head.title));
    if !head.stylesheet.is_empty() {
        let _ = writeln!(out, "<style>{}</style>", head.stylesheet);
    }
    out.push_str("</head>\n<body>\n");
    write_element(&mut out, body);
    out.push_str("\n</body>\n</html>\n");
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(el) => write_element(out, el),
        Node::Text(t) => out.push_str(&escape_text(t)),
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(el.tag());

    if let Some(id) = el.element_id() {
        let _ = write!(out, " id=\"{}\"", escape_attr(id));
    }
    let classes: Vec<&str> = el.classes().collect();
    if !classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape_attr(&classes.join(" ")));
    }
    for (name, value) in el.attrs() {
        let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }
    if let Some(style) = el.inline_style() {
        let _ = write!(out, " style=\"{}\"", escape_attr(style));
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag()) {
        return;
    }
    for child in el.child_nodes() {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", el.tag());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{a, div, el, span, text};

    #[test]
    fn test_escaping() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_attr("say \"hi\""), "say &quot;hi&quot;");
    }

    #[test]
    fn test_attribute_order() {
        let link = a("#about")
            .attr("aria-current", "true")
            .style("color: red")
            .class("font-bold underline")
            .id("nav-about")
            .child(text("About"));
        assert_eq!(
            render_element(&link),
            "<a id=\"nav-about\" class=\"font-bold underline\" href=\"#about\" \
             aria-current=\"true\" style=\"color: red\">About</a>"
        );
    }

    #[test]
    fn test_void_and_nested() {
        let tree = div().child(el("hr")).child(span().child(text("x & y")));
        assert_eq!(render_element(&tree), "<div><hr><span>x &amp; y</span></div>");
    }

    #[test]
    fn test_document() {
        let head = DocumentHead {
            title: "Me & You".into(),
            root_class: Some("dark".into()),
            stylesheet: String::new(),
        };
        let html = render_document(&head, &div().id("root"));
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\" class=\"dark\">"));
        assert!(html.contains("<title>Me &amp; You</title>"));
        assert!(html.contains("<div id=\"root\"></div>"));
        assert!(!html.contains("<style>"));
    }
}
