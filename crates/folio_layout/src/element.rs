//! Element tree
//!
//! A small retained tree of HTML-like elements built with a chained
//! builder API:
//!
//! ```rust
//! use folio_layout::element::{a, div, text};
//!
//! let nav = div()
//!     .class("flex gap-4")
//!     .child(a("#about").class("font-bold").child(text("About")))
//!     .child(a("#contact").child(text("Contact")));
//!
//! assert_eq!(nav.child_nodes().len(), 2);
//! assert_eq!(nav.text_content(), "AboutContact");
//! ```

use smallvec::SmallVec;

/// A node in the tree: an element or a run of text
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
            Node::Text(t) => out.push_str(t),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

/// An element with a tag, attributes and children
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: &'static str,
    id: Option<String>,
    classes: SmallVec<[String; 4]>,
    attrs: SmallVec<[(&'static str, String); 4]>,
    style: Option<String>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: SmallVec::new(),
            attrs: SmallVec::new(),
            style: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add classes (space separated; duplicates are ignored)
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.classes.iter().any(|c| c == class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Append inline style declarations
    pub fn style(mut self, declarations: impl AsRef<str>) -> Self {
        let declarations = declarations.as_ref().trim().trim_end_matches(';');
        if declarations.is_empty() {
            return self;
        }
        self.style = Some(match self.style.take() {
            Some(existing) => format!("{existing}; {declarations}"),
            None => declarations.to_string(),
        });
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Apply `f` only when `condition` holds
    pub fn when(self, condition: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            f(self)
        } else {
            self
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.attrs.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn inline_style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Direct children, elements and text alike
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Depth-first search for the element with `id`
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find_by_id(id))
    }

    /// Every descendant element (including `self`) carrying `class`
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&mut |el| {
            if el.has_class(class) {
                found.push(el);
            }
        });
        found
    }

    /// Every descendant element (including `self`) with `tag`
    pub fn find_all_by_tag<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk(&mut |el| {
            if el.tag == tag {
                found.push(el);
            }
        });
        found
    }

    fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        visit(self);
        for child in self.child_elements() {
            child.walk(visit);
        }
    }
}

pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn section(id: impl Into<String>) -> Element {
    Element::new("section").id(id)
}

pub fn a(href: impl Into<String>) -> Element {
    Element::new("a").attr("href", href)
}

pub fn button() -> Element {
    Element::new("button").attr("type", "button")
}

pub fn heading(level: u8, content: impl Into<String>) -> Element {
    let tag = match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        _ => "h4",
    };
    Element::new(tag).child(text(content))
}

pub fn p(content: impl Into<String>) -> Element {
    Element::new("p").child(text(content))
}

pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}
