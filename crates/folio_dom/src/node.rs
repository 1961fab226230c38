//! Declarative element tree.
//!
//! A [`Node`] describes a DOM subtree without touching the browser. Trees are
//! built with a chaining builder API, can be rendered to an HTML string on any
//! target, and are mounted into the live DOM on WASM (see `mount`).

/// DOM events a node can subscribe to.
///
/// Each subscription carries the message to emit when the event fires; the
/// rendering layer never sees raw events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    PointerEnter,
    PointerLeave,
}

impl EventKind {
    /// The `addEventListener` event name.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::PointerEnter => "mouseenter",
            EventKind::PointerLeave => "mouseleave",
        }
    }
}

/// A node in the element tree, parameterized over the application message type.
pub enum Node<M> {
    Element(ElementNode<M>),
    Text(String),
    /// Raw markup spliced in verbatim (inline SVG icons). The caller is
    /// responsible for the markup being well-formed.
    Raw(String),
}

/// An element with tag, attributes and children.
pub struct ElementNode<M> {
    pub tag: &'static str,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub styles: Vec<(&'static str, String)>,
    pub handlers: Vec<(EventKind, M)>,
    pub children: Vec<Node<M>>,
}

/// Create an element node with the given tag.
pub fn el<M>(tag: &'static str) -> Node<M> {
    Node::Element(ElementNode {
        tag,
        id: None,
        classes: Vec::new(),
        attrs: Vec::new(),
        styles: Vec::new(),
        handlers: Vec::new(),
        children: Vec::new(),
    })
}

/// Create a text node. The content is escaped when rendered.
pub fn text<M>(content: impl Into<String>) -> Node<M> {
    Node::Text(content.into())
}

/// Splice raw SVG markup into the tree.
pub fn raw_svg<M>(markup: impl Into<String>) -> Node<M> {
    Node::Raw(markup.into())
}

macro_rules! tag_fns {
    ($($fn_name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("Shorthand for `el(\"", $tag, "\")`.")]
            pub fn $fn_name<M>() -> Node<M> {
                el($tag)
            }
        )*
    };
}

tag_fns! {
    div => "div",
    span => "span",
    section => "section",
    header => "header",
    footer => "footer",
    nav => "nav",
    main_el => "main",
    a => "a",
    p => "p",
    button => "button",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    ul => "ul",
    li => "li",
}

impl<M> Node<M> {
    /// Set the element id. No-op on text/raw nodes.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        if let Node::Element(ref mut e) = self {
            e.id = Some(id.into());
        }
        self
    }

    /// Append one or more space-separated classes.
    pub fn class(mut self, classes: impl Into<String>) -> Self {
        if let Node::Element(ref mut e) = self {
            e.classes
                .extend(classes.into().split_whitespace().map(str::to_string));
        }
        self
    }

    /// Set an attribute.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element(ref mut e) = self {
            e.attrs.push((name, value.into()));
        }
        self
    }

    /// Set an inline style property.
    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element(ref mut e) = self {
            e.styles.push((property, value.into()));
        }
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: Node<M>) -> Self {
        if let Node::Element(ref mut e) = self {
            e.children.push(child);
        }
        self
    }

    /// Append several child nodes.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node<M>>) -> Self {
        if let Node::Element(ref mut e) = self {
            e.children.extend(nodes);
        }
        self
    }

    /// Append an escaped text child.
    pub fn text_child(self, content: impl Into<String>) -> Self {
        self.child(text(content))
    }

    /// Emit `message` when the element is clicked.
    pub fn on_click(self, message: M) -> Self {
        self.on(EventKind::Click, message)
    }

    /// Emit `message` when the pointer enters the element.
    pub fn on_pointer_enter(self, message: M) -> Self {
        self.on(EventKind::PointerEnter, message)
    }

    /// Emit `message` when the pointer leaves the element.
    pub fn on_pointer_leave(self, message: M) -> Self {
        self.on(EventKind::PointerLeave, message)
    }

    fn on(mut self, kind: EventKind, message: M) -> Self {
        if let Node::Element(ref mut e) = self {
            e.handlers.push((kind, message));
        }
        self
    }

    /// Render the tree to an HTML string.
    ///
    /// Event handlers have no textual representation; everything else is
    /// rendered exactly as it would be mounted.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape(t)),
            Node::Raw(markup) => out.push_str(markup),
            Node::Element(e) => {
                out.push('<');
                out.push_str(e.tag);
                if let Some(ref id) = e.id {
                    out.push_str(&format!(" id=\"{}\"", escape(id)));
                }
                if !e.classes.is_empty() {
                    out.push_str(&format!(" class=\"{}\"", escape(&e.classes.join(" "))));
                }
                for (name, value) in &e.attrs {
                    out.push_str(&format!(" {}=\"{}\"", name, escape(value)));
                }
                if !e.styles.is_empty() {
                    let style = e
                        .styles
                        .iter()
                        .map(|(p, v)| format!("{}:{}", p, v))
                        .collect::<Vec<_>>()
                        .join(";");
                    out.push_str(&format!(" style=\"{}\"", escape(&style)));
                }
                out.push('>');
                for child in &e.children {
                    child.write_html(out);
                }
                if !is_void(e.tag) {
                    out.push_str(&format!("</{}>", e.tag));
                }
            }
        }
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "br" | "hr" | "img" | "input" | "meta" | "link")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum Msg {
        Clicked,
    }

    #[test]
    fn test_simple_element() {
        let node: Node<Msg> = div().id("root").class("a b").text_child("hi");
        assert_eq!(node.to_html(), "<div id=\"root\" class=\"a b\">hi</div>");
    }

    #[test]
    fn test_class_accumulates() {
        let node: Node<Msg> = span().class("one").class("two three");
        assert_eq!(node.to_html(), "<span class=\"one two three\"></span>");
    }

    #[test]
    fn test_nested_children() {
        let node: Node<Msg> = ul().children([li().text_child("a"), li().text_child("b")]);
        assert_eq!(node.to_html(), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_text_is_escaped() {
        let node: Node<Msg> = p().text_child("a < b & c");
        assert_eq!(node.to_html(), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_raw_svg_not_escaped() {
        let node: Node<Msg> = div().child(raw_svg("<svg viewBox=\"0 0 24 24\"></svg>"));
        assert_eq!(node.to_html(), "<div><svg viewBox=\"0 0 24 24\"></svg></div>");
    }

    #[test]
    fn test_handlers_have_no_markup() {
        let node: Node<Msg> = button().on_click(Msg::Clicked).text_child("go");
        assert_eq!(node.to_html(), "<button>go</button>");
    }

    #[test]
    fn test_attrs_and_styles() {
        let node: Node<Msg> = a()
            .attr("href", "#about")
            .style("opacity", "0.5")
            .text_child("About");
        assert_eq!(
            node.to_html(),
            "<a href=\"#about\" style=\"opacity:0.5\">About</a>"
        );
    }

    #[test]
    fn test_builder_noop_on_text() {
        let node: Node<Msg> = text("plain").class("ignored").id("also-ignored");
        assert_eq!(node.to_html(), "plain");
    }
}
