//! Abstract UI tree produced by the widget views.
//!
//! The tree only describes elements; turning it into something visible is up
//! to whichever renderer the host uses.

use crate::model::abort_handle::AbortHandle;
use serde::Serialize;
use std::collections::BTreeMap;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

pub type Style = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: Style,
    /// Event name to handler
    #[serde(skip)]
    pub on: BTreeMap<&'static str, AbortHandle>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Creates an HTML element from a `tag.class1.class2` selector
pub fn h(selector: &str) -> Element {
    let mut parts = selector.split('.');
    let tag = parts.next().unwrap_or_default();
    Element {
        tag: if tag.is_empty() { "div".into() } else { tag.into() },
        classes: parts.filter(|c| !c.is_empty()).map(String::from).collect(),
        ..Default::default()
    }
}

/// Creates an element in the SVG namespace
pub fn s(tag: &str) -> Element {
    Element {
        namespace: Some(SVG_NAMESPACE),
        ..h(tag)
    }
}

impl Element {
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attrs.insert(name.into(), value.to_string());
        self
    }

    pub fn style(mut self, style: &Style) -> Self {
        self.style
            .extend(style.iter().map(|(k, v)| (*k, v.clone())));
        self
    }

    pub fn on(mut self, event: &'static str, handler: AbortHandle) -> Self {
        self.on.insert(event, handler);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Appends a text node when `text` is present
    pub fn text(self, text: Option<&str>) -> Self {
        match text {
            Some(t) => self.child(Node::Text(t.to_string())),
            None => self,
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Depth-first search for the first descendant (or self) matching `pred`
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(e) => e.find(pred),
            Node::Text(_) => None,
        })
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(&|e| e.has_class(class))
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        self.find(&|e| e.tag == tag)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .map(|child| match child {
                Node::Element(e) => e.text_content(),
                Node::Text(t) => t.clone(),
            })
            .collect()
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        let el = h("div.title.big");
        assert_eq!(el.tag, "div");
        assert_eq!(el.classes, vec!["title", "big"]);
        assert_eq!(el.namespace, None);
    }

    #[test]
    fn test_svg_namespace() {
        let el = s("rect");
        assert_eq!(el.tag, "rect");
        assert_eq!(el.namespace, Some(SVG_NAMESPACE));
    }

    #[test]
    fn test_find_and_text_content() {
        let tree = h("div")
            .child(h("span.a").child("hello "))
            .child(h("span.b").child(h("em").child("world")));
        assert_eq!(tree.text_content(), "hello world");
        assert_eq!(tree.find_by_class("b").unwrap().text_content(), "world");
        assert!(tree.find_by_tag("strong").is_none());
    }

    #[test]
    fn test_text_none_adds_nothing() {
        assert!(h("span").text(None).children.is_empty());
    }

    #[test]
    fn test_serialize_skips_handlers() {
        let el = h("a").on("click", AbortHandle::new(|| {})).child("x");
        let json = serde_json::to_value(Node::from(el)).unwrap();
        assert_eq!(json["tag"], "a");
        assert!(json.get("on").is_none());
        assert_eq!(json["children"][0], "x");
    }
}
