//! HTML parser backed by tree-sitter-html

use crate::parser::traits::{ParseError, Parser};
use crate::parser::types::{HtmlDocument, Node, is_html_language};
use tracing::warn;

/// Node kinds that become elements of the tree
const ELEMENT_KINDS: [&str; 3] = ["element", "script_element", "style_element"];

/// Elements that never have content or an end tag
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Parser for HTML documents
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for HtmlParser {
    fn can_parse(&self, language_id: &str) -> bool {
        is_html_language(language_id)
    }

    fn parse(&self, content: &str) -> Result<HtmlDocument, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_html::LANGUAGE;
        parser.set_language(&language.into()).map_err(|e| {
            warn!("Failed to set HTML language for tree-sitter: {}", e);
            ParseError::TreeSitter(e.to_string())
        })?;

        let tree = parser.parse(content, None).ok_or_else(|| {
            warn!("Failed to parse HTML content");
            ParseError::ParseFailed("Failed to parse HTML".to_string())
        })?;

        Ok(HtmlDocument::new(self.collect_elements(
            tree.root_node(),
            content,
        )))
    }
}

impl HtmlParser {
    /// Collect the elements directly below `parent`.
    ///
    /// Tree-sitter recovery leaves unclosed tags as bare `start_tag` nodes
    /// inside `ERROR` nodes. Those are rebuilt into elements: an open tag
    /// takes the following siblings as children until a matching end tag,
    /// and anything still open spans to the end of `parent`.
    fn collect_elements(&self, parent: tree_sitter::Node, content: &str) -> Vec<Node> {
        let mut elements = Elements::default();
        self.collect_into(parent, content, &mut elements);
        elements.finish(parent.end_byte())
    }

    fn collect_into(&self, parent: tree_sitter::Node, content: &str, elements: &mut Elements) {
        let mut cursor = parent.walk();
        for child in parent.children(&mut cursor) {
            match child.kind() {
                kind if ELEMENT_KINDS.contains(&kind) => {
                    elements.push(self.build_element(child, content));
                }
                "start_tag" | "self_closing_tag" => {
                    let tag = self.tag_name(child, content);
                    let closed = child.kind() == "self_closing_tag"
                        || tag.as_deref().is_some_and(is_void_element);
                    let node = Node {
                        tag,
                        start: child.start_byte(),
                        end: child.end_byte(),
                        start_tag_end: Some(child.end_byte()),
                        ..Default::default()
                    };
                    if closed {
                        elements.push(node);
                    } else {
                        elements.open.push(node);
                    }
                }
                "end_tag" | "erroneous_end_tag" if child.end_byte() > child.start_byte() => {
                    if let Some(name) = self.tag_name(child, content) {
                        elements.close(&name, child.start_byte(), child.end_byte());
                    }
                }
                _ if child.is_error() => self.collect_into(child, content, elements),
                _ => {}
            }
        }
    }

    fn build_element(&self, element: tree_sitter::Node, content: &str) -> Node {
        let mut node = Node {
            start: element.start_byte(),
            end: element.end_byte(),
            ..Default::default()
        };

        let mut cursor = element.walk();
        for child in element.children(&mut cursor) {
            match child.kind() {
                "start_tag" | "self_closing_tag" => {
                    node.tag = self.tag_name(child, content);
                    node.start_tag_end = Some(child.end_byte());
                }
                "end_tag" if child.end_byte() > child.start_byte() => {
                    node.end_tag_start = Some(child.start_byte());
                }
                kind if ELEMENT_KINDS.contains(&kind) => {
                    node.children.push(self.build_element(child, content));
                }
                _ if child.is_error() => {
                    node.children.extend(self.collect_elements(child, content));
                }
                _ => {}
            }
        }

        node
    }

    /// Tag name text of a start, self-closing or end tag
    fn tag_name(&self, tag: tree_sitter::Node, content: &str) -> Option<String> {
        let mut cursor = tag.walk();
        tag.children(&mut cursor)
            .find(|child| {
                matches!(child.kind(), "tag_name" | "erroneous_end_tag_name") && !child.is_missing()
            })
            .map(|child| content[child.byte_range()].to_string())
    }
}

/// Elements being rebuilt from a recovered region, with the stack of tags
/// that are still open
#[derive(Default)]
struct Elements {
    closed: Vec<Node>,
    open: Vec<Node>,
}

impl Elements {
    /// Add a finished node to the innermost open tag, or to the top level
    fn push(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.closed.push(node),
        }
    }

    /// Close the innermost open tag named `name`; tags opened after it end
    /// where the end tag starts. Unmatched end tags are ignored.
    fn close(&mut self, name: &str, end_tag_start: usize, end_tag_end: usize) {
        let Some(index) = self.open.iter().rposition(|node| {
            node.tag
                .as_deref()
                .is_some_and(|tag| tag.eq_ignore_ascii_case(name))
        }) else {
            return;
        };

        while self.open.len() > index + 1 {
            if let Some(mut node) = self.open.pop() {
                node.end = end_tag_start;
                self.push(node);
            }
        }
        if let Some(mut node) = self.open.pop() {
            node.end_tag_start = Some(end_tag_start);
            node.end = end_tag_end;
            self.push(node);
        }
    }

    /// Close every open tag at `end` and return the top-level nodes
    fn finish(mut self, end: usize) -> Vec<Node> {
        while let Some(mut node) = self.open.pop() {
            node.end = end.max(node.end);
            self.push(node);
        }
        self.closed
    }
}

fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|&void| void.eq_ignore_ascii_case(tag))
}
