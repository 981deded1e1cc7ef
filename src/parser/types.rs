//! Common types for parsers

/// Language identifiers whose documents are parsed as HTML
pub const HTML_LANGUAGE_IDS: [&str; 7] = [
    "html",
    "handlebars",
    "razor",
    "php",
    "vue-html",
    "django-html",
    "jinja-html",
];

/// Check whether a document with this language identifier holds HTML markup
pub fn is_html_language(language_id: &str) -> bool {
    HTML_LANGUAGE_IDS.iter().any(|&id| id == language_id)
}

/// An element of the parsed document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Tag name as written in the start tag (None when the name is missing)
    pub tag: Option<String>,
    /// Byte offset of the `<` opening the start tag
    pub start: usize,
    /// Byte offset just past the element (end tag included when present)
    pub end: usize,
    /// Byte offset just past the start tag's `>`
    pub start_tag_end: Option<usize>,
    /// Byte offset of the `</` opening the explicit end tag
    pub end_tag_start: Option<usize>,
    /// Child elements ordered by `start`
    pub children: Vec<Node>,
}

impl Node {
    /// Innermost node (this one or a descendant) containing `offset`
    pub fn find_node_at(&self, offset: usize) -> &Node {
        match find_child_at(&self.children, offset) {
            Some(child) => child.find_node_at(offset),
            None => self,
        }
    }
}

/// A parsed HTML document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlDocument {
    /// Top-level elements ordered by `start`
    pub roots: Vec<Node>,
}

impl HtmlDocument {
    pub fn new(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    /// Find the innermost node containing `offset`.
    ///
    /// A node contains offsets in `(start, end]`: the offset right before its
    /// `<` belongs to the parent, the offset right after its last `>` still
    /// belongs to the node.
    pub fn find_node_at(&self, offset: usize) -> Option<&Node> {
        find_child_at(&self.roots, offset).map(|node| node.find_node_at(offset))
    }
}

fn find_child_at(nodes: &[Node], offset: usize) -> Option<&Node> {
    let index = nodes.partition_point(|node| node.start < offset);
    let candidate = nodes.get(index.checked_sub(1)?)?;
    (offset > candidate.start && offset <= candidate.end).then_some(candidate)
}
