//! Tree documents used for saved character sheets.
//!
//! A document is a forest of named nodes under a single root. Each node holds
//! either text or child nodes, never both. The textual form is XML-compatible
//! so sheets stay readable and editable by hand.

mod reader;
mod writer;

pub use reader::parse_document;
pub use writer::render_document;

use thiserror::Error;

/// Error when reading a document from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The text ended inside a node
    #[error("Unexpected end of document")]
    UnexpectedEof,
    /// The text is not a well-formed tree
    #[error("Malformed document at byte {position}: {message}")]
    Malformed { position: usize, message: String },
    /// A closing tag names a different node than the one it closes
    #[error("Closing tag </{found}> does not match <{expected}>")]
    MismatchedTag { expected: String, found: String },
    /// An `&...;` reference that is neither predefined nor numeric
    #[error("Unknown entity '&{0};'")]
    InvalidEntity(String),
}

impl DocumentError {
    pub fn malformed(position: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            position,
            message: message.into(),
        }
    }
}

/// Content of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    /// Text content; empty text is written as a self-closing node
    Text(String),
    Children(Vec<Node>),
}

/// A named node in a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    body: NodeBody,
}

impl Node {
    /// A node holding text.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: NodeBody::Text(text.into()),
        }
    }

    /// A node with no content.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::text(name, String::new())
    }

    /// A node holding child nodes.
    pub fn parent(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            body: NodeBody::Children(children),
        }
    }

    /// Append a child. A text node becomes a parent node and loses its text.
    pub fn push(&mut self, child: Node) {
        if let NodeBody::Children(children) = &mut self.body {
            children.push(child);
            return;
        }
        self.body = NodeBody::Children(vec![child]);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    pub fn children(&self) -> &[Node] {
        match &self.body {
            NodeBody::Children(children) => children,
            NodeBody::Text(_) => &[],
        }
    }

    /// The node's text, or `None` when it has no text (empty or a parent).
    pub fn text_content(&self) -> Option<&str> {
        match &self.body {
            NodeBody::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// First direct child with the given name.
    pub fn find(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|child| child.name == name)
    }

    /// All direct children with the given name, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children().iter().filter(move |child| child.name == name)
    }

    /// Text of the named child, when the child exists and has text.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.find(name).and_then(Node::text_content)
    }

    /// Text of the named child, or the empty string when the child is
    /// missing or has no text.
    pub fn child_text_or_default(&self, name: &str) -> String {
        self.child_text(name).unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill() -> Node {
        Node::parent(
            "skill",
            vec![
                Node::text("name", "occult"),
                Node::text("rating", "3"),
                Node::empty("tooltip"),
            ],
        )
    }

    #[test]
    fn find_returns_first_direct_child() {
        let root = Node::parent("root", vec![skill(), Node::text("name", "top")]);
        assert_eq!(root.child_text("name"), Some("top"));
        assert_eq!(root.find("skill").and_then(|s| s.child_text("rating")), Some("3"));
    }

    #[test]
    fn find_all_keeps_document_order() {
        let root = Node::parent(
            "root",
            vec![
                Node::text("goodmessage", "a"),
                Node::text("badmessage", "b"),
                Node::text("goodmessage", "c"),
            ],
        );
        let texts: Vec<_> = root
            .find_all("goodmessage")
            .filter_map(Node::text_content)
            .collect();
        assert_eq!(texts, ["a", "c"]);
    }

    #[test]
    fn empty_text_reads_as_absent() {
        let node = skill();
        assert_eq!(node.child_text("tooltip"), None);
        assert_eq!(node.child_text_or_default("tooltip"), "");
        assert_eq!(node.child_text_or_default("rote"), "");
    }

    #[test]
    fn push_turns_text_node_into_parent() {
        let mut node = Node::text("notes", "ignored");
        node.push(Node::text("content", "kept"));
        assert_eq!(node.text_content(), None);
        assert_eq!(node.child_text("content"), Some("kept"));
    }
}
