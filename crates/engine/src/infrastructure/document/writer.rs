//! Pretty-printing of document trees.

use super::{Node, NodeBody};

const DECLARATION: &str = "<?xml version=\"1.0\" ?>\n";
const INDENT: &str = "  ";

/// Render a document with a declaration line and two-space indentation.
///
/// Text-only nodes are written on one line, and empty nodes self-close.
pub fn render_document(root: &Node) -> String {
    let mut out = String::from(DECLARATION);
    write_node(&mut out, root, 0);
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let indent = INDENT.repeat(depth);
    match node.body() {
        NodeBody::Text(text) if text.is_empty() => {
            out.push_str(&format!("{}<{}/>\n", indent, node.name()));
        }
        NodeBody::Children(children) if children.is_empty() => {
            out.push_str(&format!("{}<{}/>\n", indent, node.name()));
        }
        NodeBody::Text(text) => {
            out.push_str(&format!(
                "{}<{}>{}</{}>\n",
                indent,
                node.name(),
                escape_text(text),
                node.name()
            ));
        }
        NodeBody::Children(children) => {
            out.push_str(&format!("{}<{}>\n", indent, node.name()));
            for child in children {
                write_node(out, child, depth + 1);
            }
            out.push_str(&format!("{}</{}>\n", indent, node.name()));
        }
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_nodes_with_two_space_indent() {
        let root = Node::parent(
            "root",
            vec![
                Node::text("splat", "mage"),
                Node::parent(
                    "skill",
                    vec![Node::text("name", "occult"), Node::text("rating", "2")],
                ),
            ],
        );

        let expected = "<?xml version=\"1.0\" ?>\n\
<root>\n  <splat>mage</splat>\n  <skill>\n    <name>occult</name>\n    <rating>2</rating>\n  </skill>\n</root>\n";
        assert_eq!(render_document(&root), expected);
    }

    #[test]
    fn empty_nodes_self_close() {
        let root = Node::parent("root", vec![Node::empty("rating"), Node::parent("health", vec![])]);
        let text = render_document(&root);
        assert!(text.contains("  <rating/>\n"));
        assert!(text.contains("  <health/>\n"));
    }

    #[test]
    fn escapes_markup_characters() {
        let root = Node::text("content", "Fish & <chips> \"now\" it's");
        let text = render_document(&root);
        assert!(text.contains("<content>Fish &amp; &lt;chips&gt; &quot;now&quot; it's</content>"));
    }
}
