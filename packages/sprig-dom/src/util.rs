use std::fmt::Write;

use sprig_traits::NodeId;

use crate::BaseDocument;
use crate::node::NodeData;

/// Longest text shown for a text node before it is cut off
const TEXT_PREVIEW_LEN: usize = 10;

/// Render a subtree as an indented outline, one node per line, with node ids.
/// Whitespace-only text nodes are left out.
pub fn debug_tree(doc: &BaseDocument, node_id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, &mut out, node_id, 0);
    out
}

fn write_node(doc: &BaseDocument, out: &mut String, node_id: NodeId, depth: usize) {
    let Some(node) = doc.get_node(node_id) else {
        return;
    };
    let indent = "  ".repeat(depth);

    // Writing to a String cannot fail
    let _ = match &node.data {
        NodeData::Document => writeln!(out, "{indent}#document {node_id}"),
        NodeData::Comment => writeln!(out, "{indent}#comment {node_id}"),
        NodeData::Text(text) => {
            let content = text.content.trim();
            if content.is_empty() {
                return;
            }
            match content.char_indices().nth(TEXT_PREVIEW_LEN) {
                Some((cut, _)) => writeln!(
                    out,
                    "{indent}#text {node_id} {:?}...",
                    &content[..cut]
                ),
                None => writeln!(out, "{indent}#text {node_id} {content:?}"),
            }
        }
        NodeData::Element(element) => {
            let _ = write!(out, "{indent}<{} {node_id}", element.name.local);
            for attr in element.attrs.iter() {
                let _ = write!(out, " {}=\"{}\"", attr.name.local, attr.value);
            }
            if !element.style.is_empty() {
                let _ = write!(out, " style=\"{}\"", element.style.to_css_text());
            }
            if !element.listeners.is_empty() {
                let _ = write!(out, " [{} listeners]", element.listeners.len());
            }
            writeln!(out, ">")
        }
    };

    for child_id in &node.children {
        write_node(doc, out, *child_id, depth + 1);
    }
}
