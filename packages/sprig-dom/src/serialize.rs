use sprig_traits::NodeId;

use crate::BaseDocument;
use crate::node::NodeData;

/// Elements which never have children and are serialized without a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

impl BaseDocument {
    /// Serialize a node and its subtree to HTML
    pub fn outer_html(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(&mut out, node_id);
        out
    }

    /// Serialize the children of a node to HTML
    pub fn inner_html(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        if let Some(node) = self.get_node(node_id) {
            for child_id in &node.children {
                self.write_node(&mut out, *child_id);
            }
        }
        out
    }

    fn write_node(&self, out: &mut String, node_id: NodeId) {
        let Some(node) = self.get_node(node_id) else {
            return;
        };
        match &node.data {
            NodeData::Document => {
                for child_id in &node.children {
                    self.write_node(out, *child_id);
                }
            }
            NodeData::Text(data) => {
                out.push_str(&html_escape::encode_text(&data.content));
            }
            NodeData::Comment => out.push_str("<!---->"),
            NodeData::Element(data) => {
                let tag = &*data.name.local;
                out.push('<');
                out.push_str(tag);
                for attr in data.attrs.iter() {
                    out.push(' ');
                    out.push_str(&attr.name.local);
                    out.push_str("=\"");
                    out.push_str(&html_escape::encode_double_quoted_attribute(&attr.value));
                    out.push('"');
                }
                if !data.style.is_empty() {
                    out.push_str(" style=\"");
                    let css = data.style.to_css_text();
                    out.push_str(&html_escape::encode_double_quoted_attribute(&css));
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&tag) && node.children.is_empty() {
                    return;
                }
                for child_id in &node.children {
                    self.write_node(out, *child_id);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}
