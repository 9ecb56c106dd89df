use sprig_traits::{LiveTree, NodeId};

use crate::{VNode, resolve_name, set_property};

/// Create the live nodes for a description and return the top one.
///
/// When `parent` is given the new node is appended to it. `None` mounts an empty text node.
/// A portal mounts a comment placeholder in its own position and its children into its target.
pub fn mount<T: LiveTree + ?Sized>(
    tree: &mut T,
    node: Option<&VNode>,
    parent: Option<NodeId>,
) -> NodeId {
    let node_id = match node {
        None => tree.create_text_node(""),
        Some(VNode::Text(text)) => tree.create_text_node(text),
        Some(VNode::Portal(portal)) => {
            for child in &portal.children {
                mount(tree, Some(child), Some(portal.target));
            }
            tree.create_comment_node()
        }
        Some(VNode::Element(element)) => {
            let node_id = tree.create_element(resolve_name(&element.tag));
            for child in &element.children {
                mount(tree, Some(child), Some(node_id));
            }
            for (name, value) in element.props.iter() {
                set_property(tree, node_id, name, Some(value), None);
            }
            node_id
        }
    };

    if let Some(parent) = parent {
        tree.append_children(parent, &[node_id]);
    }
    node_id
}
