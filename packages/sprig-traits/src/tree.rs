use markup5ever::{LocalName, QualName, ns};

use crate::events::Listener;

/// The identity of a node within a live document.
///
/// Ids are only meaningful to the document that issued them.
pub type NodeId = usize;

/// Build the name of an attribute in the null namespace
pub fn attr_name(local: &str) -> QualName {
    QualName::new(None, ns!(), LocalName::from(local))
}

/// Convert a script-style CSS property name to its CSS form.
///
/// `backgroundColor` becomes `background-color` and `WebkitTransition` becomes
/// `-webkit-transition`. Custom properties (`--mainColor`) are left untouched.
pub fn to_kebab_case(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Element state which lives on the node itself rather than in an attribute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Checked,
    Value,
    Disabled,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "checked" => Some(Field::Checked),
            "value" => Some(Field::Value),
            "disabled" => Some(Field::Disabled),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Checked => "checked",
            Field::Value => "value",
            Field::Disabled => "disabled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Text(String),
}

impl FieldValue {
    pub fn is_set(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(value) => *value,
            FieldValue::Text(_) => true,
        }
    }
}

/// The mutations a renderer performs against a live document.
///
/// Implementations may panic when handed a `NodeId` they did not issue, in the same way that
/// indexing out of bounds panics.
pub trait LiveTree {
    fn create_element(&mut self, name: QualName) -> NodeId;
    fn create_text_node(&mut self, text: &str) -> NodeId;
    /// Create an inert node which is never rendered. Used as a positional placeholder.
    fn create_comment_node(&mut self) -> NodeId;

    fn parent_id(&self, node_id: NodeId) -> Option<NodeId>;
    fn child_ids(&self, parent_id: NodeId) -> Vec<NodeId>;

    /// Append the given nodes as the last children of `parent_id`, detaching them from any
    /// previous parent.
    fn append_children(&mut self, parent_id: NodeId, child_ids: &[NodeId]);
    /// Insert `new_node_ids` where `anchor_node_id` sits, then drop the anchor.
    fn replace_node_with(&mut self, anchor_node_id: NodeId, new_node_ids: &[NodeId]);
    /// Detach and drop a node together with its subtree.
    fn remove_node(&mut self, node_id: NodeId);
    fn remove_children(&mut self, parent_id: NodeId) {
        for child_id in self.child_ids(parent_id) {
            self.remove_node(child_id);
        }
    }

    fn attribute(&self, node_id: NodeId, name: &QualName) -> Option<&str>;
    fn set_attribute(&mut self, node_id: NodeId, name: QualName, value: &str);
    fn clear_attribute(&mut self, node_id: NodeId, name: QualName);

    fn set_field(&mut self, node_id: NodeId, field: Field, value: FieldValue);

    /// Replace the whole inline style of a node with the declarations in `css`.
    fn set_style_text(&mut self, node_id: NodeId, css: &str);
    /// Set one inline style declaration. An empty `value` removes the declaration.
    fn set_style_property(&mut self, node_id: NodeId, name: &str, value: &str);

    fn add_event_listener(&mut self, node_id: NodeId, event_name: &str, listener: Listener);
    fn remove_event_listener(&mut self, node_id: NodeId, event_name: &str, listener: &Listener);
}
