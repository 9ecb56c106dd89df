use sprig_traits::NodeId;

use crate::{Props, Value};

/// A description of one node of the intended tree
#[derive(Clone, Debug, PartialEq)]
pub enum VNode {
    Text(String),
    Element(VElement),
    /// Children which render into `target` rather than at the portal's own position
    Portal(VPortal),
}

#[derive(Clone, Debug, PartialEq)]
pub struct VElement {
    /// Lower-cased, trimmed tag name. May carry a namespace prefix (`svg:circle`).
    pub tag: String,
    pub props: Props,
    pub children: Vec<VNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VPortal {
    pub target: NodeId,
    pub children: Vec<VNode>,
}

impl VPortal {
    /// The name portals are shown under in debug output
    pub const TAG: &'static str = "#portal";
}

impl VNode {
    pub fn kind(&self) -> &'static str {
        match self {
            VNode::Text(_) => "text",
            VNode::Element(_) => "element",
            VNode::Portal(_) => "portal",
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Text(_) => None,
            VNode::Element(el) => Some(&el.tag),
            VNode::Portal(_) => Some(VPortal::TAG),
        }
    }

    pub fn props(&self) -> Option<&Props> {
        match self {
            VNode::Element(el) => Some(&el.props),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&Value> {
        self.props().and_then(Props::key)
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Text(_) => &[],
            VNode::Element(el) => &el.children,
            VNode::Portal(portal) => &portal.children,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            VNode::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&VElement> {
        match self {
            VNode::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<&str> for VNode {
    fn from(value: &str) -> Self {
        VNode::Text(value.to_string())
    }
}

impl From<String> for VNode {
    fn from(value: String) -> Self {
        VNode::Text(value)
    }
}

impl From<VElement> for VNode {
    fn from(value: VElement) -> Self {
        VNode::Element(value)
    }
}

impl From<VPortal> for VNode {
    fn from(value: VPortal) -> Self {
        VNode::Portal(value)
    }
}
