use sprig_traits::NodeId;

use super::ElementData;

/// A node of a [`BaseDocument`](crate::BaseDocument)
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    /// `None` for the document and for detached nodes
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(id: NodeId, data: NodeData) -> Self {
        Node {
            id,
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    pub fn is_text_node(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.data, NodeData::Comment)
    }

    /// The DOM `nodeType` of this node
    pub fn node_type(&self) -> u16 {
        match self.data {
            NodeData::Element(_) => 1,
            NodeData::Text(_) => 3,
            NodeData::Comment => 8,
            NodeData::Document => 9,
        }
    }

    pub fn element_data(&self) -> Option<&ElementData> {
        if let NodeData::Element(element) = &self.data {
            Some(element)
        } else {
            None
        }
    }

    pub fn element_data_mut(&mut self) -> Option<&mut ElementData> {
        if let NodeData::Element(element) = &mut self.data {
            Some(element)
        } else {
            None
        }
    }

    pub fn text_data(&self) -> Option<&TextNodeData> {
        if let NodeData::Text(text) = &self.data {
            Some(text)
        } else {
            None
        }
    }

    pub fn index_of_child(&self, child_id: NodeId) -> Option<usize> {
        self.children.iter().position(|id| *id == child_id)
    }
}

#[derive(Debug, Clone)]
pub enum NodeData {
    /// The root of the tree. There is exactly one, with id 0.
    Document,
    Element(ElementData),
    Text(TextNodeData),
    /// An empty comment, used as a placeholder
    Comment,
}

impl NodeData {
    pub fn kind(&self) -> &'static str {
        match self {
            NodeData::Document => "document",
            NodeData::Element(_) => "element",
            NodeData::Text(_) => "text",
            NodeData::Comment => "comment",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextNodeData {
    pub content: String,
}

impl TextNodeData {
    pub fn new(content: String) -> Self {
        TextNodeData { content }
    }
}
