use markup5ever::QualName;
use slab::Slab;
use sprig_traits::NodeId;

use crate::mutator::Mutation;
use crate::node::{ElementData, Node, NodeData, TextNodeData};
use crate::traversal::{AncestorTraverser, TreeTraverser};
use crate::{DocumentConfig, DocumentMutator, trace};

pub struct BaseDocument {
    /// A slab-backed tree of nodes. Node 0 is always the document itself.
    pub(crate) nodes: Box<Slab<Node>>,

    /// Mutations recorded by `DocumentMutator`s, if enabled in the `DocumentConfig`
    pub(crate) mutations: Option<Vec<Mutation>>,
}

impl Default for BaseDocument {
    fn default() -> Self {
        Self::new(DocumentConfig::default())
    }
}

impl BaseDocument {
    /// Create a new (empty) [`BaseDocument`] with the specified configuration
    pub fn new(config: DocumentConfig) -> Self {
        let nodes = match config.initial_capacity {
            Some(capacity) => Slab::with_capacity(capacity),
            None => Slab::new(),
        };

        let mut doc = Self {
            nodes: Box::new(nodes),
            mutations: config.record_mutations.then(Vec::new),
        };

        // Initialise document with root Document node
        doc.create_node(NodeData::Document);

        doc
    }

    pub fn root_node(&self) -> &Node {
        &self.nodes[0]
    }

    pub fn get_node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn get_node_mut(&mut self, node_id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node_id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn mutate<'doc>(&'doc mut self) -> DocumentMutator<'doc> {
        DocumentMutator::new(self)
    }

    /// Drain the mutation log. Always empty unless `record_mutations` was set.
    pub fn take_mutations(&mut self) -> Vec<Mutation> {
        self.mutations.as_mut().map(std::mem::take).unwrap_or_default()
    }

    pub(crate) fn record(&mut self, mutation: impl FnOnce() -> Mutation) {
        if let Some(log) = self.mutations.as_mut() {
            log.push(mutation());
        }
    }

    pub(crate) fn create_node(&mut self, node_data: NodeData) -> NodeId {
        let entry = self.nodes.vacant_entry();
        let id = entry.key();
        entry.insert(Node::new(id, node_data));
        id
    }

    pub(crate) fn create_element(&mut self, name: QualName) -> NodeId {
        self.create_node(NodeData::Element(ElementData::new(name)))
    }

    pub(crate) fn create_text_node(&mut self, text: &str) -> NodeId {
        let content = text.to_string();
        let data = NodeData::Text(TextNodeData::new(content));
        self.create_node(data)
    }

    pub(crate) fn append(&mut self, parent_id: NodeId, child_ids: &[NodeId]) {
        for child_id in child_ids.iter().copied() {
            self.detach(child_id);
            self.nodes[parent_id].children.push(child_id);
            self.nodes[child_id].parent = Some(parent_id);
        }
    }

    pub(crate) fn insert_before(&mut self, anchor_id: NodeId, new_ids: &[NodeId]) {
        for new_id in new_ids.iter().copied() {
            self.detach(new_id);
        }

        let Some(parent_id) = self.nodes[anchor_id].parent else {
            return;
        };
        let parent = &mut self.nodes[parent_id];
        let Some(idx) = parent.index_of_child(anchor_id) else {
            return;
        };
        parent.children.splice(idx..idx, new_ids.iter().copied());

        for new_id in new_ids.iter().copied() {
            self.nodes[new_id].parent = Some(parent_id);
        }
    }

    /// Unlink a node from its parent without dropping it
    fn detach(&mut self, node_id: NodeId) {
        let Some(parent_id) = self.nodes[node_id].parent.take() else {
            return;
        };
        self.nodes[parent_id].children.retain(|id| *id != node_id);
    }

    /// Detach a node and drop it together with all of its descendants
    pub(crate) fn remove_and_drop_node(&mut self, node_id: NodeId) -> Option<Node> {
        fn remove_ignoring_parent(doc: &mut BaseDocument, node_id: NodeId) -> Option<Node> {
            let node = doc.nodes.try_remove(node_id);
            if let Some(node) = &node {
                for &child in &node.children {
                    remove_ignoring_parent(doc, child);
                }
            }
            node
        }

        if node_id == 0 {
            trace!("Refusing to remove the document node");
            return None;
        }

        self.detach(node_id);
        remove_ignoring_parent(self, node_id)
    }

    /// The node followed by all of its ancestors, ending at the document
    pub fn node_chain(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::with_capacity(16);
        chain.push(node_id);
        chain.extend(AncestorTraverser::new(self, node_id));
        chain
    }

    /// The concatenated content of every text node within the subtree, in document order
    pub fn text_content(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        for id in TreeTraverser::new_with_root(self, node_id) {
            if let Some(text) = self.nodes[id].text_data() {
                out.push_str(&text.content);
            }
        }
        out
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        TreeTraverser::new(self).find(|node_id| {
            self.nodes[*node_id]
                .element_data()
                .is_some_and(|el| el.id() == Some(id))
        })
    }

    /// All elements within the subtree of `root_id` with the given local name, in document order
    pub fn elements_by_tag_name(&self, root_id: NodeId, tag: &str) -> Vec<NodeId> {
        TreeTraverser::new_with_root(self, root_id)
            .filter(|node_id| {
                self.nodes[*node_id]
                    .element_data()
                    .is_some_and(|el| &*el.name.local == tag)
            })
            .collect()
    }

    /// Print an outline of the whole document to stdout
    pub fn print_tree(&self) {
        self.print_subtree(0);
    }

    pub fn print_subtree(&self, node_id: NodeId) {
        print!("{}", crate::util::debug_tree(self, node_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_traits::LiveTree;

    fn div() -> QualName {
        QualName::new(None, markup5ever::ns!(html), markup5ever::local_name!("div"))
    }

    #[test]
    fn new_document_has_a_root() {
        let doc = BaseDocument::default();
        assert_eq!(doc.node_count(), 1);
        assert_eq!(doc.root_node().node_type(), 9);
    }

    #[test]
    fn remove_drops_the_whole_subtree() {
        let mut doc = BaseDocument::default();
        let mut mutr = doc.mutate();
        let outer = mutr.create_element(div());
        let inner = mutr.create_element(div());
        let text = mutr.create_text_node("hi");
        mutr.append_children(inner, &[text]);
        mutr.append_children(outer, &[inner]);
        mutr.append_children(0, &[outer]);
        mutr.remove_node(outer);
        drop(mutr);

        assert_eq!(doc.node_count(), 1);
        assert!(doc.root_node().children.is_empty());
        assert!(doc.get_node(text).is_none());
    }

    #[test]
    fn insert_before_keeps_order() {
        let mut doc = BaseDocument::default();
        let a = doc.create_text_node("a");
        let b = doc.create_text_node("b");
        let c = doc.create_text_node("c");
        doc.append(0, &[a, c]);
        doc.insert_before(c, &[b]);
        assert_eq!(doc.root_node().children, vec![a, b, c]);
        assert_eq!(doc.text_content(0), "abc");
    }

    #[test]
    fn append_moves_between_parents() {
        let mut doc = BaseDocument::default();
        let first = doc.create_element(div());
        let second = doc.create_element(div());
        let text = doc.create_text_node("x");
        doc.append(0, &[first, second]);
        doc.append(first, &[text]);
        doc.append(second, &[text]);
        assert!(doc.nodes[first].children.is_empty());
        assert_eq!(doc.nodes[second].children, vec![text]);
        assert_eq!(doc.nodes[text].parent, Some(second));
    }

    #[test]
    fn finds_elements() {
        let mut doc = BaseDocument::default();
        let mut mutr = doc.mutate();
        let outer = mutr.create_element(div());
        let inner = mutr.create_element(div());
        mutr.set_attribute(inner, sprig_traits::attr_name("id"), "inner");
        mutr.append_children(outer, &[inner]);
        mutr.append_children(0, &[outer]);
        drop(mutr);

        assert_eq!(doc.get_element_by_id("inner"), Some(inner));
        assert_eq!(doc.get_element_by_id("missing"), None);
        assert_eq!(doc.elements_by_tag_name(0, "div"), vec![outer, inner]);
        assert_eq!(doc.node_chain(inner), vec![inner, outer, 0]);
    }
}
