use sprig_traits::NodeId;

use crate::BaseDocument;

/// Walks a subtree of a [`BaseDocument`] in document order (pre-order), yielding node ids.
/// The root of the walk is yielded first.
#[derive(Clone)]
pub struct TreeTraverser<'doc> {
    doc: &'doc BaseDocument,
    pending: Vec<NodeId>,
}

impl<'doc> TreeTraverser<'doc> {
    /// Walk the whole document
    pub fn new(doc: &'doc BaseDocument) -> Self {
        Self::new_with_root(doc, 0)
    }

    pub fn new_with_root(doc: &'doc BaseDocument, root: NodeId) -> Self {
        TreeTraverser {
            doc,
            pending: vec![root],
        }
    }

    /// Only yield element nodes
    pub fn elements(self) -> impl Iterator<Item = NodeId> + 'doc {
        let doc = self.doc;
        self.filter(move |id| doc.get_node(*id).is_some_and(|node| node.is_element()))
    }
}

impl Iterator for TreeTraverser<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node_id = self.pending.pop()?;
        let node = self.doc.get_node(node_id)?;
        // Reversed so that the first child is visited next
        self.pending.extend(node.children.iter().rev().copied());
        Some(node_id)
    }
}

/// Yields the parent of a node, then its parent, up to and including the document.
#[derive(Clone)]
pub struct AncestorTraverser<'doc> {
    doc: &'doc BaseDocument,
    next: Option<NodeId>,
}

impl<'doc> AncestorTraverser<'doc> {
    pub fn new(doc: &'doc BaseDocument, node_id: NodeId) -> Self {
        let next = doc.get_node(node_id).and_then(|node| node.parent);
        AncestorTraverser { doc, next }
    }
}

impl Iterator for AncestorTraverser<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node_id = self.next?;
        self.next = self.doc.get_node(node_id).and_then(|node| node.parent);
        Some(node_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> markup5ever::QualName {
        markup5ever::QualName::new(None, markup5ever::ns!(html), markup5ever::local_name!("p"))
    }

    #[test]
    fn walks_in_document_order() {
        let mut doc = BaseDocument::default();
        let a = doc.create_text_node("a");
        let b = doc.create_element(p());
        let c = doc.create_text_node("c");
        let d = doc.create_element(p());
        doc.append(b, &[c]);
        doc.append(0, &[a, b, d]);

        let order: Vec<NodeId> = TreeTraverser::new(&doc).collect();
        assert_eq!(order, vec![0, a, b, c, d]);

        let elements: Vec<NodeId> = TreeTraverser::new_with_root(&doc, b).elements().collect();
        assert_eq!(elements, vec![b]);
        let elements: Vec<NodeId> = TreeTraverser::new(&doc).elements().collect();
        assert_eq!(elements, vec![b, d]);

        let ancestors: Vec<NodeId> = AncestorTraverser::new(&doc, c).collect();
        assert_eq!(ancestors, vec![b, 0]);
        assert_eq!(AncestorTraverser::new(&doc, 0).count(), 0);
    }
}
