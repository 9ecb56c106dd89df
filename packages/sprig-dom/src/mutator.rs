use markup5ever::{LocalName, QualName};
use sprig_traits::events::Listener;
use sprig_traits::{Field, FieldValue, LiveTree, NodeId};

use crate::node::InlineStyle;
use crate::{BaseDocument, trace};

/// A single change applied through a [`DocumentMutator`]
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateElement { id: NodeId, name: LocalName },
    CreateText { id: NodeId },
    CreateComment { id: NodeId },
    AppendChildren { parent: NodeId, children: Vec<NodeId> },
    ReplaceNode { anchor: NodeId, with: Vec<NodeId> },
    RemoveNode { id: NodeId },
    SetAttribute { id: NodeId, name: LocalName, value: String },
    ClearAttribute { id: NodeId, name: LocalName },
    SetField { id: NodeId, field: Field, value: FieldValue },
    SetStyle { id: NodeId },
    AddListener { id: NodeId, event: String },
    RemoveListener { id: NodeId, event: String },
}

impl Mutation {
    /// Whether this mutation created, replaced or removed a node
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Mutation::CreateElement { .. }
                | Mutation::CreateText { .. }
                | Mutation::CreateComment { .. }
                | Mutation::AppendChildren { .. }
                | Mutation::ReplaceNode { .. }
                | Mutation::RemoveNode { .. }
        )
    }
}

pub struct DocumentMutator<'doc> {
    /// Document is public as an escape hatch, but users of this API should ideally avoid using it
    /// and prefer exposing additional functionality in DocumentMutator.
    pub doc: &'doc mut BaseDocument,

    applied: usize,
}

impl Drop for DocumentMutator<'_> {
    fn drop(&mut self) {
        self.flush();
    }
}

impl DocumentMutator<'_> {
    pub fn new<'doc>(doc: &'doc mut BaseDocument) -> DocumentMutator<'doc> {
        DocumentMutator { doc, applied: 0 }
    }

    fn record(&mut self, mutation: impl FnOnce() -> Mutation) {
        self.applied += 1;
        self.doc.record(mutation);
    }

    fn element_mut(&mut self, node_id: NodeId) -> Option<&mut crate::ElementData> {
        self.doc.nodes[node_id].element_data_mut()
    }

    fn flush(&mut self) {
        if self.applied > 0 {
            trace!("Applied {} mutations", self.applied);
        }
        self.applied = 0;
    }
}

impl LiveTree for DocumentMutator<'_> {
    fn create_element(&mut self, name: QualName) -> NodeId {
        let local = name.local.clone();
        let id = self.doc.create_element(name);
        self.record(|| Mutation::CreateElement { id, name: local });
        id
    }

    fn create_text_node(&mut self, text: &str) -> NodeId {
        let id = self.doc.create_text_node(text);
        self.record(|| Mutation::CreateText { id });
        id
    }

    fn create_comment_node(&mut self) -> NodeId {
        let id = self.doc.create_node(crate::NodeData::Comment);
        self.record(|| Mutation::CreateComment { id });
        id
    }

    fn parent_id(&self, node_id: NodeId) -> Option<NodeId> {
        self.doc.nodes[node_id].parent
    }

    fn child_ids(&self, parent_id: NodeId) -> Vec<NodeId> {
        self.doc.nodes[parent_id].children.clone()
    }

    fn append_children(&mut self, parent_id: NodeId, child_ids: &[NodeId]) {
        self.doc.append(parent_id, child_ids);
        self.record(|| Mutation::AppendChildren {
            parent: parent_id,
            children: child_ids.to_vec(),
        });
    }

    fn replace_node_with(&mut self, anchor_node_id: NodeId, new_node_ids: &[NodeId]) {
        self.doc.insert_before(anchor_node_id, new_node_ids);
        self.doc.remove_and_drop_node(anchor_node_id);
        self.record(|| Mutation::ReplaceNode {
            anchor: anchor_node_id,
            with: new_node_ids.to_vec(),
        });
    }

    fn remove_node(&mut self, node_id: NodeId) {
        self.doc.remove_and_drop_node(node_id);
        self.record(|| Mutation::RemoveNode { id: node_id });
    }

    fn attribute(&self, node_id: NodeId, name: &QualName) -> Option<&str> {
        self.doc.nodes[node_id].element_data()?.attrs.get(name)
    }

    fn set_attribute(&mut self, node_id: NodeId, name: QualName, value: &str) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        if &*name.local == "style" {
            element.style = InlineStyle::parse(value);
            self.record(|| Mutation::SetStyle { id: node_id });
            return;
        }
        let local = name.local.clone();
        if element.attrs.set(name, value) {
            self.record(|| Mutation::SetAttribute {
                id: node_id,
                name: local,
                value: value.to_string(),
            });
        }
    }

    fn clear_attribute(&mut self, node_id: NodeId, name: QualName) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        if &*name.local == "style" {
            element.style.clear();
            self.record(|| Mutation::SetStyle { id: node_id });
            return;
        }
        if element.attrs.remove(&name).is_some() {
            self.record(|| Mutation::ClearAttribute {
                id: node_id,
                name: name.local,
            });
        }
    }

    fn set_field(&mut self, node_id: NodeId, field: Field, value: FieldValue) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        *element.field_mut(field) = value.clone();
        self.record(|| Mutation::SetField {
            id: node_id,
            field,
            value,
        });
    }

    fn set_style_text(&mut self, node_id: NodeId, css: &str) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        element.style = InlineStyle::parse(css);
        self.record(|| Mutation::SetStyle { id: node_id });
    }

    fn set_style_property(&mut self, node_id: NodeId, name: &str, value: &str) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        element.style.set(name, value);
        self.record(|| Mutation::SetStyle { id: node_id });
    }

    fn add_event_listener(&mut self, node_id: NodeId, event_name: &str, listener: Listener) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        if element.add_listener(event_name, listener) {
            self.record(|| Mutation::AddListener {
                id: node_id,
                event: event_name.to_string(),
            });
        }
    }

    fn remove_event_listener(&mut self, node_id: NodeId, event_name: &str, listener: &Listener) {
        let Some(element) = self.element_mut(node_id) else {
            return;
        };
        if element.remove_listener(event_name, listener) {
            self.record(|| Mutation::RemoveListener {
                id: node_id,
                event: event_name.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentConfig;
    use markup5ever::{local_name, ns};
    use sprig_traits::attr_name;

    fn recording_doc() -> BaseDocument {
        BaseDocument::new(DocumentConfig {
            record_mutations: true,
            ..Default::default()
        })
    }

    fn span() -> QualName {
        QualName::new(None, ns!(html), local_name!("span"))
    }

    #[test]
    fn records_mutations() {
        let mut doc = recording_doc();
        let mut mutr = doc.mutate();
        let el = mutr.create_element(span());
        mutr.append_children(0, &[el]);
        mutr.set_attribute(el, attr_name("title"), "hi");
        drop(mutr);

        let log = doc.take_mutations();
        assert_eq!(log.len(), 3);
        assert!(log[0].is_structural());
        assert_eq!(
            log[2],
            Mutation::SetAttribute {
                id: el,
                name: LocalName::from("title"),
                value: "hi".into()
            }
        );
        assert!(doc.take_mutations().is_empty());
    }

    #[test]
    fn unchanged_attribute_is_not_recorded() {
        let mut doc = recording_doc();
        let mut mutr = doc.mutate();
        let el = mutr.create_element(span());
        mutr.set_attribute(el, attr_name("title"), "hi");
        mutr.set_attribute(el, attr_name("title"), "hi");
        mutr.clear_attribute(el, attr_name("missing"));
        drop(mutr);
        assert_eq!(doc.take_mutations().len(), 2);
    }

    #[test]
    fn style_attribute_goes_to_inline_style() {
        let mut doc = BaseDocument::default();
        let mut mutr = doc.mutate();
        let el = mutr.create_element(span());
        mutr.set_attribute(el, attr_name("style"), "color: red");
        mutr.set_style_property(el, "fontSize", "2px");
        drop(mutr);

        let element = doc.get_node(el).and_then(|n| n.element_data()).unwrap();
        assert!(element.attrs.is_empty());
        assert_eq!(element.style.to_css_text(), "color: red; font-size: 2px;");
    }

    #[test]
    fn replace_node_keeps_position() {
        let mut doc = BaseDocument::default();
        let mut mutr = doc.mutate();
        let a = mutr.create_text_node("a");
        let b = mutr.create_text_node("b");
        let c = mutr.create_text_node("c");
        mutr.append_children(0, &[a, b]);
        mutr.replace_node_with(a, &[c]);
        assert_eq!(mutr.child_ids(0), vec![c, b]);
        drop(mutr);
        assert!(doc.get_node(a).is_none());
    }

    #[test]
    fn listeners_are_deduplicated() {
        let mut doc = BaseDocument::default();
        let listener = Listener::new(|_| {});
        let mut mutr = doc.mutate();
        let el = mutr.create_element(span());
        mutr.add_event_listener(el, "click", listener.clone());
        mutr.add_event_listener(el, "click", listener.clone());
        drop(mutr);
        let element = doc.get_node(el).and_then(|n| n.element_data()).unwrap();
        assert_eq!(element.listeners_for("click").count(), 1);

        doc.mutate().remove_event_listener(el, "click", &listener);
        let element = doc.get_node(el).and_then(|n| n.element_data()).unwrap();
        assert_eq!(element.listeners_for("click").count(), 0);
    }
}
