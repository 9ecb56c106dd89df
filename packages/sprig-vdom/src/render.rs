use rustc_hash::FxHashMap;
use sprig_traits::{LiveTree, NodeId};

use crate::{VNode, mount, update};

/// Renders descriptions into live parents, remembering what was last rendered into each parent
/// so that the next render can be reconciled against it.
#[derive(Default)]
pub struct Renderer {
    rendered: FxHashMap<NodeId, VNode>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `node` into `parent`.
    ///
    /// The first render into a parent mounts the description as its last child. Later renders
    /// reconcile against the previous description, starting at the parent's first child.
    /// Rendering `None` removes what was rendered before and forgets it.
    ///
    /// Without a parent the description is mounted detached and nothing is remembered.
    ///
    /// Returns the live node now standing for `node`, if there is one.
    pub fn render<T: LiveTree + ?Sized>(
        &mut self,
        tree: &mut T,
        node: Option<VNode>,
        parent: Option<NodeId>,
    ) -> Option<NodeId> {
        let Some(parent) = parent else {
            return Some(mount(tree, node.as_ref(), None));
        };

        let live = match self.rendered.get(&parent) {
            None => node.as_ref().map(|node| mount(tree, Some(node), Some(parent))),
            Some(old) => {
                let first = tree.child_ids(parent).first().copied();
                update(tree, parent, first, node.as_ref(), Some(old));
                match node {
                    Some(_) => tree.child_ids(parent).first().copied(),
                    None => None,
                }
            }
        };

        match node {
            Some(node) => {
                self.rendered.insert(parent, node);
            }
            None => {
                self.rendered.remove(&parent);
            }
        }
        live
    }

    /// The description last rendered into `parent`
    pub fn rendered(&self, parent: NodeId) -> Option<&VNode> {
        self.rendered.get(&parent)
    }

    /// Forget what was rendered into `parent`, so that the next render mounts afresh.
    /// The live nodes are left alone.
    pub fn forget(&mut self, parent: NodeId) -> Option<VNode> {
        self.rendered.remove(&parent)
    }
}
