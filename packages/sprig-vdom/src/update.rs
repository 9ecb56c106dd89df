use sprig_traits::{LiveTree, NodeId};

use crate::{Props, VNode, Value, mount, must_replace, set_property};

/// Reconcile the live node `live`, previously rendered from `old` as a child of `parent`, so that
/// it matches `new`.
///
/// - with no `old` description, `new` is mounted and appended to `parent`
/// - with no `new` description, the live node is removed
/// - when [`must_replace`] says so, the live node is replaced by a fresh mount of `new`
/// - otherwise props are patched in place and children are reconciled position by position
///
/// Removing or replacing a portal also clears its target.
pub fn update<T: LiveTree + ?Sized>(
    tree: &mut T,
    parent: NodeId,
    live: Option<NodeId>,
    new: Option<&VNode>,
    old: Option<&VNode>,
) {
    let (Some(old), Some(live)) = (old, live) else {
        if new.is_some() {
            mount(tree, new, Some(parent));
        }
        return;
    };

    let Some(new) = new else {
        unmount(tree, old, live);
        tree.remove_node(live);
        return;
    };

    if must_replace(new, old) {
        unmount(tree, old, live);
        let replacement = mount(tree, Some(new), None);
        tree.replace_node_with(live, &[replacement]);
        return;
    }

    match (new, old) {
        (VNode::Element(new), VNode::Element(old)) => {
            update_props(tree, live, &new.props, &old.props);
            update_children(tree, live, &new.children, &old.children);
        }
        (VNode::Portal(new), VNode::Portal(old)) => {
            update_children(tree, new.target, &new.children, &old.children);
        }
        // Equal text
        _ => {}
    }
}

fn update_props<T: LiveTree + ?Sized>(tree: &mut T, node_id: NodeId, new: &Props, old: &Props) {
    let removed = old.names().filter(|name| !new.contains(name));
    for name in new.names().chain(removed) {
        if name == "key" {
            continue;
        }
        let new_value = new.get(name);
        let old_value = old.get(name);
        if new_value == old_value {
            continue;
        }
        if new_value.is_some_and(Value::is_truthy) {
            set_property(tree, node_id, name, new_value, old_value);
        } else {
            set_property(tree, node_id, name, None, old_value);
        }
    }
}

/// Children are matched strictly by index against the live children as they were on entry.
fn update_children<T: LiveTree + ?Sized>(
    tree: &mut T,
    parent: NodeId,
    new: &[VNode],
    old: &[VNode],
) {
    let live = tree.child_ids(parent);
    for idx in 0..new.len().max(old.len()) {
        update(tree, parent, live.get(idx).copied(), new.get(idx), old.get(idx));
    }
}

/// Undo the side effects a rendered subtree has outside of its own live nodes: empty the targets
/// of any portals and clear the refs which still point into it.
fn unmount<T: LiveTree + ?Sized>(tree: &mut T, node: &VNode, live: NodeId) {
    match node {
        VNode::Text(_) => {}
        VNode::Element(element) => {
            if let Some(Value::Ref(handle)) = element.props.get("ref") {
                if handle.current() == Some(live) {
                    handle.set(None);
                }
            }
            let children = tree.child_ids(live);
            for (child, child_live) in element.children.iter().zip(children) {
                unmount(tree, child, child_live);
            }
        }
        VNode::Portal(portal) => {
            let children = tree.child_ids(portal.target);
            for (child, child_live) in portal.children.iter().zip(children) {
                unmount(tree, child, child_live);
            }
            tree.remove_children(portal.target);
        }
    }
}
