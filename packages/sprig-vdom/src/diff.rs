use crate::VNode;

/// Whether `new` has to replace the live node rendered for `old`, rather than patch it.
///
/// Nodes are replaced when their kinds differ, when text differs, when element tags or `key`
/// props differ, and when portals point at different targets.
pub fn must_replace(new: &VNode, old: &VNode) -> bool {
    match (new, old) {
        (VNode::Text(new), VNode::Text(old)) => new != old,
        (VNode::Element(new), VNode::Element(old)) => {
            new.tag != old.tag || new.props.key() != old.props.key()
        }
        (VNode::Portal(new), VNode::Portal(old)) => new.target != old.target,
        _ => true,
    }
}
