use sprig_traits::NodeId;
use sprig_traits::events::{DomEvent, DomEventData, Listener};

use crate::{BaseDocument, trace};

impl BaseDocument {
    /// Dispatch an event at `target`, running listeners on the target and then, if the event
    /// bubbles, on each of its ancestors. Returns the event after dispatch.
    ///
    /// An event aimed at a node which does not exist runs no listeners.
    pub fn dispatch_event(&mut self, target: NodeId, data: DomEventData) -> DomEvent {
        if self.get_node(target).is_none() {
            trace!("Dropping {} event for missing node {}", data.name(), target);
            return DomEvent::new(target, data, Vec::new());
        }
        let chain = self.node_chain(target);
        let mut event = DomEvent::new(target, data, chain.clone());
        self.run_listeners(&chain, &mut event);
        event
    }

    fn run_listeners(&self, chain: &[NodeId], event: &mut DomEvent) {
        let name = event.name().to_string();
        for &node_id in chain {
            // Listeners must not run while the element is borrowed
            let listeners: Vec<Listener> = self
                .get_node(node_id)
                .and_then(|node| node.element_data())
                .map(|el| el.listeners_for(&name).cloned().collect())
                .unwrap_or_default();

            event.current_target = Some(node_id);
            for listener in listeners {
                listener.call(event);
            }

            if !event.bubbles || event.stop_propagation {
                break;
            }
        }
        event.current_target = None;
    }
}
