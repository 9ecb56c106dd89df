use std::fmt;

use rustc_hash::FxHashMap;
use slab::Slab;

use crate::{ListenerId, trace};

type EmitterListener<D> = Box<dyn Fn(&D)>;

/// A synchronous message bus. Listeners registered under a name are called, in the order they
/// were registered, each time a message is emitted under that name.
pub struct Emitter<D> {
    listeners: FxHashMap<String, Slab<EmitterListener<D>>>,
}

impl<D> Emitter<D> {
    pub fn new() -> Self {
        Emitter {
            listeners: FxHashMap::default(),
        }
    }

    /// Create an emitter with listeners already registered
    pub fn with_listeners<F>(listeners: impl IntoIterator<Item = (String, F)>) -> Self
    where
        F: Fn(&D) + 'static,
    {
        let mut emitter = Self::new();
        for (name, listener) in listeners {
            emitter.on(&name, listener);
        }
        emitter
    }

    pub fn on(&mut self, name: &str, listener: impl Fn(&D) + 'static) -> ListenerId {
        let slot = self.listeners.entry(name.to_string()).or_default();
        ListenerId(slot.insert(Box::new(listener)))
    }

    /// Remove a listener. Returns `false` if it was not registered under `name`.
    pub fn off(&mut self, name: &str, id: ListenerId) -> bool {
        self.listeners
            .get_mut(name)
            .and_then(|slot| slot.try_remove(id.0))
            .is_some()
    }

    pub fn off_all(&mut self, name: &str) {
        self.listeners.remove(name);
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.get(name).map_or(0, Slab::len)
    }

    /// Call every listener registered under `name`. Returns how many were called.
    pub fn emit(&self, name: &str, data: &D) -> usize {
        let Some(slot) = self.listeners.get(name) else {
            trace!("No listeners for {}", name);
            return 0;
        };
        for (_, listener) in slot.iter() {
            listener(data);
        }
        slot.len()
    }
}

impl<D> Default for Emitter<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> fmt::Debug for Emitter<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: FxHashMap<&str, usize> = self
            .listeners
            .iter()
            .map(|(name, slot)| (name.as_str(), slot.len()))
            .collect();
        f.debug_struct("Emitter").field("listeners", &counts).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    type Log = Rc<RefCell<Vec<String>>>;

    #[test]
    fn emit_calls_listeners_in_order() {
        let log: Log = Rc::default();
        let mut emitter = Emitter::new();

        let l = log.clone();
        emitter.on("save", move |doc: &String| l.borrow_mut().push(format!("a:{doc}")));
        let l = log.clone();
        emitter.on("save", move |doc: &String| l.borrow_mut().push(format!("b:{doc}")));

        assert_eq!(emitter.emit("save", &"notes".to_string()), 2);
        assert_eq!(emitter.emit("load", &"notes".to_string()), 0);
        assert_eq!(*log.borrow(), vec!["a:notes", "b:notes"]);
    }

    #[test]
    fn off_removes_a_single_listener() {
        let log: Log = Rc::default();
        let mut emitter = Emitter::new();

        let l = log.clone();
        let first = emitter.on("ping", move |n: &i32| l.borrow_mut().push(format!("first {n}")));
        let l = log.clone();
        emitter.on("ping", move |n: &i32| l.borrow_mut().push(format!("second {n}")));

        assert!(emitter.off("ping", first));
        assert!(!emitter.off("ping", first));
        assert!(!emitter.off("pong", first));
        emitter.emit("ping", &1);
        assert_eq!(*log.borrow(), vec!["second 1"]);

        emitter.off_all("ping");
        assert_eq!(emitter.listener_count("ping"), 0);
    }

    #[test]
    fn seeded_listeners() {
        let log: Log = Rc::default();
        let l = log.clone();
        let emitter = Emitter::<String>::with_listeners([(
            "greet".to_string(),
            move |name: &String| l.borrow_mut().push(format!("hello {name}")),
        )]);
        emitter.emit("greet", &"bob".to_string());
        assert_eq!(*log.borrow(), vec!["hello bob"]);
    }
}
