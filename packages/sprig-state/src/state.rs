use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use slab::Slab;

use crate::{ListenerId, MicrotaskQueue, trace};

type Mutation<T> = Box<dyn FnOnce(&mut T)>;
type StateListener<T> = Rc<dyn Fn(&T)>;

/// A value whose updates are applied in batches.
///
/// [`set_state`](State::set_state) does not change the value straight away: mutations accumulate
/// until the next turn of the state's [`MicrotaskQueue`], when they are applied in the order they
/// were made and every listener is called once with the result. Clones share the same value.
pub struct State<T> {
    inner: Rc<Inner<T>>,
}

struct Inner<T> {
    value: RefCell<T>,
    pending: RefCell<Vec<Mutation<T>>>,
    listeners: RefCell<Slab<StateListener<T>>>,
    queue: MicrotaskQueue,
}

impl<T: 'static> State<T> {
    pub fn new(initial: T, queue: &MicrotaskQueue) -> Self {
        State {
            inner: Rc::new(Inner {
                value: RefCell::new(initial),
                pending: RefCell::new(Vec::new()),
                listeners: RefCell::new(Slab::new()),
                queue: queue.clone(),
            }),
        }
    }

    /// A copy of the current value. Pending mutations are not visible until they are flushed.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Queue a mutation of the value. The first mutation of a turn schedules the flush.
    pub fn set_state(&self, mutation: impl FnOnce(&mut T) + 'static) {
        let first = {
            let mut pending = self.inner.pending.borrow_mut();
            pending.push(Box::new(mutation));
            pending.len() == 1
        };
        if first {
            let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
            self.inner.queue.queue_microtask(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.flush();
                }
            });
        }
    }

    /// Queue replacing the whole value
    pub fn replace(&self, value: T) {
        self.set_state(move |current| *current = value);
    }

    pub fn on(&self, listener: impl Fn(&T) + 'static) -> ListenerId {
        ListenerId(self.inner.listeners.borrow_mut().insert(Rc::new(listener)))
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn off(&self, id: ListenerId) -> bool {
        self.inner.listeners.borrow_mut().try_remove(id.0).is_some()
    }

    pub fn has_pending(&self) -> bool {
        !self.inner.pending.borrow().is_empty()
    }
}

impl<T> Inner<T> {
    fn flush(&self) {
        let pending = std::mem::take(&mut *self.pending.borrow_mut());
        if pending.is_empty() {
            return;
        }
        trace!("Applying {} state mutations", pending.len());
        {
            let mut value = self.value.borrow_mut();
            for mutation in pending {
                mutation(&mut value);
            }
        }

        // Listeners may register listeners or queue further mutations
        let listeners: Vec<StateListener<T>> =
            self.listeners.borrow().iter().map(|(_, l)| l.clone()).collect();
        let value = self.value.borrow();
        for listener in listeners {
            listener(&value);
        }
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        State {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &self.inner.value.borrow())
            .field("pending", &self.inner.pending.borrow().len())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}
