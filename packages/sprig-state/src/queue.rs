use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::trace;

type Task = Box<dyn FnOnce()>;

/// A single-threaded queue of deferred tasks.
///
/// Tasks run in the order they were queued when the queue is drained. Clones share the same
/// queue.
#[derive(Clone, Default)]
pub struct MicrotaskQueue {
    tasks: Rc<RefCell<VecDeque<Task>>>,
}

impl MicrotaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_microtask(&self, task: impl FnOnce() + 'static) {
        self.tasks.borrow_mut().push_back(Box::new(task));
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    /// Run tasks until the queue is empty, including tasks queued by the tasks themselves.
    /// Returns the number of tasks run.
    pub fn run_until_idle(&self) -> usize {
        let mut count = 0;
        loop {
            // The queue must not be borrowed while a task runs
            let task = self.tasks.borrow_mut().pop_front();
            let Some(task) = task else {
                break;
            };
            task();
            count += 1;
        }
        trace!("Ran {} microtasks", count);
        count
    }
}

impl fmt::Debug for MicrotaskQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MicrotaskQueue")
            .field("len", &self.len())
            .finish()
    }
}
