//! Reactive state for Sprig applications
//!
//! - [`State`] accumulates mutations and applies them in one batch on the next turn of a
//!   [`MicrotaskQueue`], notifying its listeners once per batch. Re-rendering from a state
//!   listener means any number of synchronous updates produce a single render.
//! - [`Emitter`] is a synchronous named message bus.

// ## Feature flags
//  - `default`: Enables the features listed below.
//  - `tracing`: Enables tracing support.

// Syntax sugar to make tracing calls less noisy
macro_rules! trace {
    ($pattern:literal) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($pattern);
    }};
    ($pattern:literal, $item1:expr) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($pattern, $item1);
        #[cfg(not(feature = "tracing"))]
        let _ = &$item1;
    }};
}
pub(crate) use trace;

mod emitter;
mod queue;
mod state;

pub use emitter::Emitter;
pub use queue::MicrotaskQueue;
pub use state::State;

/// Handle to a registered listener, used to remove it again
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);
