//! A headless in-memory DOM for Sprig
//!
//! This crate implements [`BaseDocument`], a flat slab-backed node tree which can be driven by
//! the Sprig renderer through the [`LiveTree`](sprig_traits::LiveTree) trait. It has no layout,
//! styling or painting: it exists so that rendered trees can be inspected, serialized to HTML and
//! have events dispatched through them, both in tests and in headless applications.
//!
//! Mutations go through a [`DocumentMutator`] obtained from [`BaseDocument::mutate`]. When
//! [`DocumentConfig::record_mutations`] is set, every mutation is also appended to a log which can
//! be drained with [`BaseDocument::take_mutations`].

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
    ($pattern:literal, $item1:expr, $item2:expr) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($pattern, $item1, $item2);
        #[cfg(not(feature = "tracing"))]
        let _ = (&$item1, &$item2);
    }};
}
pub(crate) use trace;

/// The DOM implementation.
///
/// This is the primary entry point for this crate.
mod document;

/// The nodes themsleves, and their data.
pub mod node;

mod config;
mod events;
mod mutator;
mod serialize;
mod traversal;

pub mod util;

pub use config::DocumentConfig;
pub use document::BaseDocument;
pub use markup5ever::{LocalName, Namespace, Prefix, QualName, local_name, ns};
pub use mutator::{DocumentMutator, Mutation};
pub use node::{Attribute, Attributes, ElementData, InlineStyle, Node, NodeData, TextNodeData};
pub use traversal::{AncestorTraverser, TreeTraverser};
