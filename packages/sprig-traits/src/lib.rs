//! Shared traits and types for Sprig
//!
//! This crate sits between the rendering core ([sprig-vdom](https://docs.rs/sprig-vdom)) and the
//! document implementations it drives (such as [sprig-dom](https://docs.rs/sprig-dom)).
//!
//! - [`LiveTree`]: the abstract set of mutations the reconciler needs from a live document
//! - [`events`]: DOM events and the [`Listener`](events::Listener) callbacks attached to elements
//! - [`FieldValue`]: the value of an element field (`checked`, `value`, `disabled`)

pub mod events;
mod tree;

pub use markup5ever::{LocalName, Namespace, Prefix, QualName, local_name, ns};
pub use tree::{Field, FieldValue, LiveTree, NodeId, attr_name, to_kebab_case};
