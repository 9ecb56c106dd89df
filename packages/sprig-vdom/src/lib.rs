//! Node descriptions and the engine which turns them into live nodes.
//!
//! A [`VNode`] describes what a piece of the document should look like. The [`Renderer`] mounts a
//! description into any [`LiveTree`](sprig_traits::LiveTree) the first time it is rendered into a
//! parent, and on later renders reconciles the new description against the one it rendered last
//! time, applying only the mutations needed to bring the live nodes in line.
//!
//! Descriptions are usually produced by the template compiler in
//! [sprig-html](https://docs.rs/sprig-html), but can also be built directly with [`make`],
//! [`element`], [`text`] and [`portal`].

mod diff;
mod error;
mod factory;
mod mount;
mod namespace;
mod node;
mod property;
mod props;
mod render;
mod update;
mod value;

pub use diff::must_replace;
pub use error::Error;
pub use factory::{element, flatten, make, portal, text};
pub use mount::mount;
pub use namespace::{namespace_for_prefix, resolve_name};
pub use node::{VElement, VNode, VPortal};
pub use property::set_property;
pub use props::Props;
pub use render::Renderer;
pub use update::update;
pub use value::{Component, NodeRef, Value};

pub use sprig_traits::events::Listener;
pub use sprig_traits::{LiveTree, NodeId};
