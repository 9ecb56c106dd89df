//! Sprig: a tiny virtual DOM with HTML templates
//!
//! Describe a tree with an HTML template, render it into a live tree and render again whenever
//! your state changes. Only the differences are applied.
//!
//! ```
//! use sprig::{BaseDocument, Renderer, html};
//!
//! let mut doc = BaseDocument::default();
//! let mut renderer = Renderer::new();
//!
//! let view = |name: &str| html!("<p class=\"greeting\">Hello {}</p>", name).unwrap();
//! let root = doc.root_node().id;
//! renderer.render(&mut doc.mutate(), view("Bob"), Some(root));
//! renderer.render(&mut doc.mutate(), view("Susan"), Some(root));
//!
//! assert_eq!(doc.inner_html(root), "<p class=\"greeting\">Hello Susan</p>");
//! ```
//!
//! The workspace is split into:
//!  - [`sprig_vdom`]: node descriptions, the factory, mounting and reconciliation.
//!  - [`sprig_html`]: the template compiler and HTML serialization of descriptions.
//!  - [`sprig_dom`]: a headless in-memory live tree.
//!  - [`sprig_state`]: batched state and event emitters.
//!
//! ## Feature flags
//!  - `default`: Enables the features listed below.
//!  - `tracing`: Enables tracing support in the document and state crates.

pub mod directives;

#[doc(inline)]
pub use sprig_vdom::{
    Component, Error, Listener, NodeRef, Props, Renderer, VElement, VNode, VPortal, Value,
    element, make, mount, must_replace, portal, props, text, update,
};

pub use sprig_dom::{BaseDocument, DocumentConfig, DocumentMutator, Mutation};
pub use sprig_html::{compile, to_html_string};
pub use sprig_state::{Emitter, ListenerId, MicrotaskQueue, State};
pub use sprig_traits::LiveTree;
pub use sprig_traits::events::{DomEvent, DomEventData, InputEventData, KeyEventData, MouseEventData};

pub use sprig_dom;
pub use sprig_html;
pub use sprig_state;
pub use sprig_traits;
pub use sprig_vdom;

/// Compile a template written with `{}` placeholders.
///
/// The source is split at each `{}` and the pieces are compiled with `values` embedded between
/// them. Prefer the [`html!`] macro, which converts its arguments into [`Value`]s.
pub fn template(source: &str, values: Vec<Value>) -> Result<Option<VNode>, Error> {
    let segments: Vec<&str> = source.split("{}").collect();
    sprig_html::html(&segments, values)
}

/// Build a node description from a template with `{}` placeholders.
///
/// Every argument after the template is converted with [`Value::from`]. A placeholder may stand
/// for text, a tag name, an attribute value or a `...{}` spread of a props map.
///
/// ```
/// use sprig::{html, to_html_string};
///
/// let items = vec![
///     html!("<li>{}</li>", "one").unwrap().unwrap(),
///     html!("<li>{}</li>", "two").unwrap().unwrap(),
/// ];
/// let list = html!("<ul class={}>{}</ul>", "list", items).unwrap().unwrap();
/// assert_eq!(to_html_string(&list), "<ul class=\"list\"><li>one</li><li>two</li></ul>");
/// ```
#[macro_export]
macro_rules! html {
    ($source:literal $(, $value:expr)* $(,)?) => {
        $crate::template($source, ::std::vec![$($crate::Value::from($value)),*])
    };
}
