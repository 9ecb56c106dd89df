//! HTML templates for Sprig
//!
//! [`html`] compiles a template, given as the literal text segments around a list of embedded
//! [`Value`](sprig_vdom::Value)s, into a [`VNode`](sprig_vdom::VNode) description:
//!
//! ```
//! use sprig_html::html;
//! use sprig_vdom::Value;
//!
//! let node = html(&["<div class=\"greeting\">Hello ", "</div>"], vec![Value::from("Bob")])
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(sprig_html::to_html_string(&node), "<div class=\"greeting\">Hello Bob</div>");
//! ```
//!
//! Only the subset of HTML that templates need is understood: elements, quoted attributes,
//! boolean attributes, `...${props}` spreads and embedded values in text, tag and attribute
//! positions. It is not an HTML5 parser.

mod stringify;
mod template;

pub use stringify::to_html_string;
pub use template::{compile, html};
