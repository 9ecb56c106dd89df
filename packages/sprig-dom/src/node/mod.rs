#![allow(clippy::module_inception)]

mod attributes;
mod element;
mod node;
mod style;

pub use attributes::{Attribute, Attributes};
pub use element::ElementData;
pub use node::*;
pub use style::InlineStyle;
