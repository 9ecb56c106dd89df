use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A closing tag did not match the element it was closing
    #[error("Unexpected closing tag. Expected '{expected}' but got '{found}'")]
    UnexpectedClosingTag { expected: String, found: String },

    /// `make` was called with something that is neither a tag name nor a component
    #[error("Invalid element type provided: {0}")]
    InvalidElementType(String),
}
