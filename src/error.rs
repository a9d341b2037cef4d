use std::fmt;

use crate::document::Node;

/// A tree manipulation or serialization error.
#[derive(Debug)]
pub enum Error {
    /// The node is not a child of the given parent.
    NotFound(Node),
    /// The operation is not allowed for this node type or position.
    InvalidOperation(String),
    /// The arena rejected the edit, for instance inserting a node before
    /// itself.
    Tree(indextree::NodeError),
    /// IO error while writing serialized output.
    Io(std::io::Error),
}

impl From<indextree::NodeError> for Error {
    #[inline]
    fn from(e: indextree::NodeError) -> Self {
        Error::Tree(e)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotFound(node) => write!(f, "node is not a child: {:?}", node),
            Error::InvalidOperation(message) => write!(f, "invalid operation: {}", message),
            Error::Tree(e) => write!(f, "tree error: {}", e),
            Error::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Tree(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}
