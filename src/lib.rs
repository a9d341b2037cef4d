#![forbid(unsafe_code)]

//! hot is a library that lets you build and manipulate HTML document trees
//! in Rust. All nodes live in a [`Document`]; a [`Node`] is a lightweight
//! copyable handle into it. Elements carry ordered attributes and a
//! structured [`Style`], trees can be queried with a subset of CSS
//! selectors, and any node can be serialized back to markup.

mod access;
mod creation;
mod document;
mod entity;
mod error;
pub mod fixed;
mod htmlvalue;
mod manipulation;
#[cfg(feature = "proptest")]
pub mod proptest;
mod selector;
mod serialize;
mod style;
mod valueaccess;

pub use access::NodeEdge;
pub use document::{Document, Node};
pub use error::Error;
pub use htmlvalue::{Attributes, Comment, Element, Text, Value, ValueType};
pub use serialize::{Output, OutputToken};
pub use style::Style;
