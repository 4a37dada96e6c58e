//! mdhtml-core - HTML node tree and serialization
//!
//! This crate provides the HTML node structure produced by the `mdhtml`
//! Markdown converter, together with its serialization to an HTML string.
//!
//! # Architecture
//!
//! ```text
//!                     ┌───────────┐
//! Markdown String ──▶ │ HtmlNode  │ ──▶ HTML String
//!     (mdhtml)        │   tree    │   (serialize)
//!                     └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdhtml_core::{serialize, HtmlNode};
//!
//! let tree = HtmlNode::parent(
//!     "p",
//!     vec![
//!         HtmlNode::raw("This is "),
//!         HtmlNode::leaf("b", "bold"),
//!         HtmlNode::leaf("a", "a link").with_attr("href", "https://example.com"),
//!     ],
//! );
//!
//! let html = serialize(&tree).unwrap();
//! assert_eq!(
//!     html,
//!     r#"<p>This is <b>bold</b><a href="https://example.com">a link</a></p>"#
//! );
//! ```

mod node;
mod serialize;

pub use node::{Attributes, HtmlNode, NodeKind};
pub use serialize::serialize;

/// Error raised when a node tree violates the leaf/parent contract
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("leaf node must have a value")]
    MissingValue,

    #[error("parent node must have a tag")]
    MissingTag,

    #[error("parent node must have children")]
    MissingChildren,
}

pub type Result<T> = std::result::Result<T, HtmlError>;
