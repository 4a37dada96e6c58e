//! # mdhtml
//!
//! Convert a small Markdown subset to an HTML node tree.
//!
//! Supported syntax: bold `**`, italic `_`, inline code `` ` ``, links,
//! images, ATX headings (levels 1-6), fenced code blocks, block quotes,
//! unordered lists, ordered lists and paragraphs. Matching is deliberately
//! strict; this is not a CommonMark implementation.
//!
//! ## Design
//!
//! Conversion runs in two stages:
//!
//! - **Blocks**: the document is split on blank lines and each block is
//!   classified by the first rule that matches (heading, code, quote,
//!   unordered list, ordered list, paragraph).
//! - **Inlines**: block text is tokenized into typed [`TextSpan`]s by
//!   successive passes (bold, italic, code, image, link), each pass only
//!   looking at text earlier passes left plain.
//!
//! The result is an [`HtmlNode`] tree from `mdhtml-core`, ready to serialize.
//!
//! ## Example
//!
//! ```rust
//! use mdhtml::{document_to_html, MarkdownService};
//!
//! let tree = document_to_html("This is **bold** text").unwrap();
//! assert_eq!(tree.to_html().unwrap(), "<div><p>This is <b>bold</b> text</p></div>");
//!
//! let service = MarkdownService::new();
//! let html = service.to_html("# Title\n\n- one\n- two").unwrap();
//! assert_eq!(html, "<div><h1>Title</h1><ul><li>one</li><li>two</li></ul></div>");
//! ```
//!
//! ## Example (tokenizer)
//!
//! ```rust
//! use mdhtml::{tokenize, SpanKind, TextSpan};
//!
//! let spans = tokenize("see [docs](https://example.com)").unwrap();
//! assert_eq!(spans[0], TextSpan::plain("see "));
//! assert_eq!(spans[1].kind, SpanKind::Link);
//! assert_eq!(spans[1].url.as_deref(), Some("https://example.com"));
//! ```

mod block;
mod inline;
mod options;
mod render;
mod service;
mod span;

pub use block::{classify, heading_level, segment, BlockType};
pub use inline::{
    extract_images, extract_links, split_by_links_or_images, split_delimited, tokenize,
    tokenize_with, LinkKind,
};
pub use mdhtml_core::{Attributes, HtmlError, HtmlNode, NodeKind};
pub use options::{Options, SoftBreak};
pub use render::span_to_html;
pub use service::MarkdownService;
pub use span::{SpanKind, TextSpan};

/// Error type for Markdown conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("unclosed delimiter '{delimiter}' in: {text}")]
    UnbalancedDelimiter {
        delimiter: String,
        text: String,
        /// Byte offset of the unmatched delimiter
        position: usize,
    },

    #[error(transparent)]
    Html(#[from] HtmlError),
}

impl MarkdownError {
    /// The offending text with a caret line under the unmatched delimiter
    pub fn pointer(&self) -> Option<String> {
        match self {
            MarkdownError::UnbalancedDelimiter {
                delimiter,
                text,
                position,
            } => {
                let column = text.get(..*position).map_or(0, |s| s.chars().count());
                Some(format!(
                    "{}\n{}{}",
                    text,
                    " ".repeat(column),
                    "^".repeat(delimiter.chars().count())
                ))
            }
            MarkdownError::Html(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Convert a Markdown document to an HTML tree with default options
pub fn document_to_html(markdown: &str) -> Result<HtmlNode> {
    render::render_document(markdown, &Options::default())
}

/// Render one block as the given type with default options
pub fn render(block: &str, block_type: BlockType) -> Result<HtmlNode> {
    render::render_block(block, block_type, &Options::default())
}
