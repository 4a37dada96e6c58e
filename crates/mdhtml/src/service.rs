//! MarkdownService - the main entry point for Markdown to HTML conversion.

use mdhtml_core::HtmlNode;

use crate::block::BlockType;
use crate::inline::tokenize_with;
use crate::options::Options;
use crate::render::{render_block, render_document};
use crate::span::TextSpan;
use crate::Result;

/// The main service for converting Markdown to HTML
#[derive(Debug, Clone, Default)]
pub struct MarkdownService {
    options: Options,
}

impl MarkdownService {
    /// Create a new MarkdownService with default options
    pub fn new() -> Self {
        Self {
            options: Options::default(),
        }
    }

    /// Create a MarkdownService with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Convert Markdown to an HTML node tree
    pub fn to_html_node(&self, markdown: &str) -> Result<HtmlNode> {
        render_document(markdown, &self.options)
    }

    /// Convert Markdown to an HTML string
    pub fn to_html(&self, markdown: &str) -> Result<String> {
        let tree = self.to_html_node(markdown)?;
        Ok(tree.to_html()?)
    }

    /// Tokenize inline text using the configured delimiters
    pub fn tokenize(&self, text: &str) -> Result<Vec<TextSpan>> {
        tokenize_with(text, &self.options)
    }

    /// Render a single, already classified block
    pub fn render_block(&self, block: &str, block_type: BlockType) -> Result<HtmlNode> {
        render_block(block, block_type, &self.options)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }
}
