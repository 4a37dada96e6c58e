//! Render classified blocks into HTML node trees.
//!
//! Paragraphs, headings, quotes and list items run their text through the
//! inline tokenizer and hold one leaf per span. Code blocks are wrapped
//! verbatim.

use std::borrow::Cow;

use mdhtml_core::HtmlNode;

use crate::block::{classify, segment, split_ordered_marker, BlockType, BULLET, FENCE};
use crate::inline::tokenize_with;
use crate::options::{Options, SoftBreak};
use crate::span::{SpanKind, TextSpan};
use crate::Result;

/// Convert a whole document into a tree under `options.root_tag`
pub fn render_document(markdown: &str, options: &Options) -> Result<HtmlNode> {
    let blocks = segment(markdown);
    log::debug!("segmented document into {} blocks", blocks.len());

    let children = blocks
        .into_iter()
        .map(|block| {
            let block_type = classify(block);
            log::trace!("{:?} block: {:?}", block_type, block);
            render_block(block, block_type, options)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent(&options.root_tag, children))
}

/// Render one block as the given type
pub fn render_block(block: &str, block_type: BlockType, options: &Options) -> Result<HtmlNode> {
    match block_type {
        BlockType::Paragraph => render_paragraph(block, options),
        BlockType::Heading => render_heading(block, options),
        BlockType::Code => Ok(render_code(block, options)),
        BlockType::Quote => render_quote(block, options),
        BlockType::UnorderedList => render_list("ul", block, options, |line| {
            line.strip_prefix(BULLET).unwrap_or(line)
        }),
        BlockType::OrderedList => render_list("ol", block, options, |line| {
            split_ordered_marker(line).map_or(line, |(_, rest)| rest)
        }),
    }
}

/// Map a span to its HTML leaf
pub fn span_to_html(span: &TextSpan) -> HtmlNode {
    let url = span.url.as_deref().unwrap_or_default();

    match span.kind {
        SpanKind::Plain => HtmlNode::raw(&span.text),
        SpanKind::Bold => HtmlNode::leaf("b", &span.text),
        SpanKind::Italic => HtmlNode::leaf("i", &span.text),
        SpanKind::Code => HtmlNode::leaf("code", &span.text),
        SpanKind::Link => HtmlNode::leaf("a", &span.text).with_attr("href", url),
        SpanKind::Image => HtmlNode::leaf("img", "")
            .with_attr("src", url)
            .with_attr("alt", &span.text),
    }
}

fn inline_children(text: &str, options: &Options) -> Result<Vec<HtmlNode>> {
    let spans = tokenize_with(text, options)?;
    Ok(spans.iter().map(span_to_html).collect())
}

fn render_paragraph(block: &str, options: &Options) -> Result<HtmlNode> {
    let text: Cow<str> = match options.soft_break {
        SoftBreak::Preserve => Cow::Borrowed(block),
        SoftBreak::Space => Cow::Owned(
            block
                .split('\n')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join(" "),
        ),
    };

    Ok(HtmlNode::parent("p", inline_children(&text, options)?))
}

fn render_heading(block: &str, options: &Options) -> Result<HtmlNode> {
    let hashes = block.chars().take_while(|&c| c == '#').count();
    let text = &block[hashes..];
    let text = text.strip_prefix(' ').unwrap_or(text);
    let tag = format!("h{}", hashes.clamp(1, 6));

    Ok(HtmlNode::parent(&tag, inline_children(text, options)?))
}

fn render_code(block: &str, options: &Options) -> HtmlNode {
    let inner = block.strip_prefix(FENCE).unwrap_or(block);
    let inner = inner.strip_suffix(FENCE).unwrap_or(inner);

    let (language, code) = match fence_info(inner) {
        Some((info, rest)) if options.fence_language => (Some(info), rest),
        _ => (None, inner.strip_prefix('\n').unwrap_or(inner)),
    };

    let mut code_node = HtmlNode::leaf("code", code);
    if let Some(language) = language {
        code_node = code_node.with_attr("class", &format!("language-{}", language));
    }
    HtmlNode::parent("pre", vec![code_node])
}

/// Split a single info word off the first fence line
fn fence_info(inner: &str) -> Option<(&str, &str)> {
    let (first, rest) = inner.split_once('\n')?;
    let is_word = !first.is_empty()
        && first
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'));
    is_word.then_some((first, rest))
}

fn render_quote(block: &str, options: &Options) -> Result<HtmlNode> {
    let text = block
        .split('\n')
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok(HtmlNode::parent("blockquote", inline_children(&text, options)?))
}

fn render_list<F>(tag: &str, block: &str, options: &Options, strip_marker: F) -> Result<HtmlNode>
where
    F: Fn(&str) -> &str,
{
    let items = block
        .split('\n')
        .map(|line| {
            inline_children(strip_marker(line), options)
                .map(|children| HtmlNode::parent("li", children))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent(tag, items))
}
