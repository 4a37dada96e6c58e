//! Block segmentation and classification.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#+) ").expect("heading pattern is valid"));

static ORDERED_ITEM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\. ").expect("ordered item pattern is valid"));

pub(crate) const FENCE: &str = "```";
pub(crate) const BULLET: &str = "- ";

/// Block-level kinds, in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Split a document into trimmed, non-empty blocks separated by blank lines
pub fn segment(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block. The first matching rule wins; anything else is a
/// paragraph.
pub fn classify(block: &str) -> BlockType {
    if heading_level(block).is_some() {
        return BlockType::Heading;
    }
    if is_code(block) {
        return BlockType::Code;
    }
    if block.split('\n').all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if block.split('\n').all(|line| line.starts_with(BULLET)) {
        return BlockType::UnorderedList;
    }
    if is_ordered_list(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

/// Level of an ATX heading: a run of one to six `#` followed by a space
pub fn heading_level(block: &str) -> Option<usize> {
    let caps = HEADING_PATTERN.captures(block)?;
    let level = caps.get(1)?.as_str().len();
    (1..=6).contains(&level).then_some(level)
}

fn is_code(block: &str) -> bool {
    block.len() >= 2 * FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE)
}

fn is_ordered_list(block: &str) -> bool {
    block
        .split('\n')
        .enumerate()
        .all(|(i, line)| matches!(split_ordered_marker(line), Some((n, _)) if n == i as u64 + 1))
}

/// Split `<n>. rest` into the item number and the rest of the line
pub(crate) fn split_ordered_marker(line: &str) -> Option<(u64, &str)> {
    let caps = ORDERED_ITEM_PATTERN.captures(line)?;
    let number = caps.get(1)?.as_str().parse().ok()?;
    let marker = caps.get(0)?;
    Some((number, &line[marker.end()..]))
}
