//! HTML tree serialization
//!
//! Converts an [`HtmlNode`] tree into an HTML string, checking the
//! leaf/parent contract on the way down.

use crate::node::{HtmlNode, NodeKind};
use crate::{HtmlError, Result};

/// Serialize a node tree to an HTML string
pub fn serialize(node: &HtmlNode) -> Result<String> {
    let mut output = String::with_capacity(256);
    serialize_node(node, &mut output)?;
    Ok(output)
}

impl HtmlNode {
    /// Serialize this node and its descendants
    pub fn to_html(&self) -> Result<String> {
        serialize(self)
    }
}

fn serialize_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node.kind {
        NodeKind::Leaf => serialize_leaf(node, out),
        NodeKind::Parent => serialize_parent(node, out),
    }
}

fn serialize_leaf(node: &HtmlNode, out: &mut String) -> Result<()> {
    let value = node.value.as_deref().ok_or(HtmlError::MissingValue)?;

    // Tag-less leaves are raw text; attributes are ignored
    let Some(tag) = node.tag_name() else {
        out.push_str(value);
        return Ok(());
    };

    open_tag(tag, node, out);
    out.push_str(value);
    close_tag(tag, out);
    Ok(())
}

fn serialize_parent(node: &HtmlNode, out: &mut String) -> Result<()> {
    let tag = node.tag_name().ok_or(HtmlError::MissingTag)?;
    let children = node
        .children
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or(HtmlError::MissingChildren)?;

    open_tag(tag, node, out);
    for child in children {
        serialize_node(child, out)?;
    }
    close_tag(tag, out);
    Ok(())
}

fn open_tag(tag: &str, node: &HtmlNode, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&node.attributes_string());
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
