//! HTML node tree
//!
//! A node is either a leaf carrying a literal value or a parent carrying
//! child nodes. Both may carry attributes.

use indexmap::IndexMap;

/// Attribute map. Insertion order is kept so output is deterministic.
pub type Attributes = IndexMap<String, String>;

/// The two shapes an [`HtmlNode`] can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Text-bearing node, serialized from `value`
    Leaf,
    /// Container node, serialized from `children`
    Parent,
}

/// A node of the HTML output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlNode {
    /// Leaf or parent
    pub kind: NodeKind,

    /// Tag name. A leaf without a tag is emitted as raw text.
    pub tag: Option<String>,

    /// Literal content for leaf nodes
    pub value: Option<String>,

    /// Child nodes for parent nodes
    pub children: Option<Vec<HtmlNode>>,

    /// Attributes in insertion order
    pub attributes: Attributes,
}

impl HtmlNode {
    /// Create a tagged leaf node
    pub fn leaf(tag: &str, value: &str) -> Self {
        Self {
            kind: NodeKind::Leaf,
            tag: Some(tag.to_string()),
            value: Some(value.to_string()),
            children: None,
            attributes: Attributes::new(),
        }
    }

    /// Create a tag-less leaf, emitted as its raw value
    pub fn raw(value: &str) -> Self {
        Self {
            kind: NodeKind::Leaf,
            tag: None,
            value: Some(value.to_string()),
            children: None,
            attributes: Attributes::new(),
        }
    }

    /// Create a parent node
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            kind: NodeKind::Parent,
            tag: Some(tag.to_string()),
            value: None,
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    /// Set an attribute, keeping the position of an existing one
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.kind == NodeKind::Leaf
    }

    pub fn is_parent(&self) -> bool {
        self.kind == NodeKind::Parent
    }

    /// Get the tag name, if any
    pub fn tag_name(&self) -> Option<&str> {
        self.tag.as_deref().filter(|t| !t.is_empty())
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &HtmlNode> {
        self.children.iter().flat_map(|c| c.iter())
    }

    /// Get all leaf text from this node and descendants
    pub fn text_content(&self) -> String {
        match self.kind {
            NodeKind::Leaf => self.value.clone().unwrap_or_default(),
            NodeKind::Parent => self.children().map(|child| child.text_content()).collect(),
        }
    }

    /// Get attributes as a string for HTML output, with a leading space
    pub fn attributes_string(&self) -> String {
        self.attributes
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, value))
            .collect()
    }
}
