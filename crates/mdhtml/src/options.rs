//! Configuration options for Markdown conversion

/// How newlines inside a paragraph are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoftBreak {
    /// Keep newlines as they appear in the source
    #[default]
    Preserve,
    /// Trim each line and join the lines with a single space
    Space,
}

/// Options for Markdown conversion
#[derive(Debug, Clone)]
pub struct Options {
    /// Strong delimiter
    pub strong_delimiter: String,

    /// Emphasis delimiter
    pub em_delimiter: char,

    /// Inline code delimiter
    pub code_delimiter: char,

    /// Tag of the node wrapping the whole document
    pub root_tag: String,

    /// Paragraph newline handling
    pub soft_break: SoftBreak,

    /// Read a fence info word as the code block language
    pub fence_language: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strong_delimiter: "**".to_string(),
            em_delimiter: '_',
            code_delimiter: '`',
            root_tag: "div".to_string(),
            soft_break: SoftBreak::Preserve,
            fence_language: false,
        }
    }
}
