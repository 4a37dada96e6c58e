//! Typed inline text spans produced by the tokenizer.

use std::fmt;

/// Span kinds recognized by the inline tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpanKind::Plain => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed fragment of inline text.
///
/// For links and images `text` holds the anchor or alt text and `url` the
/// target; every other kind has no url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
    pub url: Option<String>,
}

impl TextSpan {
    pub fn new(text: &str, kind: SpanKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
            url: None,
        }
    }

    pub fn with_url(text: &str, kind: SpanKind, url: &str) -> Self {
        Self {
            text: text.to_string(),
            kind,
            url: Some(url.to_string()),
        }
    }

    pub fn plain(text: &str) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: &str, url: &str) -> Self {
        Self::with_url(text, SpanKind::Link, url)
    }

    pub fn image(alt: &str, url: &str) -> Self {
        Self::with_url(alt, SpanKind::Image, url)
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextSpan({}, {}, {})",
            self.text,
            self.kind,
            self.url.as_deref().unwrap_or("None")
        )
    }
}
