//! Inline tokenizer: delimiter passes followed by image and link extraction.
//!
//! Each pass maps a span sequence to a new one and only looks inside
//! [`SpanKind::Plain`] spans, so text already claimed by an earlier pass is
//! never re-examined. The pass order is fixed: bold, italic, code, image, link.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::options::Options;
use crate::span::{SpanKind, TextSpan};
use crate::{MarkdownError, Result};

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("image pattern is valid"));

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("link pattern is valid"));

/// Which bracket-paren construct a splitting pass extracts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl LinkKind {
    fn pattern(&self) -> &'static Regex {
        match self {
            LinkKind::Link => &*LINK_PATTERN,
            LinkKind::Image => &*IMAGE_PATTERN,
        }
    }

    fn span_kind(&self) -> SpanKind {
        match self {
            LinkKind::Link => SpanKind::Link,
            LinkKind::Image => SpanKind::Image,
        }
    }
}

/// Split plain spans on a paired delimiter.
///
/// Text between pairs becomes `kind`; text outside keeps its kind. Empty
/// parts are dropped. An odd delimiter count in any plain span fails the
/// whole call.
pub fn split_delimited(
    spans: Vec<TextSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>> {
    if delimiter.is_empty() {
        return Ok(spans);
    }

    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let occurrences: Vec<usize> = span
            .text
            .match_indices(delimiter)
            .map(|(i, _)| i)
            .collect();
        if occurrences.is_empty() {
            result.push(span);
            continue;
        }

        if occurrences.len() % 2 != 0 {
            let position = occurrences.last().copied().unwrap_or_default();
            log::debug!("unclosed delimiter {:?} at byte {}", delimiter, position);
            return Err(MarkdownError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text,
                position,
            });
        }

        for (i, part) in span.text.split(delimiter).enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { span.kind } else { kind };
            result.push(TextSpan::new(part, part_kind));
        }
    }

    Ok(result)
}

/// Extract `(alt, url)` pairs of every `![alt](url)` in the text
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract(text, LinkKind::Image)
}

/// Extract `(text, url)` pairs of every `[text](url)` in the text.
///
/// A preceding `!` is not checked, so image syntax matches here too.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract(text, LinkKind::Link)
}

fn extract(text: &str, mode: LinkKind) -> Vec<(String, String)> {
    mode.pattern()
        .captures_iter(text)
        .map(|caps| (group(&caps, 1).to_string(), group(&caps, 2).to_string()))
        .collect()
}

fn group<'t>(caps: &regex::Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// Carve links or images out of plain spans.
///
/// Malformed syntax does not match and stays plain text.
pub fn split_by_links_or_images(spans: Vec<TextSpan>, mode: LinkKind) -> Vec<TextSpan> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let mut pieces = Vec::new();
        let mut rest_start = 0;

        for caps in mode.pattern().captures_iter(&span.text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };

            let before = &span.text[rest_start..whole.start()];
            if !before.is_empty() {
                pieces.push(TextSpan::new(before, span.kind));
            }
            pieces.push(TextSpan::with_url(
                group(&caps, 1),
                mode.span_kind(),
                group(&caps, 2),
            ));
            rest_start = whole.end();
        }

        if pieces.is_empty() {
            result.push(span);
            continue;
        }

        let after = &span.text[rest_start..];
        if !after.is_empty() {
            pieces.push(TextSpan::new(after, span.kind));
        }
        result.extend(pieces);
    }

    result
}

/// Tokenize inline text with the default delimiters
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>> {
    tokenize_with(text, &Options::default())
}

/// Tokenize inline text with the delimiters from `options`
pub fn tokenize_with(text: &str, options: &Options) -> Result<Vec<TextSpan>> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimited(spans, &options.strong_delimiter, SpanKind::Bold)?;
    let spans = split_delimited(spans, &options.em_delimiter.to_string(), SpanKind::Italic)?;
    let spans = split_delimited(spans, &options.code_delimiter.to_string(), SpanKind::Code)?;
    let spans = split_by_links_or_images(spans, LinkKind::Image);
    Ok(split_by_links_or_images(spans, LinkKind::Link))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn test_no_delimiter() {
        let spans = vec![TextSpan::plain("No formatting here")];
        let result = split_delimited(spans.clone(), "**", SpanKind::Bold).unwrap();
        assert_eq!(result, spans);
    }

    #[test]
    fn test_balanced_delimiters() {
        let spans = vec![TextSpan::plain("This is **bold** text")];
        let result = split_delimited(spans, "**", SpanKind::Bold).unwrap();
        assert_eq!(
            result,
            vec![
                TextSpan::plain("This is "),
                TextSpan::new("bold", SpanKind::Bold),
                TextSpan::plain(" text"),
            ]
        );
    }

    #[test]
    fn test_unbalanced_delimiters() {
        let spans = vec![TextSpan::plain("This is **bold text")];
        let err = split_delimited(spans, "**", SpanKind::Bold).unwrap_err();
        match err {
            MarkdownError::UnbalancedDelimiter {
                delimiter,
                text,
                position,
            } => {
                assert_eq!(delimiter, "**");
                assert_eq!(text, "This is **bold text");
                assert_eq!(position, 8);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unbalanced_pointer() {
        let err = tokenize("a **b** c **d").unwrap_err();
        assert_eq!(err.pointer().unwrap(), "a **b** c **d\n          ^^");
        assert_eq!(err.to_string(), "unclosed delimiter '**' in: a **b** c **d");
    }

    #[test]
    fn test_multiple_pairs() {
        let spans = vec![TextSpan::plain("**bold** and **strong**")];
        let result = split_delimited(spans, "**", SpanKind::Bold).unwrap();
        assert_eq!(
            result,
            vec![
                TextSpan::new("bold", SpanKind::Bold),
                TextSpan::plain(" and "),
                TextSpan::new("strong", SpanKind::Bold),
            ]
        );
    }

    #[test]
    fn test_typed_spans_are_not_examined() {
        let spans = vec![TextSpan::new("**ignore me**", SpanKind::Italic)];
        let result = split_delimited(spans.clone(), "**", SpanKind::Bold).unwrap();
        assert_eq!(result, spans);
    }

    #[test]
    fn test_empty_parts_are_dropped() {
        let spans = vec![TextSpan::plain("****")];
        let result = split_delimited(spans, "**", SpanKind::Bold).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_multiple_spans_mixed() {
        let spans = vec![
            TextSpan::plain("Hello **world**"),
            TextSpan::new("Not affected", SpanKind::Italic),
            TextSpan::plain("**Again** yes"),
        ];
        let result = split_delimited(spans, "**", SpanKind::Bold).unwrap();
        assert_eq!(
            result,
            vec![
                TextSpan::plain("Hello "),
                TextSpan::new("world", SpanKind::Bold),
                TextSpan::new("Not affected", SpanKind::Italic),
                TextSpan::new("Again", SpanKind::Bold),
                TextSpan::plain(" yes"),
            ]
        );
    }

    #[test]
    fn test_code_pass() {
        let spans = vec![TextSpan::plain("`This` is text with a `code block` `word`")];
        let result = split_delimited(spans, "`", SpanKind::Code).unwrap();
        assert_eq!(
            result,
            vec![
                TextSpan::new("This", SpanKind::Code),
                TextSpan::plain(" is text with a "),
                TextSpan::new("code block", SpanKind::Code),
                TextSpan::plain(" "),
                TextSpan::new("word", SpanKind::Code),
            ]
        );
    }

    #[test]
    fn test_extract_images() {
        assert_eq!(
            extract_images("This is text with an ![image1](https://www.domain.com/image1.png) space"),
            pairs(&[("image1", "https://www.domain.com/image1.png")])
        );
        assert_eq!(
            extract_images("![a](u1)![b](u2)"),
            pairs(&[("a", "u1"), ("b", "u2")])
        );
    }

    #[test]
    fn test_extract_links() {
        assert_eq!(
            extract_links("This is text with an [link1](https://www.domain.com/link1) space"),
            pairs(&[("link1", "https://www.domain.com/link1")])
        );
        assert_eq!(
            extract_links("[a](u1)[b](u2)"),
            pairs(&[("a", "u1"), ("b", "u2")])
        );
    }

    #[rstest]
    #[case("This is simple text")]
    #[case("without exclamation point [image](url)")]
    #[case("with spaces ! [image](url)")]
    #[case("with spaces ![image] (url)")]
    #[case("without url ![image]")]
    #[case("without image !(url)")]
    fn test_no_images(#[case] text: &str) {
        assert!(extract_images(text).is_empty());
    }

    #[rstest]
    #[case("This is simple text")]
    #[case("with spaces [link] (url)")]
    #[case("without url [link]")]
    #[case("without link (url)")]
    fn test_no_links(#[case] text: &str) {
        assert!(extract_links(text).is_empty());
    }

    #[rstest]
    #[case("![]()")]
    #[case("text in front ![]()")]
    #[case("![]() text at the end")]
    #[case("nospaces![]()nospaces")]
    fn test_empty_image(#[case] text: &str) {
        assert_eq!(extract_images(text), pairs(&[("", "")]));
    }

    #[rstest]
    #[case("[]()")]
    #[case("text in front []()")]
    #[case("[]() text at the end")]
    #[case("nospaces[]()nospaces")]
    fn test_empty_link(#[case] text: &str) {
        assert_eq!(extract_links(text), pairs(&[("", "")]));
    }

    #[rstest]
    #[case("[]()[]()")]
    #[case("[]()text in the middle[]()")]
    #[case("text in front []()text in the middle[]() text at the end")]
    fn test_empty_links(#[case] text: &str) {
        assert_eq!(extract_links(text), pairs(&[("", ""), ("", "")]));
    }

    #[test]
    fn test_link_pattern_matches_inside_image() {
        assert_eq!(extract_links("![alt](img.png)"), pairs(&[("alt", "img.png")]));
    }

    #[rstest]
    #[case("![image alt text](https://i.domain.com/img.png)", vec![
        TextSpan::image("image alt text", "https://i.domain.com/img.png"),
    ])]
    #[case("![]()", vec![TextSpan::image("", "")])]
    #[case("![only text]()", vec![TextSpan::image("only text", "")])]
    #[case("![](only url)", vec![TextSpan::image("", "only url")])]
    #[case("Text before ![img](url)", vec![
        TextSpan::plain("Text before "),
        TextSpan::image("img", "url"),
    ])]
    #[case("![img](url) text after", vec![
        TextSpan::image("img", "url"),
        TextSpan::plain(" text after"),
    ])]
    #[case(" ![img](url) ", vec![
        TextSpan::plain(" "),
        TextSpan::image("img", "url"),
        TextSpan::plain(" "),
    ])]
    fn test_split_images(#[case] text: &str, #[case] expected: Vec<TextSpan>) {
        let result = split_by_links_or_images(vec![TextSpan::plain(text)], LinkKind::Image);
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case("[text](url)", vec![TextSpan::link("text", "url")])]
    #[case("Before [text](url) after", vec![
        TextSpan::plain("Before "),
        TextSpan::link("text", "url"),
        TextSpan::plain(" after"),
    ])]
    #[case("[text1](url1)[text2](url2)", vec![
        TextSpan::link("text1", "url1"),
        TextSpan::link("text2", "url2"),
    ])]
    fn test_split_links(#[case] text: &str, #[case] expected: Vec<TextSpan>) {
        let result = split_by_links_or_images(vec![TextSpan::plain(text)], LinkKind::Link);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_split_skips_typed_spans() {
        let spans = vec![
            TextSpan::plain("Intro "),
            TextSpan::new("Already bold", SpanKind::Bold),
            TextSpan::new("![img](url)", SpanKind::Bold),
            TextSpan::plain("![img](url)"),
        ];
        let result = split_by_links_or_images(spans, LinkKind::Image);
        assert_eq!(
            result,
            vec![
                TextSpan::plain("Intro "),
                TextSpan::new("Already bold", SpanKind::Bold),
                TextSpan::new("![img](url)", SpanKind::Bold),
                TextSpan::image("img", "url"),
            ]
        );
    }

    #[rstest]
    #[case("![missing paren")]
    #[case("[text](url")]
    #[case("![img]url)")]
    #[case("Just some text")]
    fn test_malformed_syntax_stays_plain(#[case] text: &str) {
        let expected = vec![TextSpan::plain(text)];
        assert_eq!(
            split_by_links_or_images(vec![TextSpan::plain(text)], LinkKind::Image),
            expected
        );
        assert_eq!(
            split_by_links_or_images(vec![TextSpan::plain(text)], LinkKind::Link),
            expected
        );
        assert_eq!(tokenize(text).unwrap(), expected);
    }

    #[test]
    fn test_tokenize_all_kinds() {
        let text = "This is **text** with an _italic_ word and a `code block` and an \
                    ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            tokenize(text).unwrap(),
            vec![
                TextSpan::plain("This is "),
                TextSpan::new("text", SpanKind::Bold),
                TextSpan::plain(" with an "),
                TextSpan::new("italic", SpanKind::Italic),
                TextSpan::plain(" word and a "),
                TextSpan::new("code block", SpanKind::Code),
                TextSpan::plain(" and an "),
                TextSpan::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                TextSpan::plain(" and a "),
                TextSpan::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn test_tokenize_trailing_plain() {
        assert_eq!(
            tokenize("This is **text** with an _italic_ word and a `code block` ").unwrap(),
            vec![
                TextSpan::plain("This is "),
                TextSpan::new("text", SpanKind::Bold),
                TextSpan::plain(" with an "),
                TextSpan::new("italic", SpanKind::Italic),
                TextSpan::plain(" word and a "),
                TextSpan::new("code block", SpanKind::Code),
                TextSpan::plain(" "),
            ]
        );
    }

    #[test]
    fn test_tokenize_reconstructs_text() {
        let text = "Some **bold**, _italic_ and `code` text";
        let joined: String = tokenize(text)
            .unwrap()
            .iter()
            .map(|span| span.text.as_str())
            .collect();
        assert_eq!(joined, "Some bold, italic and code text");
    }

    #[test]
    fn test_tokenize_pass_order() {
        // Italic runs before code: the underscores pair up and leave each
        // backtick alone in its own plain span
        let err = tokenize("`a_b_c`").unwrap_err();
        assert!(matches!(
            err,
            MarkdownError::UnbalancedDelimiter { ref delimiter, .. } if delimiter == "`"
        ));

        assert_eq!(
            tokenize("`snake case`").unwrap(),
            vec![TextSpan::new("snake case", SpanKind::Code)]
        );
    }

    #[test]
    fn test_tokenize_image_is_not_a_link() {
        assert_eq!(
            tokenize("see ![cat](cat.png) or [docs](docs.html)").unwrap(),
            vec![
                TextSpan::plain("see "),
                TextSpan::image("cat", "cat.png"),
                TextSpan::plain(" or "),
                TextSpan::link("docs", "docs.html"),
            ]
        );
    }

    #[test]
    fn test_tokenize_unbalanced_italic() {
        let err = tokenize("an _unclosed emphasis").unwrap_err();
        assert!(matches!(
            err,
            MarkdownError::UnbalancedDelimiter { ref delimiter, .. } if delimiter == "_"
        ));
    }

    #[test]
    fn test_tokenize_with_custom_delimiters() {
        let options = Options {
            strong_delimiter: "__".to_string(),
            em_delimiter: '*',
            ..Default::default()
        };
        assert_eq!(
            tokenize_with("__strong__ and *em*", &options).unwrap(),
            vec![
                TextSpan::new("strong", SpanKind::Bold),
                TextSpan::plain(" and "),
                TextSpan::new("em", SpanKind::Italic),
            ]
        );
    }
}
