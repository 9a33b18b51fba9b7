//! Inline-span segmentation for a single line of prose.

use std::sync::LazyLock;

use regex::Regex;

use crate::node::InlineSpan;

/// Matches a bold span or an inline-code span, non-greedy, left to right.
/// First match wins; nesting and overlap are not supported.
static SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*.*?\*\*|`.*?`").unwrap());

/// Decompose one line into an ordered sequence of spans. Zero-length
/// fragments are discarded; everything between matches is plain text.
/// Single-asterisk emphasis is deliberately not recognized.
pub fn segment(line: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for m in SPAN_RE.find_iter(line) {
        if m.start() > cursor {
            spans.push(InlineSpan::Text(line[cursor..m.start()].to_string()));
        }
        let frag = m.as_str();
        if frag.starts_with("**") && frag.ends_with("**") && frag.len() >= 4 {
            spans.push(InlineSpan::Bold(frag[2..frag.len() - 2].to_string()));
        } else {
            spans.push(InlineSpan::Code(frag[1..frag.len() - 1].to_string()));
        }
        cursor = m.end();
    }
    if cursor < line.len() {
        spans.push(InlineSpan::Text(line[cursor..].to_string()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_is_one_span() {
        assert_eq!(segment("just text"), vec![InlineSpan::Text("just text".into())]);
    }

    #[test]
    fn test_bold_and_code_spans() {
        assert_eq!(
            segment("use **const** over `var` here"),
            vec![
                InlineSpan::Text("use ".into()),
                InlineSpan::Bold("const".into()),
                InlineSpan::Text(" over ".into()),
                InlineSpan::Code("var".into()),
                InlineSpan::Text(" here".into()),
            ]
        );
    }

    #[test]
    fn test_single_asterisk_is_not_emphasis() {
        assert_eq!(
            segment("Some *text* with `code`."),
            vec![
                InlineSpan::Text("Some *text* with ".into()),
                InlineSpan::Code("code".into()),
                InlineSpan::Text(".".into()),
            ]
        );
    }

    #[test]
    fn test_no_nesting_first_match_wins() {
        // The outer bold swallows the backticks; no inner code span.
        assert_eq!(
            segment("**a `b` c**"),
            vec![InlineSpan::Bold("a `b` c".into())]
        );
    }

    #[test]
    fn test_leading_and_trailing_delimiters() {
        assert_eq!(
            segment("`head` middle **tail**"),
            vec![
                InlineSpan::Code("head".into()),
                InlineSpan::Text(" middle ".into()),
                InlineSpan::Bold("tail".into()),
            ]
        );
    }
}
