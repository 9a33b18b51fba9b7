//! Markdown-subset renderer.
//!
//! Turns a markdown-ish string into an ordered sequence of render nodes:
//! fenced code blocks become distinct leaf nodes, and the surrounding prose
//! is segmented line by line into headings, flat lists, and paragraphs with
//! inline bold/code spans. The renderer never fails: model output is
//! untrusted free text, and anything malformed degrades to plain paragraphs.

use std::sync::LazyLock;

use regex::Regex;

use crate::inline;
use crate::node::{InlineSpan, NodeKind, RenderNode};

/// Matches one complete fenced region, non-greedy, spanning lines. A fence
/// with no closing delimiter never matches and stays part of the prose.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Matches the interior of a fence segment: optional bare-word language tag
/// on the opening line, then the code itself.
static FENCE_INNER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").unwrap());

/// Matches a flat list item: optional indent, a `*`/`-`/`N.` marker, and
/// the item text.
static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\*|-|\d+\.)\s+(.*)").unwrap());

/// Renderer configuration. The structure extraction is shared by every
/// view; the only per-view difference is how many heading levels are
/// recognized. Visual styling is entirely the caller's concern.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// How many `#` marker depths are recognized as headings (1..=3,
    /// mapping to heading levels 2..=4). Deeper marker runs are plain
    /// paragraph text.
    pub heading_depth: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { heading_depth: 3 }
    }
}

/// Render with the default options (all three heading depths).
pub fn render(content: &str, key_prefix: &str) -> Vec<RenderNode> {
    render_with(content, key_prefix, RenderOptions::default())
}

/// Render `content` into an ordered node sequence. Keys are derived from
/// `key_prefix` plus positional indices, so re-rendering the same content
/// with the same prefix yields identical keys.
pub fn render_with(content: &str, key_prefix: &str, options: RenderOptions) -> Vec<RenderNode> {
    let mut nodes = Vec::new();

    // Walk alternating prose/fence segments, keeping a running segment
    // index so keys stay stable regardless of how many nodes each prose
    // segment expands into.
    let mut cursor = 0;
    let mut segment_index = 0;
    for m in FENCE_RE.find_iter(content) {
        prose_nodes(
            &content[cursor..m.start()],
            &format!("{key_prefix}-block-{segment_index}"),
            options,
            &mut nodes,
        );
        segment_index += 1;

        let (language, code) = parse_fence(m.as_str());
        nodes.push(RenderNode::new(
            format!("{key_prefix}-block-{segment_index}"),
            NodeKind::CodeBlock { language, code },
        ));
        segment_index += 1;

        cursor = m.end();
    }
    prose_nodes(
        &content[cursor..],
        &format!("{key_prefix}-block-{segment_index}"),
        options,
        &mut nodes,
    );

    nodes
}

/// Split a fence segment into its optional language tag and inner code.
/// The inner capture consumes exactly one leading/trailing newline plus
/// surrounding whitespace; the result is additionally trimmed.
pub fn parse_fence(block: &str) -> (Option<String>, String) {
    match FENCE_INNER_RE.captures(block) {
        Some(caps) => {
            let language = caps
                .get(1)
                .map(|m| m.as_str())
                .filter(|tag| !tag.is_empty())
                .map(str::to_string);
            let code = caps
                .get(2)
                .map(|m| m.as_str().trim())
                .unwrap_or_default()
                .to_string();
            (language, code)
        }
        None => (None, block.trim().to_string()),
    }
}

/// Segment one prose block into heading/list/paragraph nodes. A blank-only
/// block produces nothing.
fn prose_nodes(segment: &str, block_key: &str, options: RenderOptions, nodes: &mut Vec<RenderNode>) {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return;
    }

    let mut kinds: Vec<NodeKind> = Vec::new();
    let mut list_ordered: Option<bool> = None;
    let mut list_items: Vec<Vec<InlineSpan>> = Vec::new();

    fn flush_list(
        kinds: &mut Vec<NodeKind>,
        ordered: &mut Option<bool>,
        items: &mut Vec<Vec<InlineSpan>>,
    ) {
        if !items.is_empty() {
            kinds.push(NodeKind::List {
                ordered: ordered.unwrap_or(false),
                items: std::mem::take(items),
            });
        }
        *ordered = None;
    }

    for line in trimmed.split('\n') {
        if let Some(caps) = LIST_ITEM_RE.captures(line) {
            let marker = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            let ordered = marker != "*" && marker != "-";

            // A marker-class change closes the current list and starts a
            // new one of the other kind.
            if list_ordered.is_some_and(|current| current != ordered) {
                flush_list(&mut kinds, &mut list_ordered, &mut list_items);
            }
            list_ordered = Some(ordered);
            list_items.push(inline::segment(caps.get(3).map(|m| m.as_str()).unwrap_or_default()));
            continue;
        }

        flush_list(&mut kinds, &mut list_ordered, &mut list_items);
        if line.trim().is_empty() {
            continue;
        }

        if let Some((level, text)) = heading(line, options.heading_depth) {
            kinds.push(NodeKind::Heading {
                level,
                text: text.to_string(),
            });
        } else {
            kinds.push(NodeKind::Paragraph {
                spans: inline::segment(line),
            });
        }
    }
    flush_list(&mut kinds, &mut list_ordered, &mut list_items);

    for (i, kind) in kinds.into_iter().enumerate() {
        nodes.push(RenderNode::new(format!("{block_key}-el-{i}"), kind));
    }
}

/// Recognize a heading line within the configured marker depth. `# ` maps
/// to level 2, `## ` to 3, `### ` to 4; deeper marker runs are not headings.
fn heading(line: &str, depth: u8) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > depth.min(3) as usize {
        return None;
    }
    line[hashes..]
        .strip_prefix(' ')
        .map(|text| (hashes as u8 + 1, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(nodes: &[RenderNode]) -> Vec<&NodeKind> {
        nodes.iter().map(|n| &n.kind).collect()
    }

    #[test]
    fn test_plain_text_is_one_paragraph() {
        let nodes = render("just a sentence", "k");
        assert_eq!(nodes.len(), 1);
        assert_eq!(
            nodes[0].kind,
            NodeKind::Paragraph {
                spans: vec![InlineSpan::Text("just a sentence".into())],
            }
        );
    }

    #[test]
    fn test_blank_input_produces_no_nodes() {
        assert!(render("", "k").is_empty());
        assert!(render("  \n\n  ", "k").is_empty());
    }

    #[test]
    fn test_fence_only_input_is_one_code_block() {
        let nodes = render("```js\nconsole.log(1)\n```", "k");
        assert_eq!(nodes.len(), 1);
        assert_eq!(
            nodes[0].kind,
            NodeKind::CodeBlock {
                language: Some("js".into()),
                code: "console.log(1)".into(),
            }
        );
    }

    #[test]
    fn test_fence_without_language_tag() {
        let nodes = render("```\nlet x = 1;\n```", "k");
        assert_eq!(
            nodes[0].kind,
            NodeKind::CodeBlock {
                language: None,
                code: "let x = 1;".into(),
            }
        );
    }

    #[test]
    fn test_mixed_content_scenario() {
        let input = "# Title\n\nSome *text* with `code`.\n\n- item one\n- item two\n\n```js\nconsole.log(1)\n```";
        let nodes = render(input, "k");
        assert_eq!(
            kinds(&nodes),
            vec![
                &NodeKind::Heading {
                    level: 2,
                    text: "Title".into(),
                },
                &NodeKind::Paragraph {
                    spans: vec![
                        InlineSpan::Text("Some *text* with ".into()),
                        InlineSpan::Code("code".into()),
                        InlineSpan::Text(".".into()),
                    ],
                },
                &NodeKind::List {
                    ordered: false,
                    items: vec![
                        vec![InlineSpan::Text("item one".into())],
                        vec![InlineSpan::Text("item two".into())],
                    ],
                },
                &NodeKind::CodeBlock {
                    language: Some("js".into()),
                    code: "console.log(1)".into(),
                },
            ]
        );
    }

    #[test]
    fn test_marker_change_starts_a_new_list() {
        let nodes = render("* a\n1. b", "k");
        assert_eq!(
            kinds(&nodes),
            vec![
                &NodeKind::List {
                    ordered: false,
                    items: vec![vec![InlineSpan::Text("a".into())]],
                },
                &NodeKind::List {
                    ordered: true,
                    items: vec![vec![InlineSpan::Text("b".into())]],
                },
            ]
        );
    }

    #[test]
    fn test_blank_line_closes_a_list() {
        let nodes = render("- a\n\n- b", "k");
        assert_eq!(nodes.len(), 2);
        assert!(matches!(nodes[0].kind, NodeKind::List { .. }));
        assert!(matches!(nodes[1].kind, NodeKind::List { .. }));
    }

    #[test]
    fn test_heading_levels() {
        let nodes = render("# one\n## two\n### three\n#### four", "k");
        assert_eq!(
            kinds(&nodes),
            vec![
                &NodeKind::Heading { level: 2, text: "one".into() },
                &NodeKind::Heading { level: 3, text: "two".into() },
                &NodeKind::Heading { level: 4, text: "three".into() },
                &NodeKind::Paragraph {
                    spans: vec![InlineSpan::Text("#### four".into())],
                },
            ]
        );
    }

    #[test]
    fn test_compact_variant_caps_heading_depth() {
        let nodes = render_with("### deep\n# top", "k", RenderOptions { heading_depth: 2 });
        assert!(matches!(nodes[0].kind, NodeKind::Paragraph { .. }));
        assert_eq!(
            nodes[1].kind,
            NodeKind::Heading { level: 2, text: "top".into() }
        );
    }

    #[test]
    fn test_unterminated_fence_stays_prose() {
        let nodes = render("before\n```js\nlet x = 1;", "k");
        assert!(nodes.iter().all(|n| !matches!(n.kind, NodeKind::CodeBlock { .. })));
    }

    #[test]
    fn test_code_blocks_are_never_split_or_merged() {
        let input = "```a\none\n```\nmiddle\n```b\ntwo\n```";
        let nodes = render(input, "k");
        let code_blocks: Vec<_> = nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::CodeBlock { .. }))
            .collect();
        assert_eq!(code_blocks.len(), 2);
        assert!(matches!(
            nodes[1].kind,
            NodeKind::Paragraph { .. }
        ));
    }

    #[test]
    fn test_prose_text_survives_without_delimiters() {
        let nodes = render("Learn **closures** and the `let` keyword today", "k");
        let NodeKind::Paragraph { spans } = &nodes[0].kind else {
            panic!("expected a paragraph");
        };
        let concatenated: String = spans.iter().map(InlineSpan::text).collect();
        assert_eq!(concatenated, "Learn closures and the let keyword today");
    }

    #[test]
    fn test_keys_are_deterministic() {
        let input = "# Title\n\ntext\n\n```js\nx\n```";
        let first = render(input, "learn");
        let second = render(input, "learn");
        let keys: Vec<_> = first.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, vec!["learn-block-0-el-0", "learn-block-0-el-1", "learn-block-1"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fence_parse_recognizes_tag_independently() {
        let (lang, code) = parse_fence("```typescript\nconst n: number = 1;\n```");
        assert_eq!(lang.as_deref(), Some("typescript"));
        assert_eq!(code, "const n: number = 1;");

        let (lang, code) = parse_fence("```\nplain\n```");
        assert_eq!(lang, None);
        assert_eq!(code, "plain");
    }
}
