//! Reconstruct flat markdown from a node sequence.
//!
//! The inverse of rendering for the supported subset: rendering the
//! flattened text again yields an equivalent node sequence. Used by the
//! terminal output path and by round-trip tests.

use crate::node::{InlineSpan, NodeKind, RenderNode};

/// Flatten a node sequence back into markdown text, blocks separated by
/// blank lines.
pub fn flatten(nodes: &[RenderNode]) -> String {
    let blocks: Vec<String> = nodes
        .iter()
        .map(|node| match &node.kind {
            NodeKind::Heading { level, text } => {
                format!("{} {}", "#".repeat(*level as usize - 1), text)
            }
            NodeKind::Paragraph { spans } => flatten_spans(spans),
            NodeKind::List { ordered, items } => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    if *ordered {
                        format!("{}. {}", i + 1, flatten_spans(item))
                    } else {
                        format!("- {}", flatten_spans(item))
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
            NodeKind::CodeBlock { language, code } => {
                format!("```{}\n{}\n```", language.as_deref().unwrap_or_default(), code)
            }
        })
        .collect();
    blocks.join("\n\n")
}

fn flatten_spans(spans: &[InlineSpan]) -> String {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Text(t) => t.clone(),
            InlineSpan::Bold(t) => format!("**{t}**"),
            InlineSpan::Code(t) => format!("`{t}`"),
        })
        .collect()
}
