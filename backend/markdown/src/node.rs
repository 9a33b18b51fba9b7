//! Typed render nodes.
//!
//! One `RenderNode` is one structural unit of output. The sequence order is
//! significant and matches the input; keys are derived from the caller's
//! prefix plus positional indices, giving stable re-render identity.

use serde::{Deserialize, Serialize};

/// A run of text within a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineSpan {
    Text(String),
    Bold(String),
    Code(String),
}

impl InlineSpan {
    /// The span's text with its delimiters stripped.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Text(t) | InlineSpan::Bold(t) | InlineSpan::Code(t) => t,
        }
    }
}

/// The structural kind of a render node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    /// `level` is 2..=4: a `# ` line maps to level 2, `### ` to level 4.
    Heading {
        level: u8,
        text: String,
    },
    List {
        ordered: bool,
        items: Vec<Vec<InlineSpan>>,
    },
    Paragraph {
        spans: Vec<InlineSpan>,
    },
}

/// One structural unit of rendered output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderNode {
    pub key: String,
    pub kind: NodeKind,
}

impl RenderNode {
    pub fn new(key: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }
}
