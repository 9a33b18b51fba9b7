//! Terminal rendering of node sequences.
//!
//! The renderer extracts structure; this module is the styling caller,
//! mapping nodes to minimally ANSI-decorated lines.

use studyforge_markdown::{InlineSpan, NodeKind, RenderNode};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && std::env::var("TERM").map(|t| t != "dumb").unwrap_or(false)
}

/// Print a formatted error note. Generation failures are messages, not
/// exits.
pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

/// Print a node sequence to stdout.
pub fn print_nodes(nodes: &[RenderNode]) {
    let color = supports_color();
    for node in nodes {
        match &node.kind {
            NodeKind::Heading { level, text } => {
                let marker = "#".repeat(*level as usize - 1);
                if color {
                    println!("{MAGENTA}{BOLD}{marker} {text}{RESET}");
                } else {
                    println!("{marker} {text}");
                }
                println!();
            }
            NodeKind::Paragraph { spans } => {
                println!("{}", styled_spans(spans, color));
                println!();
            }
            NodeKind::List { ordered, items } => {
                for (i, item) in items.iter().enumerate() {
                    let bullet = if *ordered {
                        format!("{}.", i + 1)
                    } else {
                        "•".to_string()
                    };
                    println!("  {bullet} {}", styled_spans(item, color));
                }
                println!();
            }
            NodeKind::CodeBlock { language, code } => {
                if let Some(language) = language {
                    if color {
                        println!("{DIM}[{language}]{RESET}");
                    } else {
                        println!("[{language}]");
                    }
                }
                for line in code.lines() {
                    if color {
                        println!("  {CYAN}{line}{RESET}");
                    } else {
                        println!("  {line}");
                    }
                }
                println!();
            }
        }
    }
}

fn styled_spans(spans: &[InlineSpan], color: bool) -> String {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Text(t) => t.clone(),
            InlineSpan::Bold(t) => {
                if color {
                    format!("{BOLD}{t}{RESET}")
                } else {
                    t.clone()
                }
            }
            InlineSpan::Code(t) => {
                if color {
                    format!("{CYAN}{t}{RESET}")
                } else {
                    format!("`{t}`")
                }
            }
        })
        .collect()
}
