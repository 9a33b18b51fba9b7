//! Markdown-Subset Renderer
//!
//! Converts the markdown-ish free text returned by the generation model
//! into an ordered sequence of typed render nodes that any surface (web,
//! terminal) can style. Only the subset the model is prompted to produce is
//! recognized: `#`/`##`/`###` headings, flat bullet and numbered lists,
//! `**bold**` and `` `inline code` `` spans, and triple-backtick fences.

pub mod flatten;
pub mod inline;
pub mod node;
pub mod renderer;

pub use flatten::flatten;
pub use node::{InlineSpan, NodeKind, RenderNode};
pub use renderer::{parse_fence, render, render_with, RenderOptions};
