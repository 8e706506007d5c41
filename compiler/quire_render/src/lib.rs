//! Quire Render
//!
//! Turns a [`Layout`] into text no wider than a given line width, where the
//! layout's break-points allow it.
//!
//! # Architecture
//!
//! Rendering runs in two steps:
//!
//! 1. **Lower**: [`compile`] validates the layout and rewrites it into a
//!    canonical [`Document`]. Nulls disappear, line breaks become explicit
//!    break-points, and every fixed region becomes a [`FixedObj`] tree that
//!    has no way to express a line break.
//! 2. **Render**: a single pass over the document driven by an explicit work
//!    stack. The stack doubles as the continuation of the node being
//!    rendered, so every fit decision measures the node *and* whatever
//!    follows it up to the next break-point.
//!
//! # Decisions
//!
//! - A `Group` measures its content flat plus the continuation; it renders
//!   all flat if that fits, otherwise all of its own break-points break.
//! - A `Pack` decides each break-point on its own, greedily.
//! - A `Sequence` decides like a `Pack` until the first break, after which
//!   every remaining break-point of that sequence breaks.
//! - Break-points outside all three scopes always break.
//!
//! # Modules
//!
//! - [`document`]: the lowered tree
//! - [`lower`]: `Layout` to `Document`
//! - [`emitter`]: output sinks
//! - `measure`, `cursor`, `engine`: the render pass

mod config;
mod cursor;
pub mod document;
pub mod emitter;
mod engine;
mod error;
pub mod lower;
mod measure;

pub use config::{RenderConfig, DEFAULT_TAB, DEFAULT_WIDTH};
pub use document::{DocObj, Document, FixedObj};
pub use emitter::{Emitter, StringEmitter, WriteEmitter};
pub use error::LowerError;
pub use lower::compile;
pub use quire_ir::Layout;

/// Lower and render `layout` with `tab` columns per indentation level and a
/// target line width of `width`.
///
/// # Example
///
/// ```
/// use quire_ir::{group, line_break, text};
/// use quire_render::render;
///
/// let layout = group(line_break(text("a"), text("b")));
/// assert_eq!(render(&layout, 2, 80).unwrap(), "a b");
/// assert_eq!(render(&layout, 2, 1).unwrap(), "a\nb");
/// ```
pub fn render(layout: &Layout, tab: usize, width: usize) -> Result<String, LowerError> {
    let config = RenderConfig::default().with_tab(tab).with_width(width);
    Ok(compile(layout)?.render(&config))
}
