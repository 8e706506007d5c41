//! Quire
//!
//! Width-aware document layout. Describe a document with the combinators
//! (or the layout syntax), then render it to fit a line width.
//!
//! ```
//! use quire::{group, line_break, nest, text, RenderConfig};
//!
//! let call = group(nest(line_break(text("call("), text("argument)"))));
//! let document = quire::compile(&call).unwrap();
//! assert_eq!(document.render(&RenderConfig::default()), "call( argument)");
//! assert_eq!(
//!     document.render(&RenderConfig::default().with_width(10)),
//!     "call(\n    argument)"
//! );
//! ```
//!
//! # Crates
//!
//! - `quire_ir`: the [`Layout`] tree and its combinators
//! - `quire_render`: lowering into a [`Document`] and rendering
//! - `quire_dsl`: the layout syntax read by [`parse`]

use std::sync::Once;

pub mod cli;
mod error;

pub use error::Error;
pub use quire_dsl::{parse, ParseError};
pub use quire_ir::{
    composition, fix, group, line_break, nest, null, pack, sequence, text, Layout,
};
pub use quire_render::{
    compile, render, Document, Emitter, LowerError, RenderConfig, StringEmitter, WriteEmitter,
    DEFAULT_TAB, DEFAULT_WIDTH,
};

/// Parse `source` with `args` for its holes, then render it.
pub fn render_source(
    source: &str,
    args: &[Layout],
    config: &RenderConfig,
) -> Result<String, Error> {
    let layout = parse(source, args)?;
    Ok(compile(&layout)?.render(config))
}

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set, and only runs once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
