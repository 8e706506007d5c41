//! Top-level error type.

use std::io;

use quire_dsl::ParseError;
use quire_render::LowerError;

/// Anything that can stop a source document from rendering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid layout: {0}")]
    Lower(#[from] LowerError),

    #[error(transparent)]
    Io(#[from] io::Error),

    /// Bad command-line usage.
    #[error("{0}")]
    Usage(String),
}
