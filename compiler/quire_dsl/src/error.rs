//! Parse errors.

use std::ops::Range;

/// Failure to read layout syntax.
///
/// Every variant carries the byte range of the offending source text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input that starts no token.
    #[error("unrecognised input at byte {}", span.start)]
    UnrecognisedInput { span: Range<usize> },

    /// A string literal with no closing quote.
    #[error("unterminated string starting at byte {}", span.start)]
    UnterminatedString { span: Range<usize> },

    /// A backslash sequence that is not a known escape.
    #[error("invalid escape {escape:?} at byte {}", span.start)]
    InvalidEscape { escape: String, span: Range<usize> },

    /// An argument hole whose index does not fit in `usize`.
    #[error("argument index {text} is too large")]
    InvalidHole { text: String, span: Range<usize> },

    /// An argument hole with no matching argument.
    #[error("argument {{{index}}} is missing: {supplied} supplied")]
    MissingArgument {
        index: usize,
        supplied: usize,
        span: Range<usize>,
    },

    /// A token where something else was required.
    #[error("expected {expected}, found {found} at byte {}", span.start)]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
        span: Range<usize>,
    },

    /// The input ended where something else was required.
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd {
        expected: &'static str,
        span: Range<usize>,
    },
}

impl ParseError {
    /// Byte range of the source text the error points at.
    pub fn span(&self) -> Range<usize> {
        match self {
            ParseError::UnrecognisedInput { span }
            | ParseError::UnterminatedString { span }
            | ParseError::InvalidEscape { span, .. }
            | ParseError::InvalidHole { span, .. }
            | ParseError::MissingArgument { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEnd { span, .. } => span.clone(),
        }
    }
}
