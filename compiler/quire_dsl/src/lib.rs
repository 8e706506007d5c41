//! Textual syntax for quire layouts.
//!
//! A small expression language that maps one-to-one onto the combinators
//! in [`quire_ir`]:
//!
//! | Syntax          | Layout                                   |
//! |-----------------|------------------------------------------|
//! | `null`          | [`null()`](quire_ir::null)               |
//! | `"text"`        | [`text`](quire_ir::text)                 |
//! | `{0}`           | the first argument passed to [`parse`]   |
//! | `fix x`         | [`fix`](quire_ir::fix)                   |
//! | `grp x`         | [`group`](quire_ir::group)               |
//! | `seq x`         | [`sequence`](quire_ir::sequence)         |
//! | `nest x`        | [`nest`](quire_ir::nest)                 |
//! | `pack x`        | [`pack`](quire_ir::pack)                 |
//! | `l & r`         | composition without padding              |
//! | `l + r`         | composition with a space                 |
//! | `l !& r`        | fixed composition without padding        |
//! | `l !+ r`        | fixed composition with a space           |
//! | `l @ r`         | [`line_break`](quire_ir::line_break)     |
//! | `l @@ r`        | line break with an empty line between    |
//!
//! Prefix operators bind tightest, then the composition operators, then the
//! line break operators. Both infix levels are right-associative. Line
//! comments start with `//`.
//!
//! The [`Display`](std::fmt::Display) form of a [`Layout`] is valid syntax,
//! and parsing it gives back an equal layout.

mod error;
mod lexer;
mod parser;

pub use error::ParseError;
use quire_ir::Layout;

/// Parse `source` into a layout, substituting `args[n]` for each `{n}`.
///
/// ```
/// use quire_ir::{line_break, text};
///
/// let layout = quire_dsl::parse(r#""let" + {0} @ "in""#, &[text("x")]).unwrap();
/// assert_eq!(layout, line_break(
///     quire_ir::composition(text("let"), text("x"), true, false),
///     text("in"),
/// ));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str, args: &[Layout]) -> Result<Layout, ParseError> {
    let tokens = lexer::lex(source)?;
    parser::Parser::new(&tokens, source.len(), args).parse_document()
}
