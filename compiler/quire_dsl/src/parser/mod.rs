//! Recursive-descent parser over cooked tokens.
//!
//! ```text
//! document := lines EOF
//! lines    := comps (('@' | '@@') comps)*
//! comps    := prefix (('&' | '+' | '!&' | '!+') prefix)*
//! prefix   := ('fix' | 'grp' | 'seq' | 'nest' | 'pack') prefix | atom
//! atom     := 'null' | STRING | HOLE | '(' lines ')'
//! ```
//!
//! Infix chains are collected left to right and folded from the right, so
//! long chains need no recursion. Nesting through prefixes and parentheses
//! recurses under a stack guard.

use std::ops::Range;

use quire_ir::{composition, fix, group, line_break, nest, null, pack, sequence, text, Layout};
use quire_stack::with_stack;

use crate::lexer::{Token, TokenKind};
use crate::ParseError;

const LAYOUT: &str = "a layout";

pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    args: &'a [Layout],
    /// Byte length of the source, for end-of-input spans.
    end: usize,
    pos: usize,
}

/// Line break operators.
#[derive(Clone, Copy)]
enum Break {
    Single,
    Double,
}

/// Composition operators as `(pad, fix)`.
type Join = (bool, bool);

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token], end: usize, args: &'a [Layout]) -> Self {
        Parser {
            tokens,
            args,
            end,
            pos: 0,
        }
    }

    pub(crate) fn parse_document(mut self) -> Result<Layout, ParseError> {
        let layout = self.parse_lines()?;
        match self.peek() {
            None => Ok(layout),
            Some(token) => Err(ParseError::UnexpectedToken {
                expected: "an operator or end of input",
                found: token.kind.display_name(),
                span: token.span.clone(),
            }),
        }
    }

    // -- Cursor --

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn end_span(&self) -> Range<usize> {
        self.end..self.end
    }

    // -- Grammar --

    fn parse_lines(&mut self) -> Result<Layout, ParseError> {
        let first = self.parse_comps()?;
        let mut rest = Vec::new();
        while let Some(op) = self.peek().and_then(|token| match token.kind {
            TokenKind::At => Some(Break::Single),
            TokenKind::AtAt => Some(Break::Double),
            _ => None,
        }) {
            self.pos += 1;
            rest.push((op, self.parse_comps()?));
        }
        Ok(fold_right(first, rest, |left, op, right| match op {
            Break::Single => line_break(left, right),
            Break::Double => line_break(left, line_break(null(), right)),
        }))
    }

    fn parse_comps(&mut self) -> Result<Layout, ParseError> {
        let first = self.parse_prefix()?;
        let mut rest: Vec<(Join, Layout)> = Vec::new();
        while let Some(op) = self.peek().and_then(|token| match token.kind {
            TokenKind::Amp => Some((false, false)),
            TokenKind::Plus => Some((true, false)),
            TokenKind::FixAmp => Some((false, true)),
            TokenKind::FixPlus => Some((true, true)),
            _ => None,
        }) {
            self.pos += 1;
            rest.push((op, self.parse_prefix()?));
        }
        Ok(fold_right(first, rest, |left, (pad, fixed), right| {
            composition(left, right, pad, fixed)
        }))
    }

    fn parse_prefix(&mut self) -> Result<Layout, ParseError> {
        let wrap: fn(Layout) -> Layout = match self.peek().map(|token| &token.kind) {
            Some(TokenKind::Fix) => fix,
            Some(TokenKind::Grp) => group,
            Some(TokenKind::Seq) => sequence,
            Some(TokenKind::Nest) => nest,
            Some(TokenKind::Pack) => pack,
            _ => return self.parse_atom(),
        };
        self.pos += 1;
        with_stack(|| self.parse_prefix()).map(wrap)
    }

    fn parse_atom(&mut self) -> Result<Layout, ParseError> {
        let Some(token) = self.bump() else {
            return Err(ParseError::UnexpectedEnd {
                expected: LAYOUT,
                span: self.end_span(),
            });
        };
        match &token.kind {
            TokenKind::Null => Ok(null()),
            TokenKind::Text(data) => Ok(text(data.as_str())),
            TokenKind::Hole(index) => {
                self.args
                    .get(*index)
                    .cloned()
                    .ok_or_else(|| ParseError::MissingArgument {
                        index: *index,
                        supplied: self.args.len(),
                        span: token.span.clone(),
                    })
            }
            TokenKind::LParen => {
                let inner = with_stack(|| self.parse_lines())?;
                self.expect_close()?;
                Ok(inner)
            }
            other => Err(ParseError::UnexpectedToken {
                expected: LAYOUT,
                found: other.display_name(),
                span: token.span.clone(),
            }),
        }
    }

    fn expect_close(&mut self) -> Result<(), ParseError> {
        match self.bump() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(()),
            Some(token) => Err(ParseError::UnexpectedToken {
                expected: "`)`",
                found: token.kind.display_name(),
                span: token.span.clone(),
            }),
            None => Err(ParseError::UnexpectedEnd {
                expected: "`)`",
                span: self.end_span(),
            }),
        }
    }
}

/// Fold `first op1 x1 op2 x2 ...` as `first op1 (x1 op2 (x2 ...))`.
fn fold_right<Op>(
    first: Layout,
    rest: Vec<(Op, Layout)>,
    join: impl Fn(Layout, Op, Layout) -> Layout,
) -> Layout {
    let mut operands = Vec::with_capacity(rest.len() + 1);
    let mut ops = Vec::with_capacity(rest.len());
    operands.push(first);
    for (op, operand) in rest {
        ops.push(op);
        operands.push(operand);
    }
    let mut acc = operands.pop().unwrap_or_default();
    while let (Some(op), Some(left)) = (ops.pop(), operands.pop()) {
        acc = join(left, op, acc);
    }
    acc
}
