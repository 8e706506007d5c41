//! Tokenizer for layout syntax.
//!
//! `RawToken` is the logos-derived scanner output. `lex` cooks it into
//! [`Token`]s: string literals are unescaped and argument holes parsed, so
//! the parser never looks at source text again.

use std::ops::Range;

use logos::Logos;

use crate::ParseError;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("null")]
    Null,
    #[token("fix")]
    Fix,
    #[token("grp")]
    Grp,
    #[token("seq")]
    Seq,
    #[token("nest")]
    Nest,
    #[token("pack")]
    Pack,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("&")]
    Amp,
    #[token("+")]
    Plus,
    #[token("!&")]
    FixAmp,
    #[token("!+")]
    FixPlus,
    #[token("@")]
    At,
    #[token("@@")]
    AtAt,

    #[regex(r"\{[0-9]+\}")]
    Hole,

    #[regex(r#""([^"\\]|\\[^\n])*""#)]
    String,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
}

/// Cooked token kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Null,
    Fix,
    Grp,
    Seq,
    Nest,
    Pack,
    LParen,
    RParen,
    Amp,
    Plus,
    FixAmp,
    FixPlus,
    At,
    AtAt,
    /// `{n}`
    Hole(usize),
    /// Unescaped contents of a string literal.
    Text(String),
    /// A bare word that is not a keyword.
    Word,
}

impl TokenKind {
    /// Human-readable name for error messages.
    pub(crate) fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Null => "`null`",
            TokenKind::Fix => "`fix`",
            TokenKind::Grp => "`grp`",
            TokenKind::Seq => "`seq`",
            TokenKind::Nest => "`nest`",
            TokenKind::Pack => "`pack`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Amp => "`&`",
            TokenKind::Plus => "`+`",
            TokenKind::FixAmp => "`!&`",
            TokenKind::FixPlus => "`!+`",
            TokenKind::At => "`@`",
            TokenKind::AtAt => "`@@`",
            TokenKind::Hole(_) => "argument",
            TokenKind::Text(_) => "string",
            TokenKind::Word => "identifier",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

/// Lex `source` into cooked tokens, stopping at the first error.
pub(crate) fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = logos.span();
        let slice = logos.slice();
        let kind = match result {
            Ok(raw) => match convert(raw, slice, span.clone())? {
                Some(kind) => kind,
                None => continue,
            },
            Err(()) if slice.starts_with('"') => {
                return Err(ParseError::UnterminatedString {
                    span: span.start..source.len(),
                });
            }
            Err(()) => return Err(ParseError::UnrecognisedInput { span }),
        };
        tokens.push(Token { kind, span });
    }

    tracing::trace!(count = tokens.len(), "lexed");
    Ok(tokens)
}

/// Cook a raw token; trivia converts to `None`.
fn convert(
    raw: RawToken,
    slice: &str,
    span: Range<usize>,
) -> Result<Option<TokenKind>, ParseError> {
    Ok(Some(match raw {
        RawToken::LineComment => return Ok(None),
        RawToken::Null => TokenKind::Null,
        RawToken::Fix => TokenKind::Fix,
        RawToken::Grp => TokenKind::Grp,
        RawToken::Seq => TokenKind::Seq,
        RawToken::Nest => TokenKind::Nest,
        RawToken::Pack => TokenKind::Pack,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Plus => TokenKind::Plus,
        RawToken::FixAmp => TokenKind::FixAmp,
        RawToken::FixPlus => TokenKind::FixPlus,
        RawToken::At => TokenKind::At,
        RawToken::AtAt => TokenKind::AtAt,
        RawToken::Word => TokenKind::Word,
        RawToken::Hole => {
            let digits = &slice[1..slice.len() - 1];
            let index = digits.parse().map_err(|_| ParseError::InvalidHole {
                text: digits.to_owned(),
                span,
            })?;
            TokenKind::Hole(index)
        }
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::Text(unescape(content, span.start + 1)?)
        }
    }))
}

/// Unescape a string literal's content (between the `"`s).
///
/// Valid escapes: `\"` `\\` `\n` `\r` `\t` `\u{hex}`.
fn unescape(content: &str, base: usize) -> Result<String, ParseError> {
    if !content.contains('\\') {
        return Ok(content.to_owned());
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        let invalid = |end: usize| ParseError::InvalidEscape {
            escape: content[i..end].to_owned(),
            span: base + i..base + end,
        };
        let Some((j, esc)) = chars.next() else {
            return Err(invalid(content.len()));
        };
        match esc {
            '"' => result.push('"'),
            '\\' => result.push('\\'),
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            'u' => {
                let open = j + 1;
                let close = content[open..].find('}').map(|at| open + at);
                let decoded = close
                    .filter(|_| content[open..].starts_with('{'))
                    .and_then(|close| u32::from_str_radix(&content[open + 1..close], 16).ok())
                    .and_then(char::from_u32);
                match (decoded, close) {
                    (Some(decoded), Some(close)) => {
                        result.push(decoded);
                        while chars.next_if(|&(k, _)| k <= close).is_some() {}
                    }
                    _ => return Err(invalid(close.map_or(open, |close| close + 1))),
                }
            }
            other => return Err(invalid(j + other.len_utf8())),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests;
