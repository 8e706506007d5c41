#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::{lex, TokenKind};
use crate::ParseError;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().into_iter().map(|token| token.kind).collect()
}

#[test]
fn keywords_and_operators() {
    assert_eq!(
        kinds("null fix grp seq nest pack ( ) & + !& !+ @ @@"),
        vec![
            TokenKind::Null,
            TokenKind::Fix,
            TokenKind::Grp,
            TokenKind::Seq,
            TokenKind::Nest,
            TokenKind::Pack,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::Amp,
            TokenKind::Plus,
            TokenKind::FixAmp,
            TokenKind::FixPlus,
            TokenKind::At,
            TokenKind::AtAt,
        ]
    );
}

#[test]
fn operators_without_spaces() {
    assert_eq!(
        kinds(r#""a"@@"b"!+"c""#),
        vec![
            TokenKind::Text("a".into()),
            TokenKind::AtAt,
            TokenKind::Text("b".into()),
            TokenKind::FixPlus,
            TokenKind::Text("c".into()),
        ]
    );
}

#[test]
fn comments_and_newlines_are_skipped() {
    let source = "// heading\ngrp // trailing\n  {0}\n";
    assert_eq!(kinds(source), vec![TokenKind::Grp, TokenKind::Hole(0)]);
}

#[test]
fn spans_are_byte_ranges() {
    let tokens = lex(r#"nest "é" {12}"#).unwrap();
    let spans: Vec<_> = tokens.iter().map(|token| token.span.clone()).collect();
    assert_eq!(spans, vec![0..4, 5..9, 10..14]);
    assert_eq!(tokens[2].kind, TokenKind::Hole(12));
}

#[test]
fn keyword_prefixes_are_words() {
    assert_eq!(kinds("nullable grp2"), vec![TokenKind::Word, TokenKind::Word]);
}

mod strings {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain() {
        assert_eq!(kinds(r#""hello world""#), vec![TokenKind::Text("hello world".into())]);
    }

    #[test]
    fn empty() {
        assert_eq!(kinds(r#""""#), vec![TokenKind::Text(String::new())]);
    }

    #[test]
    fn escapes() {
        assert_eq!(
            kinds(r#""q\" b\\ n\n r\r t\t""#),
            vec![TokenKind::Text("q\" b\\ n\n r\r t\t".into())]
        );
    }

    #[test]
    fn unicode_escapes() {
        assert_eq!(
            kinds(r#""\u{41}\u{1b}\u{1F600}!""#),
            vec![TokenKind::Text("A\u{1b}\u{1F600}!".into())]
        );
    }

    #[test]
    fn invalid_escape() {
        assert_eq!(
            lex(r#""ab\q""#),
            Err(ParseError::InvalidEscape {
                escape: "\\q".into(),
                span: 3..5,
            })
        );
    }

    #[test]
    fn invalid_unicode_escape() {
        assert_eq!(
            lex(r#""\u{d800}""#),
            Err(ParseError::InvalidEscape {
                escape: "\\u{d800}".into(),
                span: 1..9,
            })
        );
        assert!(matches!(lex(r#""\u41""#), Err(ParseError::InvalidEscape { .. })));
        assert!(matches!(lex(r#""\u{}""#), Err(ParseError::InvalidEscape { .. })));
    }

    #[test]
    fn unterminated() {
        assert_eq!(
            lex(r#"grp "abc"#),
            Err(ParseError::UnterminatedString { span: 4..8 })
        );
    }
}

#[test]
fn unrecognised_input() {
    assert_eq!(lex("grp $"), Err(ParseError::UnrecognisedInput { span: 4..5 }));
}

#[test]
fn oversized_hole() {
    let source = "{99999999999999999999999999}";
    assert_eq!(
        lex(source),
        Err(ParseError::InvalidHole {
            text: "99999999999999999999999999".into(),
            span: 0..source.len(),
        })
    );
}
