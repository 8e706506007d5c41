use super::*;
use quire_ir::{composition, fix, group, line_break, nest, null, pack, sequence, text};

fn root(layout: &Layout) -> Option<DocObj> {
    match compile(layout) {
        Ok(document) => document.root().cloned(),
        Err(err) => panic!("lowering failed: {err}"),
    }
}

fn doc_text(data: &str) -> DocObj {
    DocObj::Text(data.to_string())
}

fn fixed_text(data: &str) -> FixedObj {
    FixedObj::Text(data.to_string())
}

fn comp(left: DocObj, right: DocObj, pad: bool) -> DocObj {
    DocObj::Comp {
        left: Box::new(left),
        right: Box::new(right),
        pad,
    }
}

mod nulls {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn null_lowers_to_nothing() {
        assert_eq!(root(&null()), None);
    }

    #[test]
    fn null_is_composition_identity() {
        assert_eq!(
            root(&composition(null(), text("a"), true, false)),
            Some(doc_text("a"))
        );
        assert_eq!(
            root(&composition(text("a"), null(), true, false)),
            Some(doc_text("a"))
        );
    }

    #[test]
    fn empty_scopes_vanish() {
        assert_eq!(root(&group(null())), None);
        assert_eq!(root(&nest(pack(sequence(null())))), None);
        assert_eq!(root(&fix(null())), None);
    }

    #[test]
    fn empty_text_is_kept() {
        assert_eq!(root(&text("")), Some(doc_text("")));
    }
}

mod breakable {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn line_break_becomes_break_point() {
        assert_eq!(
            root(&line_break(text("a"), text("b"))),
            Some(comp(comp(doc_text("a"), DocObj::Break, false), doc_text("b"), false))
        );
    }

    #[test]
    fn line_break_with_null_side_keeps_break_point() {
        assert_eq!(
            root(&line_break(null(), text("b"))),
            Some(comp(DocObj::Break, doc_text("b"), false))
        );
        assert_eq!(root(&line_break(null(), null())), Some(DocObj::Break));
    }

    #[test]
    fn scopes_are_preserved() {
        assert_eq!(
            root(&group(nest(text("a")))),
            Some(DocObj::Group(Box::new(DocObj::Nest(Box::new(doc_text("a"))))))
        );
        assert_eq!(
            root(&pack(text("a"))),
            Some(DocObj::Pack(Box::new(doc_text("a"))))
        );
        assert_eq!(
            root(&sequence(text("a"))),
            Some(DocObj::Sequence(Box::new(doc_text("a"))))
        );
    }

    #[test]
    fn composition_keeps_pad() {
        assert_eq!(
            root(&composition(text("a"), text("b"), true, false)),
            Some(comp(doc_text("a"), doc_text("b"), true))
        );
    }
}

mod fixed {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fix_drops_scopes_and_breaks() {
        let layout = fix(group(nest(line_break(text("a"), pack(text("b"))))));
        assert_eq!(
            root(&layout),
            Some(DocObj::Fix(FixedObj::Comp {
                left: Box::new(fixed_text("a")),
                right: Box::new(fixed_text("b")),
                pad: true,
            }))
        );
    }

    #[test]
    fn fixed_composition_flattens_subtree() {
        let layout = composition(group(line_break(text("a"), text("b"))), text("c"), false, true);
        assert_eq!(
            root(&layout),
            Some(DocObj::Fix(FixedObj::Comp {
                left: Box::new(FixedObj::Comp {
                    left: Box::new(fixed_text("a")),
                    right: Box::new(fixed_text("b")),
                    pad: true,
                }),
                right: Box::new(fixed_text("c")),
                pad: false,
            }))
        );
    }

    #[test]
    fn fixed_line_break_with_null_side_is_other_side() {
        assert_eq!(
            root(&fix(line_break(null(), text("b")))),
            Some(DocObj::Fix(fixed_text("b")))
        );
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn newline_in_text_is_rejected() {
        let err = compile(&group(text("a\nb")));
        assert_eq!(
            err,
            Err(LowerError::LineTerminator {
                text: "a\nb".to_string(),
                offset: 1,
            })
        );
    }

    #[test]
    fn carriage_return_in_fixed_text_is_rejected() {
        let err = compile(&fix(composition(text("ok"), text("x\r"), true, false)));
        assert!(matches!(err, Err(LowerError::LineTerminator { offset: 1, .. })));
    }

    #[test]
    fn first_offending_text_is_reported() {
        let layout = line_break(text("one\n"), text("\ntwo"));
        match compile(&layout) {
            Err(LowerError::LineTerminator { text, .. }) => assert_eq!(text, "one\n"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn error_message() {
        let err = LowerError::LineTerminator {
            text: "a\nb".to_string(),
            offset: 1,
        };
        assert_eq!(
            err.to_string(),
            "text \"a\\nb\" contains a line terminator at byte 1"
        );
    }
}

#[test]
fn deep_nesting_lowers() {
    let mut layout = text("x");
    for _ in 0..200_000 {
        layout = composition(layout, text("x"), false, false);
    }
    assert!(compile(&layout).is_ok());
}
