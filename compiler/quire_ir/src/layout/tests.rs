use pretty_assertions::assert_eq;

use super::*;

#[test]
fn constructors_build_expected_nodes() {
    assert_eq!(null(), Layout::Null);
    assert_eq!(text("a"), Layout::Text("a".to_string()));
    assert_eq!(group(text("a")), Layout::Group(Box::new(text("a"))));
    assert_eq!(
        composition(text("a"), text("b"), true, false),
        Layout::Composition {
            left: Box::new(text("a")),
            right: Box::new(text("b")),
            pad: true,
            fix: false,
        }
    );
}

#[test]
fn default_is_null() {
    assert!(Layout::default().is_null());
    assert!(!text("").is_null());
}

#[test]
fn from_str_is_text() {
    assert_eq!(Layout::from("x"), text("x"));
    assert_eq!(Layout::from(String::from("y")), text("y"));
}

#[test]
fn layouts_are_reusable() {
    let shared = group(line_break(text("a"), text("b")));
    let twice = composition(shared.clone(), shared, true, false);
    assert_eq!(
        twice.to_string(),
        r#"grp ("a" @ "b") + grp ("a" @ "b")"#
    );
}

#[test]
fn deep_layouts_drop() {
    let mut layout = text("x");
    for depth in 0..200_000 {
        layout = match depth % 3 {
            0 => nest(line_break(layout, text("x"))),
            1 => composition(text("x"), layout, true, false),
            _ => fix(layout),
        };
    }
    drop(layout);
}

#[cfg(feature = "serde")]
#[test]
fn layout_serde_roundtrip() {
    // Covers every variant.
    let layout = composition(
        line_break(
            group(nest(text("let"))),
            sequence(pack(composition(text("a"), null(), true, false))),
        ),
        fix(text("\"quoted\"")),
        false,
        true,
    );

    let bytes = bincode::serialize(&layout).unwrap_or_else(|e| panic!("serialize failed: {e}"));
    let deserialized: Layout =
        bincode::deserialize(&bytes).unwrap_or_else(|e| panic!("deserialize failed: {e}"));

    assert_eq!(deserialized, layout);
    assert_eq!(deserialized.to_string(), layout.to_string());
}

mod display {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn atoms() {
        assert_eq!(null().to_string(), "null");
        assert_eq!(text("hi").to_string(), "\"hi\"");
    }

    #[test]
    fn prefix_operators() {
        assert_eq!(fix(text("a")).to_string(), "fix \"a\"");
        assert_eq!(group(text("a")).to_string(), "grp \"a\"");
        assert_eq!(sequence(text("a")).to_string(), "seq \"a\"");
        assert_eq!(nest(text("a")).to_string(), "nest \"a\"");
        assert_eq!(pack(text("a")).to_string(), "pack \"a\"");
        assert_eq!(nest(group(text("a"))).to_string(), "nest grp \"a\"");
    }

    #[test]
    fn infix_operators() {
        let (a, b) = (text("a"), text("b"));
        assert_eq!(line_break(a.clone(), b.clone()).to_string(), "\"a\" @ \"b\"");
        assert_eq!(
            composition(a.clone(), b.clone(), false, false).to_string(),
            "\"a\" & \"b\""
        );
        assert_eq!(
            composition(a.clone(), b.clone(), true, false).to_string(),
            "\"a\" + \"b\""
        );
        assert_eq!(
            composition(a.clone(), b.clone(), false, true).to_string(),
            "\"a\" !& \"b\""
        );
        assert_eq!(composition(a, b, true, true).to_string(), "\"a\" !+ \"b\"");
    }

    #[test]
    fn infix_operands_are_parenthesised() {
        let layout = line_break(
            composition(text("a"), text("b"), true, false),
            group(line_break(text("c"), text("d"))),
        );
        assert_eq!(layout.to_string(), "(\"a\" + \"b\") @ grp (\"c\" @ \"d\")");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(text("say \"hi\"").to_string(), r#""say \"hi\"""#);
        assert_eq!(text("a\\b").to_string(), r#""a\\b""#);
        assert_eq!(text("tab\there").to_string(), r#""tab\there""#);
        assert_eq!(text("bell\u{7}").to_string(), r#""bell\u{7}""#);
    }
}
