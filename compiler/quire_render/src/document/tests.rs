use pretty_assertions::assert_eq;

use super::*;
use crate::emitter::WriteEmitter;
use crate::lower::compile;
use quire_ir::{group, line_break, null, text, Layout};

fn lowered(layout: &Layout) -> Document {
    match compile(layout) {
        Ok(document) => document,
        Err(err) => panic!("lowering failed: {err}"),
    }
}

#[test]
fn empty_document() {
    let document = lowered(&null());
    assert!(document.is_empty());
    assert_eq!(document.root(), None);
    assert_eq!(document.render(&RenderConfig::default()), "");
}

#[test]
fn root_is_exposed() {
    let document = lowered(&text("a"));
    assert_eq!(document.root(), Some(&DocObj::Text("a".to_string())));
}

#[test]
fn render_is_repeatable_at_different_widths() {
    let document = lowered(&group(line_break(text("left"), text("right"))));
    let wide = RenderConfig::default().with_width(80);
    let narrow = RenderConfig::default().with_width(5);
    assert_eq!(document.render(&wide), "left right");
    assert_eq!(document.render(&narrow), "left\nright");
    assert_eq!(document.render(&wide), "left right");
}

#[test]
fn render_into_writer() {
    let document = lowered(&group(line_break(text("a"), text("b"))));
    let mut emitter = WriteEmitter::new(Vec::new());
    document.render_into(&RenderConfig::default().with_width(1), &mut emitter);
    match emitter.finish() {
        Ok(bytes) => assert_eq!(bytes, b"a\nb"),
        Err(err) => panic!("write failed: {err}"),
    }
}

#[test]
fn deep_trees_drop() {
    let mut fixed = FixedObj::Text("x".to_string());
    let mut obj = DocObj::Break;
    for _ in 0..200_000 {
        fixed = FixedObj::Comp {
            left: Box::new(fixed),
            right: Box::new(FixedObj::Text("x".to_string())),
            pad: true,
        };
        obj = DocObj::Group(Box::new(DocObj::Comp {
            left: Box::new(DocObj::Text("x".to_string())),
            right: Box::new(obj),
            pad: false,
        }));
    }
    drop(fixed);
    drop(obj);
}
