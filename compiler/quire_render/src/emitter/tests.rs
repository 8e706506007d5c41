use std::io;

use super::*;

#[test]
fn string_emitter_basic() {
    let mut emitter = StringEmitter::new();
    emitter.emit("hello");
    emitter.emit_space();
    emitter.emit("world");
    assert_eq!(emitter.output(), "hello world");
}

#[test]
fn string_emitter_indentation_is_in_columns() {
    let mut emitter = StringEmitter::new();
    emitter.emit("head");
    emitter.emit_newline();
    emitter.emit_indent(2);
    emitter.emit("body");
    emitter.emit_newline();
    emitter.emit_indent(0);
    emitter.emit("tail");
    assert_eq!(emitter.output(), "head\n  body\ntail");
}

#[test]
fn write_emitter_long_indent() {
    let mut emitter = WriteEmitter::new(Vec::new());
    emitter.emit_indent(70);
    emitter.emit("x");
    let bytes = match emitter.finish() {
        Ok(bytes) => bytes,
        Err(err) => panic!("write failed: {err}"),
    };
    assert_eq!(bytes.len(), 71);
    assert!(bytes[..70].iter().all(|b| *b == b' '));
}

struct Broken;

impl io::Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_emitter_reports_first_error() {
    let mut emitter = WriteEmitter::new(Broken);
    emitter.emit("a");
    emitter.emit_newline();
    match emitter.finish() {
        Ok(_) => panic!("expected an error"),
        Err(err) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
    }
}
