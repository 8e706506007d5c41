//! Output Emitter
//!
//! Sinks the render pass writes into. Rendering only ever emits text,
//! newlines and runs of spaces, so a sink needs exactly those four calls.

use std::io::{self, Write};

/// Trait for receiving rendered output.
pub trait Emitter {
    /// Emit a text token.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit `spaces` columns of indentation.
    fn emit_indent(&mut self, spaces: usize);

    /// Emit a single space.
    fn emit_space(&mut self);
}

/// String-based emitter for in-memory rendering.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the rendered output.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, spaces: usize) {
        self.buffer.extend(std::iter::repeat(' ').take(spaces));
    }

    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }
}

/// Emitter that streams into any `io::Write`.
///
/// Emit calls cannot fail, so the first write error is kept and every later
/// call is skipped. [`WriteEmitter::finish`] reports it.
pub struct WriteEmitter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> WriteEmitter<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_all(bytes) {
            self.error = Some(err);
        }
    }

    /// Flush and return the writer, or the first error that occurred.
    ///
    /// # Errors
    ///
    /// Returns the first write error, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Emitter for WriteEmitter<W> {
    fn emit(&mut self, text: &str) {
        self.write(text.as_bytes());
    }

    fn emit_newline(&mut self) {
        self.write(b"\n");
    }

    fn emit_indent(&mut self, spaces: usize) {
        const BLANKS: &[u8] = b"                                ";
        let mut left = spaces;
        while left > 0 {
            let chunk = left.min(BLANKS.len());
            self.write(&BLANKS[..chunk]);
            left -= chunk;
        }
    }

    fn emit_space(&mut self) {
        self.write(b" ");
    }
}

#[cfg(test)]
mod tests;
