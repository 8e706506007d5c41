//! Printing layouts in DSL syntax.
//!
//! Infix operands are parenthesised whenever they are infix themselves, so
//! the printed form parses back to the same tree without relying on
//! precedence or associativity.

use std::fmt::{self, Write};

use quire_stack::with_stack;

use super::Layout;

/// Write `data` as a double-quoted literal, escaping quotes, backslashes and
/// control characters.
pub fn write_quoted(out: &mut impl Write, data: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in data.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c.is_control() => write!(out, "\\u{{{:x}}}", u32::from(c))?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

fn write_operand(f: &mut fmt::Formatter<'_>, layout: &Layout) -> fmt::Result {
    if layout.is_binary() {
        write!(f, "({layout})")
    } else {
        write!(f, "{layout}")
    }
}

fn write_prefix(f: &mut fmt::Formatter<'_>, keyword: &str, inner: &Layout) -> fmt::Result {
    f.write_str(keyword)?;
    f.write_char(' ')?;
    write_operand(f, inner)
}

fn write_infix(
    f: &mut fmt::Formatter<'_>,
    left: &Layout,
    operator: &str,
    right: &Layout,
) -> fmt::Result {
    write_operand(f, left)?;
    write!(f, " {operator} ")?;
    write_operand(f, right)
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_stack(|| match self {
            Layout::Null => f.write_str("null"),
            Layout::Text(data) => write_quoted(f, data),
            Layout::Fix(inner) => write_prefix(f, "fix", inner),
            Layout::Group(inner) => write_prefix(f, "grp", inner),
            Layout::Sequence(inner) => write_prefix(f, "seq", inner),
            Layout::Nest(inner) => write_prefix(f, "nest", inner),
            Layout::Pack(inner) => write_prefix(f, "pack", inner),
            Layout::LineBreak(left, right) => write_infix(f, left, "@", right),
            Layout::Composition {
                left,
                right,
                pad,
                fix,
            } => {
                let operator = match (*fix, *pad) {
                    (false, false) => "&",
                    (false, true) => "+",
                    (true, false) => "!&",
                    (true, true) => "!+",
                };
                write_infix(f, left, operator, right)
            }
        })
    }
}
