//! Debug printing of lowered documents.
//!
//! The format is a fully parenthesised dump, one node per term: `brk` for a
//! break-point, `(l & r)` / `(l + r)` for unpadded / padded compositions and
//! `fix(..)` around fixed regions. An empty document prints as `null`.

use std::fmt;

use quire_ir::write_quoted;
use quire_stack::with_stack;

use super::{DocObj, Document, FixedObj};

fn write_comp<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    left: &T,
    right: &T,
    pad: bool,
) -> fmt::Result {
    let operator = if pad { '+' } else { '&' };
    write!(f, "({left} {operator} {right})")
}

impl fmt::Display for FixedObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_stack(|| match self {
            FixedObj::Text(data) => write_quoted(f, data),
            FixedObj::Comp { left, right, pad } => write_comp(f, left, right, *pad),
        })
    }
}

impl fmt::Display for DocObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_stack(|| match self {
            DocObj::Text(data) => write_quoted(f, data),
            DocObj::Fix(fixed) => write!(f, "fix({fixed})"),
            DocObj::Group(inner) => write!(f, "grp({inner})"),
            DocObj::Sequence(inner) => write!(f, "seq({inner})"),
            DocObj::Nest(inner) => write!(f, "nest({inner})"),
            DocObj::Pack(inner) => write!(f, "pack({inner})"),
            DocObj::Break => f.write_str("brk"),
            DocObj::Comp { left, right, pad } => write_comp(f, left, right, *pad),
        })
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{root}"),
            None => f.write_str("null"),
        }
    }
}
