//! Lowering: `Layout` to `Document`.
//!
//! One recursive pass, with two modes. Breakable lowering keeps scopes and
//! turns each `LineBreak` into a [`DocObj::Break`] between its sides. Once a
//! `Fix` (or a fixed composition) is reached, the rest of that subtree goes
//! through fixed lowering, which only produces text and compositions: scopes
//! are dropped and a line break becomes a padded composition.
//!
//! Nulls are removed on the way. A composition with an empty side lowers to
//! the other side, and a scope around nothing lowers to nothing.

use quire_ir::Layout;
use quire_stack::with_stack;
use tracing::debug;

use crate::document::{DocObj, Document, FixedObj};
use crate::error::LowerError;

/// Validate `layout` and lower it into a renderable [`Document`].
///
/// # Errors
///
/// Returns [`LowerError::LineTerminator`] for the first text token (in
/// left-to-right order) that contains `\n` or `\r`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn compile(layout: &Layout) -> Result<Document, LowerError> {
    let root = lower(layout)?;
    debug!(empty = root.is_none(), "lowered layout");
    Ok(Document::new(root))
}

fn scoped(inner: Option<DocObj>, wrap: fn(Box<DocObj>) -> DocObj) -> Option<DocObj> {
    inner.map(|obj| wrap(Box::new(obj)))
}

fn join(left: Option<DocObj>, right: Option<DocObj>, pad: bool) -> Option<DocObj> {
    match (left, right) {
        (Some(left), Some(right)) => Some(DocObj::Comp {
            left: Box::new(left),
            right: Box::new(right),
            pad,
        }),
        (left, None) => left,
        (None, right) => right,
    }
}

fn join_fixed(left: Option<FixedObj>, right: Option<FixedObj>, pad: bool) -> Option<FixedObj> {
    match (left, right) {
        (Some(left), Some(right)) => Some(FixedObj::Comp {
            left: Box::new(left),
            right: Box::new(right),
            pad,
        }),
        (left, None) => left,
        (None, right) => right,
    }
}

fn lower(layout: &Layout) -> Result<Option<DocObj>, LowerError> {
    with_stack(|| {
        Ok(match layout {
            Layout::Null => None,
            Layout::Text(data) => {
                LowerError::check_text(data)?;
                Some(DocObj::Text(data.clone()))
            }
            Layout::Fix(inner) => lower_fixed(inner)?.map(DocObj::Fix),
            Layout::Group(inner) => scoped(lower(inner)?, DocObj::Group),
            Layout::Sequence(inner) => scoped(lower(inner)?, DocObj::Sequence),
            Layout::Nest(inner) => scoped(lower(inner)?, DocObj::Nest),
            Layout::Pack(inner) => scoped(lower(inner)?, DocObj::Pack),
            Layout::LineBreak(left, right) => {
                let left = join(lower(left)?, Some(DocObj::Break), false);
                join(left, lower(right)?, false)
            }
            Layout::Composition {
                left,
                right,
                pad,
                fix: true,
            } => join_fixed(lower_fixed(left)?, lower_fixed(right)?, *pad).map(DocObj::Fix),
            Layout::Composition {
                left,
                right,
                pad,
                fix: false,
            } => join(lower(left)?, lower(right)?, *pad),
        })
    })
}

fn lower_fixed(layout: &Layout) -> Result<Option<FixedObj>, LowerError> {
    with_stack(|| {
        Ok(match layout {
            Layout::Null => None,
            Layout::Text(data) => {
                LowerError::check_text(data)?;
                Some(FixedObj::Text(data.clone()))
            }
            Layout::Fix(inner)
            | Layout::Group(inner)
            | Layout::Sequence(inner)
            | Layout::Nest(inner)
            | Layout::Pack(inner) => lower_fixed(inner)?,
            Layout::LineBreak(left, right) => {
                join_fixed(lower_fixed(left)?, lower_fixed(right)?, true)
            }
            Layout::Composition {
                left, right, pad, ..
            } => join_fixed(lower_fixed(left)?, lower_fixed(right)?, *pad),
        })
    })
}

#[cfg(test)]
mod tests;
