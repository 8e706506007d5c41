//! The lowered document tree.
//!
//! Two trees make up a document. [`DocObj`] is the breakable tree: text,
//! scopes, break-points and compositions. Each fixed region is a [`FixedObj`]
//! tree, which only has text and compositions, so nothing inside a fixed
//! region can ever render a newline.
//!
//! Neither tree contains an empty node. Lowering drops nulls and
//! compositions with a null side, so every node renders something, even if
//! that is only a break-point.

mod display;

use crate::config::RenderConfig;
use crate::emitter::{Emitter, StringEmitter};
use crate::engine;

/// A node of the breakable tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DocObj {
    /// An atomic token.
    Text(String),
    /// A region rendered without breaks.
    Fix(FixedObj),
    /// Direct break-points break together.
    Group(Box<DocObj>),
    /// Direct break-points break from the first one that has to.
    Sequence(Box<DocObj>),
    /// Raise the indentation level by one tab stop.
    Nest(Box<DocObj>),
    /// Direct break-points are decided one at a time.
    Pack(Box<DocObj>),
    /// A break-point: a newline when broken, a space when flat.
    Break,
    /// `left` then `right`, with a space in between if `pad` and both sides
    /// share a line.
    Comp {
        left: Box<DocObj>,
        right: Box<DocObj>,
        pad: bool,
    },
}

/// A node of a fixed region.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FixedObj {
    /// An atomic token.
    Text(String),
    /// `left` then `right`, with a space in between if `pad`.
    Comp {
        left: Box<FixedObj>,
        right: Box<FixedObj>,
        pad: bool,
    },
}

impl DocObj {
    /// Move boxed children that have children of their own onto `pending`.
    fn detach_children(&mut self, pending: &mut Vec<DocObj>) {
        let mut detach = |child: &mut DocObj| {
            if !matches!(child, DocObj::Text(_) | DocObj::Fix(_) | DocObj::Break) {
                pending.push(std::mem::replace(child, DocObj::Break));
            }
        };
        match self {
            DocObj::Text(_) | DocObj::Fix(_) | DocObj::Break => {}
            DocObj::Group(inner)
            | DocObj::Sequence(inner)
            | DocObj::Nest(inner)
            | DocObj::Pack(inner) => detach(&mut **inner),
            DocObj::Comp { left, right, .. } => {
                detach(&mut **left);
                detach(&mut **right);
            }
        }
    }
}

impl Drop for DocObj {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Drop for FixedObj {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let FixedObj::Comp { left, right, .. } = self {
            pending.push(std::mem::replace(&mut **left, FixedObj::Text(String::new())));
            pending.push(std::mem::replace(&mut **right, FixedObj::Text(String::new())));
        }
        while let Some(mut node) = pending.pop() {
            if let FixedObj::Comp { left, right, .. } = &mut node {
                pending.push(std::mem::replace(&mut **left, FixedObj::Text(String::new())));
                pending.push(std::mem::replace(&mut **right, FixedObj::Text(String::new())));
            }
        }
    }
}

/// A lowered layout, ready to render any number of times.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Document {
    root: Option<DocObj>,
}

impl Document {
    pub(crate) fn new(root: Option<DocObj>) -> Self {
        Document { root }
    }

    /// The root of the breakable tree, `None` for an empty document.
    pub fn root(&self) -> Option<&DocObj> {
        self.root.as_ref()
    }

    /// Check if the document renders to the empty string.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Render to a string.
    pub fn render(&self, config: &RenderConfig) -> String {
        let mut emitter = StringEmitter::new();
        self.render_into(config, &mut emitter);
        emitter.output()
    }

    /// Render into any emitter.
    pub fn render_into<E: Emitter>(&self, config: &RenderConfig, emitter: &mut E) {
        if let Some(root) = &self.root {
            engine::render(root, config, emitter);
        }
    }
}

#[cfg(test)]
mod tests;
