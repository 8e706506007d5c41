//! Width measurement for fit decisions.
//!
//! Every fit decision asks one question: if the renderer keeps going on the
//! current line, which column does it reach before the next place it could
//! break? Answering it needs two measurements of a node:
//!
//! - its **flat** span, everything rendered on one line (a group's content);
//! - its **prefix** span, up to its first break-point (a node waiting in the
//!   continuation).
//!
//! Spans only depend on the node, so [`Measurer`] caches them by node
//! address for the length of one render. [`Probe`] then places spans one
//! after another starting from the live render state.

mod span;

pub(crate) use span::Span;

use quire_stack::with_stack;
use rustc_hash::FxHashMap;
use unicode_width::UnicodeWidthStr;

use crate::document::{DocObj, FixedObj};

/// Display width of a text token.
#[inline]
pub(crate) fn text_width(data: &str) -> usize {
    data.width()
}

/// A node's span up to its first break-point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Prefix {
    pub span: Span,
    /// A break-point ends the prefix before the node does.
    pub stopped: bool,
}

impl Prefix {
    /// A prefix that runs to the end of its node.
    pub fn open(span: Span) -> Self {
        Prefix {
            span,
            stopped: false,
        }
    }

    /// This prefix followed by `next`, unless a break-point already ended it.
    #[must_use]
    pub fn then(self, next: Prefix) -> Prefix {
        if self.stopped {
            self
        } else {
            Prefix {
                span: self.span.then(next.span),
                stopped: next.stopped,
            }
        }
    }
}

/// Span measurements with an optional per-render cache.
pub(crate) struct Measurer {
    memoize: bool,
    flat_memo: FxHashMap<usize, Span>,
    prefix_memo: FxHashMap<usize, Prefix>,
    fixed_memo: FxHashMap<usize, Span>,
}

fn key<T>(node: &T) -> usize {
    std::ptr::from_ref(node) as usize
}

impl Measurer {
    pub fn new(memoize: bool) -> Self {
        Measurer {
            memoize,
            flat_memo: FxHashMap::default(),
            prefix_memo: FxHashMap::default(),
            fixed_memo: FxHashMap::default(),
        }
    }

    /// Span of `obj` with every break-point flat.
    pub fn flat(&mut self, obj: &DocObj) -> Span {
        if self.memoize {
            if let Some(span) = self.flat_memo.get(&key(obj)) {
                return *span;
            }
        }
        let span = with_stack(|| match obj {
            DocObj::Text(data) => Span::text(text_width(data)),
            DocObj::Fix(fixed) => self.fixed(fixed),
            DocObj::Group(inner)
            | DocObj::Sequence(inner)
            | DocObj::Nest(inner)
            | DocObj::Pack(inner) => self.flat(inner),
            DocObj::Break => Span::space(),
            DocObj::Comp { left, right, pad } => {
                let left = self.flat(left);
                let right = self.flat(right);
                left.pad(*pad).then(right)
            }
        });
        if self.memoize {
            self.flat_memo.insert(key(obj), span);
        }
        span
    }

    /// Span of `obj` up to its first break-point.
    pub fn prefix(&mut self, obj: &DocObj) -> Prefix {
        if self.memoize {
            if let Some(prefix) = self.prefix_memo.get(&key(obj)) {
                return *prefix;
            }
        }
        let prefix = with_stack(|| match obj {
            DocObj::Text(data) => Prefix::open(Span::text(text_width(data))),
            DocObj::Fix(fixed) => Prefix::open(self.fixed(fixed)),
            DocObj::Group(inner)
            | DocObj::Sequence(inner)
            | DocObj::Nest(inner)
            | DocObj::Pack(inner) => self.prefix(inner),
            DocObj::Break => Prefix {
                span: Span::EMPTY,
                stopped: true,
            },
            DocObj::Comp { left, right, pad } => {
                let left = self.prefix(left);
                if left.stopped {
                    left
                } else {
                    let padded = Prefix::open(left.span.pad(*pad));
                    padded.then(self.prefix(right))
                }
            }
        });
        if self.memoize {
            self.prefix_memo.insert(key(obj), prefix);
        }
        prefix
    }

    /// Span of a fixed region.
    pub fn fixed(&mut self, fixed: &FixedObj) -> Span {
        if self.memoize {
            if let Some(span) = self.fixed_memo.get(&key(fixed)) {
                return *span;
            }
        }
        let span = with_stack(|| match fixed {
            FixedObj::Text(data) => Span::text(text_width(data)),
            FixedObj::Comp { left, right, pad } => {
                let left = self.fixed(left);
                let right = self.fixed(right);
                left.pad(*pad).then(right)
            }
        });
        if self.memoize {
            self.fixed_memo.insert(key(fixed), span);
        }
        span
    }
}

/// Places spans on the current line, starting from a render state.
///
/// Mirrors how the renderer emits text: the first text of a line is
/// preceded by that line's indentation, requested spaces collapse into one,
/// and spaces are dropped at the start of a line.
pub(crate) struct Probe {
    width: usize,
    /// `None` while no text has been placed on the line yet.
    column: Option<usize>,
    pending: bool,
    indent: usize,
}

impl Probe {
    /// Start a probe at `column`, or at the start of a line indented by
    /// `indent` if `None`.
    pub fn new(width: usize, column: Option<usize>, pending: bool, indent: usize) -> Self {
        Probe {
            width,
            column,
            pending,
            indent,
        }
    }

    /// Place `span` after everything placed so far.
    pub fn push(&mut self, span: Span) {
        if !span.has_text {
            self.pending |= span.lead;
            return;
        }
        let column = match self.column {
            Some(column) => column + usize::from(self.pending || span.lead) + span.width,
            None => self.indent + span.width,
        };
        self.column = Some(column);
        self.pending = span.trail;
    }

    /// Column reached so far.
    pub fn column(&self) -> usize {
        self.column.unwrap_or(0)
    }

    /// Check if everything placed so far fits in the line width.
    pub fn fits(&self) -> bool {
        self.column() <= self.width
    }
}
