//! The traversal cursor.
//!
//! The renderer never recurses into the document. Instead it keeps a stack
//! of pending [`Work`]: the top is what renders next, everything beneath it
//! is what remains of the document afterwards. That remainder is exactly the
//! continuation a fit decision has to look into, so [`Cursor::rest`] hands it
//! out in rendering order.
//!
//! Entries beneath a stack slot never change while the slot is occupied, so
//! the continuation prefix from any slot can be cached next to it until the
//! slot is popped. [`Cursor::continuation`] fills that cache lazily.

use crate::document::DocObj;
use crate::engine::Scope;
use crate::measure::{Prefix, Span};

/// Bookkeeping that renders nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Control {
    /// The padding space between the two sides of a composition.
    Pad,
    /// Leave a group, sequence or pack and return to the enclosing scope.
    Restore(Scope),
    /// Leave a `Nest` and return to the saved indentation level.
    Dedent(usize),
}

/// One unit of pending work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Work<'d> {
    Render(&'d DocObj),
    Control(Control),
}

/// What the cursor yields next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step<'d> {
    /// Nothing is left to render.
    Done,
    /// No content at this step, only bookkeeping.
    Skip(Control),
    /// Render this object; more work follows it.
    Pending(&'d DocObj),
    /// Render this object; nothing follows it anywhere in the document.
    Last(&'d DocObj),
}

/// The work stack.
pub(crate) struct Cursor<'d> {
    stack: Vec<Work<'d>>,
    /// Continuation prefix from each slot down, once measured.
    tails: Vec<Option<Prefix>>,
    /// `Render` entries on the stack.
    objects: usize,
}

impl<'d> Cursor<'d> {
    /// A cursor positioned before `root`.
    pub fn new(root: &'d DocObj) -> Self {
        Cursor {
            stack: vec![Work::Render(root)],
            tails: vec![None],
            objects: 1,
        }
    }

    /// Schedule `obj` to render before everything already scheduled.
    pub fn push(&mut self, obj: &'d DocObj) {
        self.stack.push(Work::Render(obj));
        self.tails.push(None);
        self.objects += 1;
    }

    /// Schedule bookkeeping before everything already scheduled.
    pub fn push_control(&mut self, control: Control) {
        self.stack.push(Work::Control(control));
        self.tails.push(None);
    }

    /// Take the next step.
    pub fn step(&mut self) -> Step<'d> {
        self.tails.pop();
        match self.stack.pop() {
            None => Step::Done,
            Some(Work::Control(control)) => Step::Skip(control),
            Some(Work::Render(obj)) => {
                self.objects -= 1;
                if self.objects == 0 {
                    Step::Last(obj)
                } else {
                    Step::Pending(obj)
                }
            }
        }
    }

    /// Everything still scheduled, in rendering order.
    pub fn rest(&self) -> impl Iterator<Item = &Work<'d>> + '_ {
        self.stack.iter().rev()
    }

    /// Prefix of everything still scheduled, up to the first break-point.
    ///
    /// `measure` gives the prefix of a single entry. Results are cached per
    /// slot, so each entry is measured once while it stays on the stack.
    pub fn continuation(&mut self, mut measure: impl FnMut(Work<'d>) -> Prefix) -> Prefix {
        let mut open = Vec::new();
        let mut tail = Prefix::open(Span::EMPTY);
        for slot in (0..self.stack.len()).rev() {
            if let Some(cached) = self.tails[slot] {
                tail = cached;
                break;
            }
            let own = measure(self.stack[slot]);
            open.push((slot, own));
            if own.stopped {
                break;
            }
        }
        for (slot, own) in open.into_iter().rev() {
            tail = own.then(tail);
            self.tails[slot] = Some(tail);
        }
        tail
    }
}
