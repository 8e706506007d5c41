//! The render pass.
//!
//! A loop over the [`Cursor`] that emits text and decides break-points.
//! Scope changes are undone by `Control` entries pushed beneath a scope's
//! content, so leaving a scope is just another step of the loop.
//!
//! Fit decisions happen in three places:
//!
//! - entering a `Group` outside a flat scope measures the group flat, then
//!   the continuation up to its first break-point;
//! - a break-point in a `Pack` (or an unforced `Sequence`) measures a space,
//!   then the continuation up to its first break-point;
//! - nothing else decides anything: flat scopes and broken scopes render
//!   their break-points without looking.

mod state;

pub(crate) use state::Scope;

use tracing::trace;

use crate::config::RenderConfig;
use crate::cursor::{Control, Cursor, Step, Work};
use crate::document::{DocObj, FixedObj};
use crate::emitter::Emitter;
use crate::measure::{text_width, Measurer, Prefix, Probe, Span};
use state::RenderState;

/// Render the tree rooted at `root` into `emitter`.
#[tracing::instrument(level = "debug", skip_all, fields(tab = config.tab, width = config.width))]
pub(crate) fn render<E: Emitter>(root: &DocObj, config: &RenderConfig, emitter: &mut E) {
    let mut engine = Engine {
        config,
        emitter,
        state: RenderState::new(),
        measurer: Measurer::new(config.memoize),
        cursor: Cursor::new(root),
    };
    engine.run();
    trace!(column = engine.state.pos, "render complete");
}

struct Engine<'c, 'd, E: Emitter> {
    config: &'c RenderConfig,
    emitter: &'c mut E,
    state: RenderState,
    measurer: Measurer,
    cursor: Cursor<'d>,
}

impl<'d, E: Emitter> Engine<'_, 'd, E> {
    fn run(&mut self) {
        loop {
            match self.cursor.step() {
                Step::Done => return,
                Step::Skip(control) => self.apply(control),
                Step::Pending(obj) | Step::Last(obj) => self.visit(obj),
            }
        }
    }

    fn apply(&mut self, control: Control) {
        match control {
            Control::Pad => self.state.pending = true,
            Control::Restore(scope) => self.state.scope = scope,
            Control::Dedent(lvl) => self.state.lvl = lvl,
        }
    }

    fn visit(&mut self, obj: &'d DocObj) {
        match obj {
            DocObj::Text(data) => self.emit_text(data),
            DocObj::Fix(fixed) => self.visit_fixed(fixed),
            DocObj::Group(inner) => self.enter_group(inner),
            DocObj::Sequence(inner) => self.enter(inner, Scope::Sequence { forced: false }),
            DocObj::Pack(inner) => self.enter(inner, Scope::Pack),
            DocObj::Nest(inner) => {
                self.cursor.push_control(Control::Dedent(self.state.lvl));
                self.state.lvl = self.config.next_tab_stop(self.state.lvl);
                self.cursor.push(inner);
            }
            DocObj::Break => self.visit_break(),
            DocObj::Comp { left, right, pad } => {
                self.cursor.push(right);
                if *pad {
                    self.cursor.push_control(Control::Pad);
                }
                self.cursor.push(left);
            }
        }
    }

    /// Switch to `scope` for the duration of `inner`. Inside a flat scope
    /// everything stays flat.
    fn enter(&mut self, inner: &'d DocObj, scope: Scope) {
        if !self.state.is_flat() {
            self.cursor.push_control(Control::Restore(self.state.scope));
            self.state.scope = scope;
        }
        self.cursor.push(inner);
    }

    fn enter_group(&mut self, inner: &'d DocObj) {
        if self.state.is_flat() {
            self.cursor.push(inner);
            return;
        }
        let span = self.measurer.flat(inner);
        let probe = self.lookahead(span);
        let fits = probe.fits();
        trace!(column = probe.column(), fits, "group");
        self.enter(inner, if fits { Scope::Flat } else { Scope::Broken });
    }

    fn visit_break(&mut self) {
        match self.state.scope {
            Scope::Flat => self.state.pending = true,
            Scope::Broken | Scope::Sequence { forced: true } => self.newline(),
            Scope::Pack => {
                let probe = self.lookahead(Span::space());
                trace!(column = probe.column(), fits = probe.fits(), "pack break-point");
                if probe.fits() {
                    self.state.pending = true;
                } else {
                    self.newline();
                }
            }
            Scope::Sequence { forced: false } => {
                let probe = self.lookahead(Span::space());
                trace!(column = probe.column(), fits = probe.fits(), "sequence break-point");
                if probe.fits() {
                    self.state.pending = true;
                } else {
                    self.state.scope = Scope::Sequence { forced: true };
                    self.newline();
                }
            }
        }
    }

    /// Place `first` on the current line, followed by the continuation up to
    /// its first break-point.
    fn lookahead(&mut self, first: Span) -> Probe {
        let mut probe = Probe::new(
            self.config.width,
            self.state.column(),
            self.state.pending,
            self.state.indent,
        );
        probe.push(first);
        if self.config.memoize {
            if probe.fits() {
                let measurer = &mut self.measurer;
                let tail = self.cursor.continuation(|work| work_prefix(measurer, work));
                probe.push(tail.span);
            }
            return probe;
        }
        for work in self.cursor.rest() {
            if !probe.fits() {
                break;
            }
            let prefix = work_prefix(&mut self.measurer, *work);
            probe.push(prefix.span);
            if prefix.stopped {
                break;
            }
        }
        probe
    }

    fn visit_fixed(&mut self, fixed: &FixedObj) {
        let mut stack = vec![(false, fixed)];
        while let Some((pad, fixed)) = stack.pop() {
            match fixed {
                FixedObj::Text(data) => {
                    self.state.pending |= pad;
                    self.emit_text(data);
                }
                FixedObj::Comp {
                    left,
                    right,
                    pad: inner,
                } => {
                    stack.push((*inner, right.as_ref()));
                    stack.push((pad, left.as_ref()));
                }
            }
        }
    }

    fn emit_text(&mut self, data: &str) {
        if self.state.head {
            self.emitter.emit_indent(self.state.indent);
            self.state.pos = self.state.indent;
            self.state.head = false;
        } else if self.state.pending {
            self.emitter.emit_space();
            self.state.pos += 1;
        }
        self.state.pending = false;
        self.emitter.emit(data);
        self.state.pos += text_width(data);
    }

    fn newline(&mut self) {
        self.emitter.emit_newline();
        self.state.head = true;
        self.state.indent = self.state.lvl;
        self.state.pending = false;
        self.state.pos = 0;
    }
}

/// Prefix of one pending work entry.
fn work_prefix(measurer: &mut Measurer, work: Work<'_>) -> Prefix {
    match work {
        Work::Render(obj) => measurer.prefix(obj),
        Work::Control(Control::Pad) => Prefix::open(Span::space()),
        Work::Control(Control::Dedent(_) | Control::Restore(_)) => Prefix::open(Span::EMPTY),
    }
}
