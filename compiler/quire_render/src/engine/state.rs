//! Render state.

/// How break-points directly inside the current scope render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Scope {
    /// Every break-point is a newline. Also the scope outside all scopes.
    Broken,
    /// Every break-point is a space, including those of nested scopes.
    Flat,
    /// Each break-point is decided against the room left on the line.
    Pack,
    /// Like `Pack` until `forced`, then like `Broken`.
    Sequence { forced: bool },
}

/// Position and mode of the render pass.
///
/// Owned by one render call and only ever touched by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RenderState {
    /// No text has been emitted on the current line yet.
    pub head: bool,
    /// Indentation of the current line, fixed by the break-point that
    /// started it and emitted in front of the line's first text.
    pub indent: usize,
    /// A space has been requested before the next text.
    pub pending: bool,
    /// Indentation level in columns, applied to the next newline.
    pub lvl: usize,
    /// Current column.
    pub pos: usize,
    pub scope: Scope,
}

impl RenderState {
    pub fn new() -> Self {
        RenderState {
            head: true,
            indent: 0,
            pending: false,
            lvl: 0,
            pos: 0,
            scope: Scope::Broken,
        }
    }

    /// Column the next text would start at, `None` at the start of a line.
    pub fn column(&self) -> Option<usize> {
        (!self.head).then_some(self.pos)
    }

    pub fn is_flat(&self) -> bool {
        self.scope == Scope::Flat
    }
}
