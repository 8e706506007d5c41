//! Render configuration.

/// Default columns per indentation level.
pub const DEFAULT_TAB: usize = 4;

/// Default target line width.
pub const DEFAULT_WIDTH: usize = 80;

/// Configuration for a render pass.
///
/// Both numbers are unsigned, so the degenerate cases are the zeros:
///
/// - `tab == 0` disables indentation. `Nest` has no effect and every line
///   starts at column 0.
/// - `width == 0` leaves no room for anything visible, so every group breaks
///   and every pack or sequence break-point in front of visible text breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    /// Columns per indentation level.
    pub tab: usize,

    /// Target line width. Unbreakable text may still exceed it.
    pub width: usize,

    /// Cache lookahead measurements per node for the duration of one render.
    /// Never changes the output.
    pub memoize: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tab: DEFAULT_TAB,
            width: DEFAULT_WIDTH,
            memoize: true,
        }
    }
}

impl RenderConfig {
    /// Set the indentation unit.
    #[must_use]
    pub fn with_tab(self, tab: usize) -> Self {
        Self { tab, ..self }
    }

    /// Set the target line width.
    #[must_use]
    pub fn with_width(self, width: usize) -> Self {
        Self { width, ..self }
    }

    /// Turn off lookahead caching.
    #[must_use]
    pub fn without_memo(self) -> Self {
        Self {
            memoize: false,
            ..self
        }
    }

    /// The indentation level one tab stop past `lvl`.
    ///
    /// Levels snap to the grid of tab stops, so a level that is not a
    /// multiple of `tab` rounds up to the next one.
    #[inline]
    pub fn next_tab_stop(&self, lvl: usize) -> usize {
        if self.tab == 0 {
            return lvl;
        }
        lvl + (self.tab - lvl % self.tab)
    }
}
