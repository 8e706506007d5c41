//! The `Span` monoid.

/// What a piece of the document occupies when rendered on one line.
///
/// Spaces requested at either end are kept apart from `width`, since whether
/// they render depends on what sits next to the piece: two requests in a row
/// collapse into one space, and a request at the start of a line is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Span {
    /// Columns from the first text to the last, inner spaces included.
    pub width: usize,
    /// Whether the piece contains any text at all.
    pub has_text: bool,
    /// A space is requested before the first text.
    pub lead: bool,
    /// A space is requested after the last text.
    pub trail: bool,
}

impl Span {
    pub const EMPTY: Span = Span {
        width: 0,
        has_text: false,
        lead: false,
        trail: false,
    };

    /// A text token of `width` columns.
    pub fn text(width: usize) -> Span {
        Span {
            width,
            has_text: true,
            ..Span::EMPTY
        }
    }

    /// A request for one space.
    pub fn space() -> Span {
        Span {
            lead: true,
            trail: true,
            ..Span::EMPTY
        }
    }

    /// This span followed by a space request, if `pad`.
    #[must_use]
    pub fn pad(self, pad: bool) -> Span {
        if pad {
            self.then(Span::space())
        } else {
            self
        }
    }

    /// This span followed by `next` on the same line.
    #[must_use]
    pub fn then(self, next: Span) -> Span {
        match (self.has_text, next.has_text) {
            (false, _) => Span {
                lead: self.lead || next.lead,
                trail: if next.has_text {
                    next.trail
                } else {
                    self.trail || next.trail
                },
                ..next
            },
            (true, false) => Span {
                trail: self.trail || next.lead,
                ..self
            },
            (true, true) => Span {
                width: self.width + usize::from(self.trail || next.lead) + next.width,
                trail: next.trail,
                ..self
            },
        }
    }
}
