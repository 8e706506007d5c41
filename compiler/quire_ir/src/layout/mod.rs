//! The `Layout` tree and its constructors.

mod display;

pub use display::write_quoted;

/// A document layout.
///
/// Trees are immutable once built. Subtrees are owned, so sharing a piece
/// between two documents means cloning it; rendering only ever borrows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    /// The empty layout. Identity for every composition.
    #[default]
    Null,
    /// An atomic token. Must not contain a line terminator.
    Text(String),
    /// Render the inner layout without any line breaks.
    Fix(Box<Layout>),
    /// Break-points directly inside are all flat or all broken.
    Group(Box<Layout>),
    /// Break-points directly inside stay flat until one has to break.
    Sequence(Box<Layout>),
    /// Lines broken inside are indented one tab stop further.
    Nest(Box<Layout>),
    /// Break-points directly inside are filled greedily.
    Pack(Box<Layout>),
    /// A break-point between `left` and `right`.
    LineBreak(Box<Layout>, Box<Layout>),
    /// `left` followed by `right`.
    Composition {
        left: Box<Layout>,
        right: Box<Layout>,
        /// Separate the two sides with a space when they share a line.
        pad: bool,
        /// Lower the whole composition as a fixed region.
        fix: bool,
    },
}

impl Layout {
    /// Check if this is the empty layout.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Layout::Null)
    }

    /// Check if this node is an infix node when printed.
    #[inline]
    pub fn is_binary(&self) -> bool {
        matches!(self, Layout::LineBreak(..) | Layout::Composition { .. })
    }
}

/// Move `child` onto `pending` unless it is a leaf, leaving `Null` behind.
fn detach(child: &mut Layout, pending: &mut Vec<Layout>) {
    if !matches!(child, Layout::Null | Layout::Text(_)) {
        pending.push(std::mem::take(child));
    }
}

impl Layout {
    fn detach_children(&mut self, pending: &mut Vec<Layout>) {
        match self {
            Layout::Null | Layout::Text(_) => {}
            Layout::Fix(inner)
            | Layout::Group(inner)
            | Layout::Sequence(inner)
            | Layout::Nest(inner)
            | Layout::Pack(inner) => detach(inner, pending),
            Layout::LineBreak(left, right) | Layout::Composition { left, right, .. } => {
                detach(left, pending);
                detach(right, pending);
            }
        }
    }
}

/// Drops without recursion, at any depth.
impl Drop for Layout {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl From<&str> for Layout {
    fn from(data: &str) -> Self {
        text(data)
    }
}

impl From<String> for Layout {
    fn from(data: String) -> Self {
        text(data)
    }
}

/// The empty layout.
#[inline]
pub fn null() -> Layout {
    Layout::Null
}

/// An atomic text token.
#[inline]
pub fn text(data: impl Into<String>) -> Layout {
    Layout::Text(data.into())
}

/// Force `layout` onto a single line.
#[inline]
pub fn fix(layout: Layout) -> Layout {
    Layout::Fix(Box::new(layout))
}

/// Break all of `layout`'s break-points together, or none of them.
#[inline]
pub fn group(layout: Layout) -> Layout {
    Layout::Group(Box::new(layout))
}

/// Keep `layout`'s break-points flat until the first one that must break.
#[inline]
pub fn sequence(layout: Layout) -> Layout {
    Layout::Sequence(Box::new(layout))
}

/// Indent lines broken inside `layout` by one tab stop.
#[inline]
pub fn nest(layout: Layout) -> Layout {
    Layout::Nest(Box::new(layout))
}

/// Fill `layout`'s break-points greedily.
#[inline]
pub fn pack(layout: Layout) -> Layout {
    Layout::Pack(Box::new(layout))
}

/// A break-point between `left` and `right`.
#[inline]
pub fn line_break(left: Layout, right: Layout) -> Layout {
    Layout::LineBreak(Box::new(left), Box::new(right))
}

/// Concatenate `left` and `right`.
///
/// `pad` puts a space between the sides when they end up on the same line.
/// `fix` renders the whole composition as a fixed region, as if it were
/// wrapped in [`fix`].
#[inline]
pub fn composition(left: Layout, right: Layout, pad: bool, fix: bool) -> Layout {
    Layout::Composition {
        left: Box::new(left),
        right: Box::new(right),
        pad,
        fix,
    }
}

#[cfg(test)]
mod tests;
