//! Stack growth for deeply nested layouts.
//!
//! Lowering, measuring and printing walk the layout tree recursively. A
//! generated document can easily be nested tens of thousands of levels deep
//! (a long left-leaning chain of compositions is the usual culprit), so every
//! recursive step goes through [`with_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh stack segment when
//! the remaining space drops below [`RED_ZONE`]. On WASM the guard is a plain
//! call.

/// Remaining stack below which a new segment is allocated (128KB).
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (2MB).
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if it is close to exhausted.
///
/// ```text
/// fn depth(layout: &Layout) -> usize {
///     with_stack(|| match layout {
///         Layout::Group(inner) => depth(inner) + 1,
///         _ => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
