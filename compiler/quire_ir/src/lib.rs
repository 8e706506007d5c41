//! Quire IR - Layout Trees
//!
//! The caller-facing half of the quire layout engine. Callers describe their
//! output as a [`Layout`]: literal text glued together with compositions and
//! break-points, wrapped in scopes that decide how those break-points behave.
//!
//! Building a layout never fails and never looks at the text it is given;
//! validation happens once, when the layout is lowered for rendering.
//!
//! # Combinators
//!
//! | constructor | meaning |
//! |---|---|
//! | [`null`] | contributes nothing |
//! | [`text`] | an atomic token |
//! | [`fix`] | everything inside renders on one line |
//! | [`group`] | all break-points break together, or none do |
//! | [`sequence`] | once a break-point breaks, the rest of the sequence does too |
//! | [`nest`] | lines broken inside start one tab stop further in |
//! | [`pack`] | break-points are filled greedily, one at a time |
//! | [`line_break`] | a break-point between two layouts |
//! | [`composition`] | concatenation, optionally padded and/or fixed |
//!
//! Layouts print in the syntax accepted by `quire_dsl`, see [`Layout`]'s
//! `Display` impl.

mod layout;

pub use layout::{
    composition, fix, group, line_break, nest, null, pack, sequence, text, write_quoted, Layout,
};
