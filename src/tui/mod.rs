//! Terminal UI building blocks for rendering `glyphpick`.
//!
//! The submodules here expose reusable widgets, the search input, and the
//! built-in themes used by the higher level UI orchestration code.

pub mod components;
pub mod input;
pub mod theme;
