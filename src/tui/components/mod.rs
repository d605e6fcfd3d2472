//! Widgets composed by the application renderer.

pub mod grid;
pub mod tabs;

pub use grid::{CardGrid, GridContext};
pub use tabs::{InputContext, TabItem, render_input_with_tabs};
