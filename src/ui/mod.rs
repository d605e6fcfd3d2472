//! Interactive terminal UI orchestration for `glyphpick`.
//!
//! [`SelectionState`] and [`Presenter`] hold the search-and-render core and
//! know nothing about terminals. The [`builder`] module exposes the
//! public-facing [`GlyphUi`] builder; the remaining submodules implement the
//! event loop, key routing and rendering around them.

mod actions;
mod builder;
mod config;
mod log_pane;
mod outcome;
pub mod presenter;
mod render;
mod runtime;
pub mod selection;
mod state;

pub use builder::GlyphUi;
pub use config::UiConfig;
pub use outcome::GlyphOutcome;
pub use presenter::{Card, CardKey, Presenter, Reconcile, ResultsSurface};
pub use runtime::run;
pub use selection::SelectionState;
pub use state::{App, Focus};
