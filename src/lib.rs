//! Core crate exports for `glyphpick`, a terminal picker that searches
//! Unicode symbols and emoji by name and copies the chosen glyph.
//!
//! The root module re-exports the catalog, search and UI types so that
//! embedders can configure and run the picker without digging through the
//! module hierarchy.

pub mod app_dirs;
pub mod catalog;
pub mod clipboard;
pub mod logging;
pub mod search;
pub mod tui;
pub mod ui;

pub use catalog::{Catalog, CatalogError, CatalogId, CatalogSet, Entry, ItemNoun};
pub use clipboard::{Clipboard, CopyAction, CopyError, FallbackCopy};
pub use tui::input::SearchInput;
pub use tui::theme::{Theme, default_theme};
pub use ui::{GlyphOutcome, GlyphUi, UiConfig, run};
