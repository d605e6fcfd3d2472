use std::sync::Arc;

use anyhow::Result;
use log::warn;

use super::App;
use super::config::UiConfig;
use super::outcome::GlyphOutcome;
use crate::catalog::CatalogSet;
use crate::clipboard::CopyAction;
use crate::tui::theme::{self, Theme};

/// A small builder for configuring the interactive picker before running it.
pub struct GlyphUi {
	catalogs: CatalogSet,
	initial_query: Option<String>,
	start_catalog: Option<String>,
	ui_config: Option<UiConfig>,
	theme: Option<Theme>,
	copy: Option<CopyAction>,
}

impl GlyphUi {
	pub fn new(catalogs: CatalogSet) -> Self {
		Self {
			catalogs,
			initial_query: None,
			start_catalog: None,
			ui_config: None,
			theme: None,
			copy: None,
		}
	}

	/// Picker over the built-in symbol and emoji catalogs.
	pub fn builtin() -> Self {
		Self::new(CatalogSet::builtin())
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	/// Start on the catalog with this id instead of the first one.
	pub fn with_start_catalog(mut self, id: impl Into<String>) -> Self {
		self.start_catalog = Some(id.into());
		self
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = Some(config);
		self
	}

	pub fn with_theme_name(mut self, name: &str) -> Self {
		match theme::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => warn!("unknown theme {name:?}; keeping the default"),
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Replace the clipboard wiring, native tools with OSC 52 fallback by default.
	pub fn with_copy_action(mut self, copy: CopyAction) -> Self {
		self.copy = Some(copy);
		self
	}

	/// Build the [`App`] without entering the terminal.
	pub fn build<'a>(self) -> App<'a> {
		let copy = self.copy.unwrap_or_else(|| CopyAction::system(true));
		let start = self.start_catalog.as_deref().and_then(|id| {
			let found = self.catalogs.find(id);
			if found.is_none() {
				warn!("unknown catalog {id:?}; starting on the first one");
			}
			found
		});

		let mut app = App::new(Arc::new(self.catalogs), copy);
		if let Some(ui) = self.ui_config {
			app.set_ui_config(ui);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(catalog) = start {
			app.activate_catalog(catalog);
		}
		if let Some(query) = self.initial_query {
			app.set_query(&query);
		}
		app
	}

	/// Run the interactive picker with the configured options.
	pub fn run(self) -> Result<GlyphOutcome> {
		self.build().run()
	}
}
