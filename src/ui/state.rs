use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use ratatui::layout::Rect;

use super::config::UiConfig;
use super::log_pane::LogPane;
use super::outcome::GlyphOutcome;
use super::presenter::{Presenter, Reconcile};
use super::selection::SelectionState;
use crate::catalog::{CatalogId, CatalogSet};
use crate::clipboard::CopyAction;
use crate::tui::components::CardGrid;
use crate::tui::input::SearchInput;
use crate::tui::theme::Theme;

/// Which widget receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Search,
	Grid,
}

pub struct App<'a> {
	pub(crate) selection: SelectionState,
	presenter: Presenter,
	pub(crate) grid: CardGrid,
	pub search_input: SearchInput<'a>,
	pub(crate) focus: Focus,
	pub(crate) copy: CopyAction,
	pub theme: Theme,
	pub(crate) ui: UiConfig,
	pub(crate) log_pane: LogPane,
	pub(crate) tab_regions: Vec<(CatalogId, Rect)>,
}

impl<'a> App<'a> {
	/// Start on the first catalog with an empty query.
	pub fn new(catalogs: Arc<CatalogSet>, copy: CopyAction) -> Self {
		let first = catalogs.first();
		let selection = SelectionState::new(catalogs, first);
		let ui = UiConfig::default();
		let mut app = Self {
			selection,
			presenter: Presenter::new(),
			grid: CardGrid::new(ui.card_width),
			search_input: SearchInput::new(""),
			focus: Focus::Search,
			copy,
			theme: Theme::default(),
			log_pane: LogPane::new(ui.show_log_pane),
			ui,
			tab_regions: Vec::new(),
		};
		app.sync_placeholder();
		app.refresh();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_ui_config(&mut self, ui: UiConfig) {
		self.grid = CardGrid::new(ui.card_width);
		self.log_pane = LogPane::new(ui.show_log_pane);
		self.ui = ui;
		self.presenter.invalidate();
		self.refresh();
	}

	/// Activate `catalog`, clearing the query. Re-activating the current
	/// catalog changes nothing.
	pub fn activate_catalog(&mut self, catalog: CatalogId) {
		if self.selection.set_catalog(catalog) {
			self.after_catalog_switch();
		}
	}

	pub(crate) fn next_catalog(&mut self) {
		if self.selection.next_catalog() {
			self.after_catalog_switch();
		}
	}

	pub(crate) fn previous_catalog(&mut self) {
		if self.selection.previous_catalog() {
			self.after_catalog_switch();
		}
	}

	/// Replace the query text, as if the user had typed it.
	pub fn set_query(&mut self, query: &str) {
		self.search_input.set_text(query);
		self.apply_query();
	}

	pub(crate) fn apply_query(&mut self) {
		let text = self.search_input.text().to_string();
		if self.selection.query() == text {
			return;
		}
		let changed = self.selection.set_query(&text);
		debug!("query {text:?} matches {} entries", self.selection.view().len());
		self.refresh();
		if changed {
			self.grid.reset_cursor();
		}
	}

	pub(crate) fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.search_input.set_focused(focus == Focus::Search);
	}

	/// Copy the glyph under the cursor, if there is one.
	pub(crate) fn copy_cursor(&mut self) {
		let Some(card) = self.grid.cursor_card() else {
			return;
		};
		let glyph = card.glyph.clone();
		let key = card.key;
		self.copy.copy(&glyph, Some(key), Instant::now());
	}

	pub fn outcome(&self) -> GlyphOutcome {
		GlyphOutcome {
			query: self.selection.query().to_string(),
			catalog: self.selection.active().id().to_string(),
			copied: self.copy.copied().to_vec(),
		}
	}

	pub fn selection(&self) -> &SelectionState {
		&self.selection
	}

	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Number of cards currently shown.
	pub fn visible_len(&self) -> usize {
		self.grid.visible_len()
	}

	pub(crate) fn refresh(&mut self) -> Reconcile {
		self.presenter.present(&self.selection, &mut self.grid)
	}

	fn after_catalog_switch(&mut self) {
		info!("switched to catalog {}", self.selection.active().id());
		self.search_input.clear();
		self.sync_placeholder();
		self.refresh();
	}

	fn sync_placeholder(&mut self) {
		let placeholder = self.selection.active().placeholder().to_string();
		self.search_input.set_placeholder(placeholder);
	}
}

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.copy.shutdown();
	}
}
