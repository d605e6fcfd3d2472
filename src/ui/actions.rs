use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::time::Instant;

use super::App;
use super::outcome::GlyphOutcome;
use super::state::Focus;

impl<'a> App<'a> {
	/// Route one key press. Returns the outcome once the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<GlyphOutcome> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let alt = key.modifiers.contains(KeyModifiers::ALT);
		match key.code {
			KeyCode::Char('c') if ctrl => return Some(self.outcome()),
			KeyCode::F(12) => self.log_pane.toggle(),
			KeyCode::Tab => self.next_catalog(),
			KeyCode::BackTab => self.previous_catalog(),
			KeyCode::Char(digit @ '1'..='9') if alt => self.activate_nth(digit),
			KeyCode::PageUp | KeyCode::PageDown if self.log_pane.handle_key(key) => {}
			_ => {
				return match self.focus {
					Focus::Search => {
						self.handle_search_key(key);
						None
					}
					Focus::Grid => self.handle_grid_key(key),
				};
			}
		}
		None
	}

	fn handle_search_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => {
				self.search_input.clear();
				self.apply_query();
			}
			KeyCode::Enter => self.copy_cursor(),
			KeyCode::Down => {
				if self.grid.visible_len() > 0 {
					self.set_focus(Focus::Grid);
				}
			}
			KeyCode::Up | KeyCode::PageUp => {}
			KeyCode::PageDown => {
				if self.grid.visible_len() > 0 {
					self.set_focus(Focus::Grid);
					self.grid.move_page_down();
				}
			}
			_ => {
				if self.search_input.input(key) {
					self.apply_query();
				}
			}
		}
	}

	fn handle_grid_key(&mut self, key: KeyEvent) -> Option<GlyphOutcome> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome()),
			KeyCode::Char('/') => self.focus_search(),
			KeyCode::Enter | KeyCode::Char(' ') => self.copy_cursor(),
			KeyCode::Left => self.grid.move_left(),
			KeyCode::Right => self.grid.move_right(),
			KeyCode::Down => self.grid.move_down(),
			KeyCode::Up => {
				if !self.grid.move_up() {
					self.set_focus(Focus::Search);
				}
			}
			KeyCode::PageUp => self.grid.move_page_up(),
			KeyCode::PageDown => self.grid.move_page_down(),
			KeyCode::Home => self.grid.move_first(),
			KeyCode::End => self.grid.move_last(),
			KeyCode::Char(_) | KeyCode::Backspace
				if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
			{
				self.set_focus(Focus::Search);
				if self.search_input.input(key) {
					self.apply_query();
				}
			}
			_ => {}
		}
		None
	}

	/// Focus the input with its text selected, ready to be replaced.
	fn focus_search(&mut self) {
		self.set_focus(Focus::Search);
		self.search_input.select_all();
	}

	fn activate_nth(&mut self, digit: char) {
		let Some(position) = digit.to_digit(10).map(|n| n as usize - 1) else {
			return;
		};
		if let Some(catalog) = self.selection.catalogs().at(position) {
			self.activate_catalog(catalog);
		}
	}

	/// Route one mouse event. Clicking a card copies it; clicking a tab
	/// activates that catalog.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				let hit_tab = self.tab_regions.iter().find(|(_, rect)| {
					mouse.column >= rect.x
						&& mouse.column < rect.right()
						&& mouse.row >= rect.y
						&& mouse.row < rect.bottom()
				});
				if let Some(&(catalog, _)) = hit_tab {
					self.activate_catalog(catalog);
					return;
				}

				let Some(card) = self.grid.card_at(mouse.column, mouse.row) else {
					return;
				};
				let glyph = card.glyph.clone();
				let key = card.key;
				self.grid.select_position(key.entry);
				self.set_focus(Focus::Grid);
				self.copy.copy(&glyph, Some(key), Instant::now());
			}
			MouseEventKind::ScrollDown => self.grid.move_down(),
			MouseEventKind::ScrollUp => {
				self.grid.move_up();
			}
			_ => {}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::*;
	use crate::catalog::{Catalog, CatalogSet, Entry, ItemNoun};
	use crate::clipboard::{CopyAction, Osc52};

	fn app_with(set: CatalogSet) -> App<'static> {
		let copy = CopyAction::new(None, Some(Box::new(Osc52::new(Vec::new(), false))));
		App::new(Arc::new(set), copy)
	}

	fn app() -> App<'static> {
		app_with(CatalogSet::builtin())
	}

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
		KeyEvent::new(code, modifiers)
	}

	fn type_text(app: &mut App<'_>, text: &str) {
		for ch in text.chars() {
			assert!(app.handle_key(press(KeyCode::Char(ch))).is_none());
		}
	}

	#[test]
	fn typing_filters_the_grid() {
		let mut app = app();
		type_text(&mut app, "arrow left");
		assert_eq!(app.selection().query(), "arrow left");
		assert_eq!(app.visible_len(), 6);
		assert_eq!(app.grid.count_text(), "Found 6 symbols");
	}

	#[test]
	fn escape_in_search_clears_query() {
		let mut app = app();
		type_text(&mut app, "zzz");
		assert_eq!(app.visible_len(), 0);
		assert!(app.handle_key(press(KeyCode::Esc)).is_none());
		assert_eq!(app.selection().query(), "");
		assert_eq!(app.visible_len(), app.selection().active().len());
	}

	#[test]
	fn enter_copies_first_visible_card() {
		let mut app = app();
		type_text(&mut app, "alpha");
		app.handle_key(press(KeyCode::Enter));
		assert_eq!(app.outcome().copied, ["α"]);
	}

	#[test]
	fn grid_navigation_and_exit() {
		let mut app = app();
		type_text(&mut app, "arrow");
		app.handle_key(press(KeyCode::Down));
		assert_eq!(app.focus(), Focus::Grid);

		app.handle_key(press(KeyCode::Right));
		app.handle_key(press(KeyCode::Char(' ')));
		assert_eq!(app.outcome().copied, ["→"]);

		app.handle_key(press(KeyCode::Left));
		app.handle_key(press(KeyCode::Up));
		assert_eq!(app.focus(), Focus::Search);

		app.handle_key(press(KeyCode::Down));
		let outcome = app.handle_key(press(KeyCode::Char('q'))).unwrap();
		assert_eq!(outcome.query, "arrow");
		assert_eq!(outcome.catalog, "symbols");
		assert_eq!(outcome.copied, ["→"]);
	}

	#[test]
	fn slash_focuses_search_and_selects_text() {
		let mut app = app();
		type_text(&mut app, "arrow");
		app.handle_key(press(KeyCode::Down));
		app.handle_key(press(KeyCode::Char('/')));
		assert_eq!(app.focus(), Focus::Search);
		type_text(&mut app, "b");
		assert_eq!(app.selection().query(), "b");
	}

	#[test]
	fn typing_in_grid_returns_to_search() {
		let mut app = app();
		app.handle_key(press(KeyCode::Down));
		assert_eq!(app.focus(), Focus::Grid);
		app.handle_key(press(KeyCode::Char('p')));
		assert_eq!(app.focus(), Focus::Search);
		assert_eq!(app.selection().query(), "p");
	}

	#[test]
	fn tab_cycles_catalogs_and_clears_query() {
		let mut app = app();
		type_text(&mut app, "arrow");
		app.handle_key(press(KeyCode::Tab));
		assert_eq!(app.selection().active().id(), "emoji");
		assert_eq!(app.selection().query(), "");
		assert_eq!(app.search_input.text(), "");
		assert_eq!(app.search_input.placeholder(), app.selection().active().placeholder());

		app.handle_key(press(KeyCode::BackTab));
		assert_eq!(app.selection().active().id(), "symbols");
	}

	#[test]
	fn alt_digit_reselecting_active_catalog_keeps_query() {
		let mut app = app();
		type_text(&mut app, "arrow");
		app.handle_key(with(KeyCode::Char('1'), KeyModifiers::ALT));
		assert_eq!(app.selection().query(), "arrow");

		app.handle_key(with(KeyCode::Char('2'), KeyModifiers::ALT));
		assert_eq!(app.selection().active().id(), "emoji");
		assert_eq!(app.selection().query(), "");

		app.handle_key(with(KeyCode::Char('9'), KeyModifiers::ALT));
		assert_eq!(app.selection().active().id(), "emoji");
	}

	#[test]
	fn ctrl_c_exits_from_search() {
		let mut app = app();
		type_text(&mut app, "heart");
		let outcome = app
			.handle_key(with(KeyCode::Char('c'), KeyModifiers::CONTROL))
			.unwrap();
		assert_eq!(outcome.query, "heart");
		assert!(outcome.copied.is_empty());
	}

	#[test]
	fn f12_toggles_log_pane() {
		let mut app = app();
		assert!(!app.log_pane.is_visible());
		app.handle_key(press(KeyCode::F(12)));
		assert!(app.log_pane.is_visible());
		app.handle_key(press(KeyCode::F(12)));
		assert!(!app.log_pane.is_visible());
	}

	#[test]
	fn alpha_beta_scenario() {
		let set = CatalogSet::new(vec![Catalog::new(
			"greek",
			"Greek",
			ItemNoun::new("symbol", "symbols"),
			vec![Entry::new("α", ["alpha"]), Entry::new("β", ["beta"])],
		)])
		.unwrap();
		let mut app = app_with(set);
		assert_eq!(app.grid.count_text(), "2 symbols available");

		type_text(&mut app, "alp");
		assert_eq!(app.grid.count_text(), "Found 1 symbol");
		assert_eq!(app.grid.visible_cards()[0].glyph, "α");

		app.handle_key(press(KeyCode::Enter));
		let outcome = app.outcome();
		assert_eq!(outcome.copied, ["α"]);
		assert!(app.copy.feedback().toast(Instant::now()).is_some());
	}

	#[test]
	fn page_keys_move_the_cursor_while_the_log_pane_is_hidden() {
		let mut app = app();
		type_text(&mut app, "arrow");
		app.handle_key(press(KeyCode::Down));
		assert_eq!(app.grid.cursor(), 0);

		app.handle_key(press(KeyCode::PageDown));
		assert_eq!(app.grid.cursor(), 1);
		app.handle_key(press(KeyCode::PageUp));
		assert_eq!(app.grid.cursor(), 0);

		app.handle_key(press(KeyCode::F(12)));
		app.handle_key(press(KeyCode::PageDown));
		assert_eq!(app.grid.cursor(), 0);
	}
}
