use std::time::Instant;

use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use super::App;
use super::state::Focus;
use crate::search::Query;
use crate::tui::components::{GridContext, InputContext, TabItem, render_input_with_tabs};

const KEY_HINT: &str = "Enter copy · Tab catalog · / search · F12 log";

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		self.draw_at(frame, Instant::now());
	}

	pub(crate) fn draw_at(&mut self, frame: &mut Frame, now: Instant) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let (main, log_area) = if self.log_pane.is_visible() {
			let split = Layout::default()
				.direction(Direction::Vertical)
				.constraints([
					Constraint::Min(3),
					Constraint::Percentage(self.ui.log_pane_percent.min(90)),
				])
				.split(area);
			(split[0], Some(split[1]))
		} else {
			(area, None)
		};

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(main);

		self.render_input_row(frame, layout[0]);

		let query = Query::parse(self.selection.query());
		let context = GridContext {
			area: layout[1],
			theme: &self.theme,
			query: &query,
			feedback: self.copy.feedback(),
			now,
			focused: self.focus == Focus::Grid,
		};
		self.grid.render(frame, context);

		self.render_status(frame, layout[2], now);

		if let Some(log_area) = log_area {
			self.log_pane.render(frame, log_area, &self.theme);
		}
	}

	fn render_input_row(&mut self, frame: &mut Frame, area: Rect) {
		let catalogs = self.selection.catalogs();
		let tabs: Vec<TabItem<'_>> = catalogs
			.iter()
			.map(|(catalog, entry)| TabItem {
				catalog,
				label: entry.label(),
			})
			.collect();
		let context = InputContext {
			search_input: &self.search_input,
			prompt: self.ui.prompt(),
			active: self.selection.active_id(),
			tabs: &tabs,
			area,
			theme: &self.theme,
		};
		self.tab_regions = render_input_with_tabs(frame, context);
	}

	/// Count summary on the left; the toast, or a key hint, on the right.
	fn render_status(&self, frame: &mut Frame, area: Rect, now: Instant) {
		let count = Paragraph::new(self.grid.count_text()).style(self.theme.empty_style());
		frame.render_widget(count, area);

		let (text, style) = match self.copy.feedback().toast(now) {
			Some(toast) => (format!(" {toast} "), self.theme.toast_style()),
			None => (KEY_HINT.to_string(), self.theme.empty_style()),
		};
		let width = (text.width() as u16).min(area.width);
		let count_width = self.grid.count_text().width() as u16;
		if width == 0 || count_width.saturating_add(2).saturating_add(width) > area.width {
			return;
		}
		let right = Rect {
			x: area.right() - width,
			width,
			..area
		};
		frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), right);
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use ratatui::{Terminal, backend::TestBackend};

	use super::*;
	use crate::catalog::CatalogSet;
	use crate::clipboard::{CopyAction, Osc52};

	fn app() -> App<'static> {
		let copy = CopyAction::new(None, Some(Box::new(Osc52::new(Vec::new(), false))));
		App::new(Arc::new(CatalogSet::builtin()), copy)
	}

	fn render(app: &mut App<'_>, now: Instant) -> String {
		let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
		terminal.draw(|frame| app.draw_at(frame, now)).unwrap();
		let buffer = terminal.backend().buffer();
		buffer
			.content
			.chunks(usize::from(buffer.area.width))
			.map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
			.collect::<Vec<_>>()
			.join("\n")
	}

	#[test]
	fn first_frame_shows_tabs_cards_and_count() {
		let mut app = app();
		let screen = render(&mut app, Instant::now());
		assert!(screen.contains("Search > "));
		assert!(screen.contains(" Symbols "));
		assert!(screen.contains(" Emoji "));
		assert!(screen.contains('←'));
		let count = format!("{} symbols available", app.selection().active().len());
		assert!(screen.contains(&count));
		assert!(screen.contains(KEY_HINT));
	}

	#[test]
	fn toast_replaces_hint_until_it_expires() {
		let mut app = app();
		app.set_query("alpha");
		let now = Instant::now();
		app.copy_cursor();

		let screen = render(&mut app, now);
		assert!(screen.contains("Copied α to clipboard"));
		assert!(screen.contains("Found 1 symbol"));

		let later = now + crate::clipboard::TOAST_DURATION + std::time::Duration::from_millis(500);
		let screen = render(&mut app, later);
		assert!(!screen.contains("Copied α"));
	}

	#[test]
	fn empty_state_message_is_rendered() {
		let mut app = app();
		app.set_query("qqqq");
		let screen = render(&mut app, Instant::now());
		assert!(screen.contains("No symbols found. Try a different search term."));
		assert!(!screen.contains("available"));
	}

	#[test]
	fn clicking_a_tab_switches_catalog() {
		let mut app = app();
		render(&mut app, Instant::now());
		let (emoji, rect) = app.tab_regions[1];
		app.handle_mouse(ratatui::crossterm::event::MouseEvent {
			kind: ratatui::crossterm::event::MouseEventKind::Down(
				ratatui::crossterm::event::MouseButton::Left,
			),
			column: rect.x + 1,
			row: rect.y,
			modifiers: ratatui::crossterm::event::KeyModifiers::NONE,
		});
		assert_eq!(app.selection().active_id(), emoji);
		assert_eq!(app.selection().active().id(), "emoji");
	}

	#[test]
	fn clicking_a_card_copies_its_glyph() {
		let mut app = app();
		render(&mut app, Instant::now());
		app.handle_mouse(ratatui::crossterm::event::MouseEvent {
			kind: ratatui::crossterm::event::MouseEventKind::Down(
				ratatui::crossterm::event::MouseButton::Left,
			),
			column: 3,
			row: 2,
			modifiers: ratatui::crossterm::event::KeyModifiers::NONE,
		});
		assert_eq!(app.outcome().copied, ["←"]);
		assert_eq!(app.focus(), Focus::Grid);
	}
}
