use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Single-line query input backed by a [`TextArea`].
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	placeholder: String,
	focused: bool,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
			placeholder: String::new(),
			focused: true,
		};
		input.set_text(initial);
		input
	}

	/// Current query text.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the text and park the cursor at its end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text: String = text.into();
		let line = text.lines().next().unwrap_or("").to_string();
		self.textarea = TextArea::new(vec![line]);
		self.textarea.move_cursor(CursorMove::End);
		self.apply_style();
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	/// Select the whole query so the next keystroke replaces it.
	pub fn select_all(&mut self) {
		self.textarea.select_all();
	}

	pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
		self.placeholder = placeholder.into();
		self.apply_style();
	}

	#[must_use]
	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}

	pub fn set_focused(&mut self, focused: bool) {
		if self.focused != focused {
			self.focused = focused;
			if !focused {
				self.textarea.cancel_selection();
			}
			self.apply_style();
		}
	}

	#[must_use]
	pub fn is_focused(&self) -> bool {
		self.focused
	}

	/// Feed a key to the editor. Returns whether the text changed.
	///
	/// Keys that would open a second line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if newline {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		before != self.text()
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}

	fn apply_style(&mut self) {
		self.textarea.set_cursor_line_style(Style::default());
		self.textarea
			.set_placeholder_text(self.placeholder.clone());
		self.textarea
			.set_placeholder_style(Style::default().add_modifier(Modifier::DIM));
		let cursor = if self.focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
	}
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}
