//! Card grid: the terminal results surface.
//!
//! Cards are stored in catalog order and addressed by position, exactly as the
//! presenter rebuilds them. The cursor and scroll offset are kept in terms of
//! visible cards so hiding a card never strands the cursor on it.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_truncate::UnicodeTruncateStr;

use crate::clipboard::Feedback;
use crate::search::{Query, highlight_indices};
use crate::tui::theme::Theme;
use crate::ui::{Card, ResultsSurface};

pub const DEFAULT_CARD_WIDTH: u16 = 24;
pub const CARD_HEIGHT: u16 = 5;
const MIN_CARD_WIDTH: u16 = 8;

/// Per-frame inputs for [`CardGrid::render`].
pub struct GridContext<'a> {
	pub area: Rect,
	pub theme: &'a Theme,
	pub query: &'a Query,
	pub feedback: &'a Feedback,
	pub now: Instant,
	pub focused: bool,
}

#[derive(Debug)]
pub struct CardGrid {
	cards: Vec<Card>,
	hidden: Vec<bool>,
	empty: Option<String>,
	count: String,
	card_width: u16,
	columns: usize,
	cursor: usize,
	scroll_row: usize,
	/// Card rows that fit on screen at the last render.
	page_rows: usize,
	hits: Vec<(Rect, usize)>,
}

impl Default for CardGrid {
	fn default() -> Self {
		Self::new(DEFAULT_CARD_WIDTH)
	}
}

impl CardGrid {
	#[must_use]
	pub fn new(card_width: u16) -> Self {
		Self {
			cards: Vec::new(),
			hidden: Vec::new(),
			empty: None,
			count: String::new(),
			card_width: card_width.max(MIN_CARD_WIDTH),
			columns: 1,
			cursor: 0,
			scroll_row: 0,
			page_rows: 1,
			hits: Vec::new(),
		}
	}

	/// Positions of the cards currently shown, in catalog order.
	#[must_use]
	pub fn visible(&self) -> Vec<usize> {
		self.hidden
			.iter()
			.enumerate()
			.filter(|(_, hidden)| !**hidden)
			.map(|(position, _)| position)
			.collect()
	}

	#[must_use]
	pub fn visible_len(&self) -> usize {
		self.hidden.iter().filter(|hidden| !**hidden).count()
	}

	#[must_use]
	pub fn visible_cards(&self) -> Vec<&Card> {
		self.visible()
			.into_iter()
			.map(|position| &self.cards[position])
			.collect()
	}

	#[must_use]
	pub fn cards(&self) -> &[Card] {
		&self.cards
	}

	#[must_use]
	pub fn count_text(&self) -> &str {
		&self.count
	}

	#[must_use]
	pub fn empty_message(&self) -> Option<&str> {
		self.empty.as_deref()
	}

	/// Index of the cursor among visible cards.
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	#[must_use]
	pub fn cursor_card(&self) -> Option<&Card> {
		let position = *self.visible().get(self.cursor)?;
		self.cards.get(position)
	}

	#[must_use]
	pub fn columns(&self) -> usize {
		self.columns
	}

	pub fn reset_cursor(&mut self) {
		self.cursor = 0;
		self.scroll_row = 0;
	}

	/// Move the cursor onto the visible card at `position` in the card list.
	pub fn select_position(&mut self, position: usize) {
		if let Some(index) = self.visible().iter().position(|&p| p == position) {
			self.cursor = index;
		}
	}

	pub fn move_left(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn move_right(&mut self) {
		if self.cursor + 1 < self.visible_len() {
			self.cursor += 1;
		}
	}

	/// Returns false when the cursor is already on the first row.
	pub fn move_up(&mut self) -> bool {
		if self.cursor < self.columns {
			return false;
		}
		self.cursor -= self.columns;
		true
	}

	pub fn move_down(&mut self) {
		let len = self.visible_len();
		if self.cursor + self.columns < len {
			self.cursor += self.columns;
		} else if len > 0 && self.cursor / self.columns < (len - 1) / self.columns {
			self.cursor = len - 1;
		}
	}

	/// Move up one screen of rows, stopping at the first row.
	pub fn move_page_up(&mut self) {
		let step = self.page_rows.max(1) * self.columns;
		if self.cursor >= step {
			self.cursor -= step;
		} else {
			self.cursor %= self.columns;
		}
	}

	/// Move down one screen of rows, stopping at the last card.
	pub fn move_page_down(&mut self) {
		let len = self.visible_len();
		if len == 0 {
			return;
		}
		let step = self.page_rows.max(1) * self.columns;
		self.cursor = (self.cursor + step).min(len - 1);
	}

	pub fn move_first(&mut self) {
		self.cursor = 0;
	}

	pub fn move_last(&mut self) {
		self.cursor = self.visible_len().saturating_sub(1);
	}

	/// Card under the screen cell `(column, row)` as of the last render.
	#[must_use]
	pub fn card_at(&self, column: u16, row: u16) -> Option<&Card> {
		self.hits
			.iter()
			.find(|(rect, _)| {
				column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
			})
			.and_then(|(_, position)| self.cards.get(*position))
	}

	fn clamp_cursor(&mut self) {
		let len = self.visible_len();
		if self.cursor >= len {
			self.cursor = len.saturating_sub(1);
		}
	}

	pub fn render(&mut self, frame: &mut Frame, context: GridContext<'_>) {
		let GridContext {
			area,
			theme,
			query,
			feedback,
			now,
			focused,
		} = context;
		self.hits.clear();
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}

		if let Some(message) = &self.empty {
			let empty = Paragraph::new(message.as_str())
				.alignment(Alignment::Center)
				.style(theme.empty_style());
			let y = area.y + area.height / 3;
			frame.render_widget(empty, Rect { y, height: 1, ..area });
			return;
		}

		self.columns = usize::from((area.width / self.card_width).max(1));
		let card_width = if area.width < self.card_width {
			area.width
		} else {
			self.card_width
		};
		let rows = usize::from((area.height / CARD_HEIGHT).max(1));
		self.page_rows = rows;
		self.clamp_cursor();
		let cursor_row = self.cursor / self.columns;
		if cursor_row < self.scroll_row {
			self.scroll_row = cursor_row;
		} else if cursor_row >= self.scroll_row + rows {
			self.scroll_row = cursor_row + 1 - rows;
		}

		let visible = self.visible();
		let first = self.scroll_row * self.columns;
		for (offset, &position) in visible.iter().enumerate().skip(first).take(rows * self.columns) {
			let slot = offset - first;
			let x = area.x + (slot % self.columns) as u16 * card_width;
			let y = area.y + (slot / self.columns) as u16 * CARD_HEIGHT;
			let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
			let rect = Rect::new(x, y, card_width, height);

			let card = &self.cards[position];
			let border = if feedback.is_flashing(card.key, now) {
				theme.flash_style()
			} else if focused && offset == self.cursor {
				theme.row_highlight_style()
			} else {
				theme.card_border_style()
			};
			render_card(frame, rect, card, border, theme, query);
			self.hits.push((rect, position));
		}
	}
}

fn render_card(
	frame: &mut Frame,
	area: Rect,
	card: &Card,
	border: Style,
	theme: &Theme,
	query: &Query,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(border);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let width = usize::from(inner.width);
	let mut lines = vec![
		Line::from(card.glyph.as_str()),
		highlighted_name(&card.primary, query, width, theme),
	];
	if let Some(aliases) = &card.aliases {
		let (fitted, _) = aliases.unicode_truncate(width);
		lines.push(Line::styled(fitted.to_string(), theme.empty_style()));
	}
	frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Primary name fitted to `width` with query matches emphasised.
fn highlighted_name(name: &str, query: &Query, width: usize, theme: &Theme) -> Line<'static> {
	let (fitted, _) = name.unicode_truncate(width);
	let marks = highlight_indices(name, query);
	if marks.is_empty() {
		return Line::from(fitted.to_string());
	}

	let mut spans: Vec<Span<'static>> = Vec::new();
	let mut run = String::new();
	let mut run_marked = false;
	for (index, ch) in fitted.chars().enumerate() {
		let marked = marks.binary_search(&index).is_ok();
		if marked != run_marked && !run.is_empty() {
			spans.push(styled_run(std::mem::take(&mut run), run_marked, theme));
		}
		run_marked = marked;
		run.push(ch);
	}
	if !run.is_empty() {
		spans.push(styled_run(run, run_marked, theme));
	}
	Line::from(spans)
}

fn styled_run(text: String, marked: bool, theme: &Theme) -> Span<'static> {
	if marked {
		Span::styled(text, theme.highlight_style())
	} else {
		Span::raw(text)
	}
}

impl ResultsSurface for CardGrid {
	fn rebuild(&mut self, cards: Vec<Card>) {
		self.hidden = vec![false; cards.len()];
		self.cards = cards;
		self.hits.clear();
		self.reset_cursor();
	}

	fn set_hidden(&mut self, position: usize, hidden: bool) {
		if let Some(slot) = self.hidden.get_mut(position) {
			*slot = hidden;
		}
	}

	fn show_empty(&mut self, message: &str) {
		self.empty = Some(message.to_string());
	}

	fn clear_empty(&mut self) {
		self.empty = None;
	}

	fn set_count(&mut self, text: &str) {
		self.count = text.to_string();
	}
}
