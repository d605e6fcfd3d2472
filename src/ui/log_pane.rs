use log::LevelFilter;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

use crate::logging;
use crate::tui::theme::Theme;

/// Toggleable view over the in-memory log buffer.
pub struct LogPane {
	widget: TuiWidgetState,
	visible: bool,
}

impl LogPane {
	pub fn new(visible: bool) -> Self {
		let widget = TuiWidgetState::new().set_default_display_level(LevelFilter::Debug);
		Self { widget, visible }
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn toggle(&mut self) {
		self.visible = !self.visible;
	}

	/// Scroll keys. Only consumed while the pane is shown.
	pub fn handle_key(&self, key: KeyEvent) -> bool {
		if !self.visible {
			return false;
		}
		let event = match key.code {
			KeyCode::PageUp => TuiWidgetEvent::PrevPageKey,
			KeyCode::PageDown => TuiWidgetEvent::NextPageKey,
			_ => return false,
		};
		self.widget.transition(event);
		true
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}

		logging::pump();

		let widget = TuiLoggerWidget::default()
			.block(
				Block::default()
					.borders(Borders::TOP)
					.border_style(theme.card_border_style())
					.title(" Log (F12 to hide, PgUp/PgDn to scroll) "),
			)
			.style(theme.empty_style())
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.state(&self.widget);
		frame.render_widget(widget, area);
	}
}

impl Default for LogPane {
	fn default() -> Self {
		Self::new(false)
	}
}
