use crate::tui::components::grid::DEFAULT_CARD_WIDTH;

/// Presentation knobs for the interactive picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	/// Label rendered ahead of the search input; hidden when empty.
	pub prompt: String,
	pub card_width: u16,
	/// Whether the log pane starts open.
	pub show_log_pane: bool,
	/// Height of the log pane as a percentage of the screen.
	pub log_pane_percent: u16,
}

impl UiConfig {
	#[must_use]
	pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
		self.prompt = prompt.into();
		self
	}

	#[must_use]
	pub fn with_card_width(mut self, width: u16) -> Self {
		self.card_width = width;
		self
	}

	#[must_use]
	pub fn prompt(&self) -> Option<&str> {
		let prompt = self.prompt.trim();
		(!prompt.is_empty()).then_some(prompt)
	}
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			prompt: "Search".to_string(),
			card_width: DEFAULT_CARD_WIDTH,
			show_log_pane: false,
			log_pane_percent: 35,
		}
	}
}
