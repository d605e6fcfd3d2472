use crate::catalog::CatalogId;
use crate::tui::input::SearchInput;
use crate::tui::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Tabs};
use unicode_width::UnicodeWidthStr;

/// Render metadata for a tab header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabItem<'a> {
	pub catalog: CatalogId,
	pub label: &'a str,
}

/// Argument bundle for rendering the input area.
pub struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub prompt: Option<&'a str>,
	pub active: CatalogId,
	pub tabs: &'a [TabItem<'a>],
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the input row with tabs at the right.
///
/// Returns the screen region of every tab so clicks can be routed back.
pub fn render_input_with_tabs(
	frame: &mut ratatui::Frame,
	input: InputContext<'_>,
) -> Vec<(CatalogId, Rect)> {
	let InputContext {
		search_input,
		prompt,
		active,
		tabs,
		area,
		theme,
	} = input;

	let prompt = prompt.unwrap_or("");
	let tabs_width = calculate_tabs_width(tabs);
	let prompt_width = calculate_prompt_width(prompt);

	let constraints = layout_constraints(!prompt.is_empty(), prompt_width, tabs_width);

	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(constraints)
		.split(area);

	if !prompt.is_empty() {
		let prompt_widget = Paragraph::new(format!("{prompt} > ")).style(theme.prompt_style());
		frame.render_widget(prompt_widget, horizontal[0]);
	}

	let input_index = if prompt.is_empty() { 0 } else { 1 };
	search_input.render_textarea(frame, horizontal[input_index]);

	let tabs_area = horizontal[horizontal.len() - 1];
	let tabs_inner = Rect {
		x: tabs_area.x.saturating_add(1),
		width: tabs_area.width.saturating_sub(1),
		..tabs_area
	};
	let selected = selected_tab_index(active, tabs);

	let widget = Tabs::new(build_tab_titles(theme, selected, tabs))
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(widget, tabs_inner);

	tab_regions(tabs, tabs_inner)
}

fn calculate_prompt_width(prompt: &str) -> u16 {
	if prompt.is_empty() {
		0
	} else {
		prompt.width() as u16 + 3
	}
}

fn layout_constraints(has_prompt: bool, prompt_width: u16, tabs_width: u16) -> Vec<Constraint> {
	if has_prompt {
		vec![
			Constraint::Length(prompt_width),
			Constraint::Min(1),
			Constraint::Length(tabs_width),
		]
	} else {
		vec![Constraint::Min(1), Constraint::Length(tabs_width)]
	}
}

fn selected_tab_index(active: CatalogId, tabs: &[TabItem<'_>]) -> usize {
	tabs.iter().position(|tab| tab.catalog == active).unwrap_or(0)
}

fn build_tab_titles(theme: &Theme, selected: usize, tabs: &[TabItem<'_>]) -> Vec<Line<'static>> {
	let active = theme.header_style();
	let inactive = theme.tab_inactive_style();
	tabs.iter()
		.enumerate()
		.map(|(index, tab)| {
			let style = if index == selected { active } else { inactive };
			Line::from(format!(" {} ", tab.label)).style(style)
		})
		.collect()
}

/// Each title occupies its label, one space either side, and the trailing pad.
fn tab_width(tab: &TabItem<'_>) -> u16 {
	(tab.label.width() as u16).saturating_add(3)
}

fn calculate_tabs_width(tabs: &[TabItem<'_>]) -> u16 {
	let width = tabs
		.iter()
		.fold(0u16, |width, tab| width.saturating_add(tab_width(tab)));
	width.saturating_add(1).max(12)
}

fn tab_regions(tabs: &[TabItem<'_>], area: Rect) -> Vec<(CatalogId, Rect)> {
	let mut regions = Vec::with_capacity(tabs.len());
	let mut x = area.x;
	for tab in tabs {
		if x >= area.right() {
			break;
		}
		let width = tab_width(tab).min(area.right() - x);
		regions.push((
			tab.catalog,
			Rect {
				x,
				width,
				..area
			},
		));
		x = x.saturating_add(width);
	}
	regions
}
