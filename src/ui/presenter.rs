//! Projection of the filtered view onto a results surface.
//!
//! The presenter owns no widgets. It drives any [`ResultsSurface`]: the
//! terminal card grid in production, a recording surface in tests.

use crate::catalog::{CatalogId, Entry, ItemNoun};

use super::selection::SelectionState;

/// Stable identity of a card: the catalog and the entry index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardKey {
	pub catalog: CatalogId,
	pub entry: usize,
}

/// Render model for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
	pub key: CardKey,
	pub glyph: String,
	pub primary: String,
	/// Remaining names joined with `", "`; absent when the entry has no aliases.
	pub aliases: Option<String>,
	/// Every name, used as the tooltip/title line.
	pub title: String,
}

impl Card {
	#[must_use]
	pub fn from_entry(catalog: CatalogId, index: usize, entry: &Entry) -> Self {
		let aliases = entry.aliases();
		Self {
			key: CardKey {
				catalog,
				entry: index,
			},
			glyph: entry.glyph().to_string(),
			primary: entry.primary_name().unwrap_or_default().to_string(),
			aliases: (!aliases.is_empty()).then(|| aliases.join(", ")),
			title: entry.names().join(", "),
		}
	}
}

/// Display capability the presenter renders into.
///
/// Cards are addressed by their position in the last `rebuild` call. Newly
/// rebuilt cards start out visible.
pub trait ResultsSurface {
	fn rebuild(&mut self, cards: Vec<Card>);
	fn set_hidden(&mut self, position: usize, hidden: bool);
	fn show_empty(&mut self, message: &str);
	fn clear_empty(&mut self);
	fn set_count(&mut self, text: &str);
}

/// Which reconciliation path the last [`Presenter::present`] call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
	Rebuild,
	Incremental,
}

/// Keeps a surface in sync with a [`SelectionState`].
#[derive(Debug, Default)]
pub struct Presenter {
	rendered: Option<CatalogId>,
	hidden: Vec<bool>,
}

impl Presenter {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Forget what was rendered so the next present rebuilds.
	pub fn invalidate(&mut self) {
		self.rendered = None;
		self.hidden.clear();
	}

	pub fn present(
		&mut self,
		state: &SelectionState,
		surface: &mut dyn ResultsSurface,
	) -> Reconcile {
		let catalog = state.active();
		let mut hidden = vec![true; catalog.len()];
		for &index in state.view() {
			hidden[index] = false;
		}

		let reconcile = if self.rendered == Some(state.active_id()) && self.hidden.len() == hidden.len()
		{
			for (position, (&was, &now)) in self.hidden.iter().zip(&hidden).enumerate() {
				if was != now {
					surface.set_hidden(position, now);
				}
			}
			Reconcile::Incremental
		} else {
			let cards = catalog
				.entries()
				.iter()
				.enumerate()
				.map(|(index, entry)| Card::from_entry(state.active_id(), index, entry))
				.collect();
			surface.rebuild(cards);
			for (position, _) in hidden.iter().enumerate().filter(|(_, hide)| **hide) {
				surface.set_hidden(position, true);
			}
			self.rendered = Some(state.active_id());
			Reconcile::Rebuild
		};
		self.hidden = hidden;

		let noun = catalog.noun();
		let count = state.view().len();
		if count == 0 {
			surface.show_empty(&no_results_message(noun));
		} else {
			surface.clear_empty();
		}
		surface.set_count(&count_summary(count, state.query(), noun));

		reconcile
	}
}

/// Human-readable result count; empty when there are no results.
#[must_use]
pub fn count_summary(count: usize, query: &str, noun: &ItemNoun) -> String {
	if count == 0 {
		String::new()
	} else if query.trim().is_empty() {
		format!("{count} {} available", noun.plural)
	} else {
		format!("Found {count} {}", noun.for_count(count))
	}
}

#[must_use]
pub fn no_results_message(noun: &ItemNoun) -> String {
	format!("No {} found. Try a different search term.", noun.plural)
}
