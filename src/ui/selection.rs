use std::sync::Arc;

use crate::catalog::{Catalog, CatalogId, CatalogSet, Entry};
use crate::search;

/// Active catalog, raw query and the entries currently matching it.
///
/// All mutation goes through [`SelectionState::set_query`] and
/// [`SelectionState::set_catalog`]; the filtered view is always a pure
/// function of the active catalog and the query.
#[derive(Debug, Clone)]
pub struct SelectionState {
	catalogs: Arc<CatalogSet>,
	active: CatalogId,
	query: String,
	view: Vec<usize>,
}

impl SelectionState {
	/// Start on `active` with an empty query.
	#[must_use]
	pub fn new(catalogs: Arc<CatalogSet>, active: CatalogId) -> Self {
		let view = search::filter(catalogs.get(active).entries(), "");
		Self {
			catalogs,
			active,
			query: String::new(),
			view,
		}
	}

	/// Store `raw` and recompute the view. Returns whether the view changed.
	pub fn set_query(&mut self, raw: &str) -> bool {
		if self.query != raw {
			self.query = raw.to_string();
		}
		self.recompute()
	}

	/// Switch to `id`, clearing the query.
	///
	/// Re-selecting the active catalog is a no-op and keeps the query.
	/// Returns whether a switch happened.
	pub fn set_catalog(&mut self, id: CatalogId) -> bool {
		if id == self.active {
			return false;
		}
		self.active = id;
		self.query.clear();
		self.recompute();
		true
	}

	pub fn next_catalog(&mut self) -> bool {
		let next = self.catalogs.next(self.active);
		self.set_catalog(next)
	}

	pub fn previous_catalog(&mut self) -> bool {
		let previous = self.catalogs.previous(self.active);
		self.set_catalog(previous)
	}

	#[must_use]
	pub fn catalogs(&self) -> &CatalogSet {
		&self.catalogs
	}

	#[must_use]
	pub fn active_id(&self) -> CatalogId {
		self.active
	}

	#[must_use]
	pub fn active(&self) -> &Catalog {
		self.catalogs.get(self.active)
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Indices into the active catalog, in catalog order.
	#[must_use]
	pub fn view(&self) -> &[usize] {
		&self.view
	}

	pub fn visible_entries(&self) -> impl Iterator<Item = &Entry> {
		let entries = self.active().entries();
		self.view.iter().map(move |&index| &entries[index])
	}

	fn recompute(&mut self) -> bool {
		let view = search::filter(self.catalogs.get(self.active).entries(), &self.query);
		if view == self.view {
			return false;
		}
		self.view = view;
		true
	}
}
