//! Immutable catalogs of glyphs and the names they can be searched by.
//!
//! A [`CatalogSet`] is assembled once at start-up (the built-in symbol and
//! emoji catalogs plus any catalog files named in the configuration) and is
//! shared read-only for the rest of the process. Catalogs inside a set are
//! addressed by [`CatalogId`], which can only be obtained from the set that
//! owns the catalog.

mod builtin;
mod error;
pub mod file;
pub mod offline;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use builtin::{EMOJI_ID, SYMBOLS_ID, emoji, symbols};
pub use error::CatalogError;

/// One catalog item: the literal glyph plus the names it answers to.
///
/// The first name is the primary label; the remaining names are aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "EntryRecord", into = "EntryRecord")]
pub struct Entry {
	glyph: String,
	names: Vec<String>,
	keys: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EntryRecord {
	glyph: String,
	#[serde(default)]
	names: Vec<String>,
}

impl From<EntryRecord> for Entry {
	fn from(record: EntryRecord) -> Self {
		Entry::new(record.glyph, record.names)
	}
}

impl From<Entry> for EntryRecord {
	fn from(entry: Entry) -> Self {
		EntryRecord {
			glyph: entry.glyph,
			names: entry.names,
		}
	}
}

impl Entry {
	/// Build an entry, case-folding its names once for matching.
	pub fn new<I, S>(glyph: impl Into<String>, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let names: Vec<String> = names.into_iter().map(Into::into).collect();
		let keys = names.iter().map(|name| name.to_lowercase()).collect();
		Self {
			glyph: glyph.into(),
			names,
			keys,
		}
	}

	#[must_use]
	pub fn glyph(&self) -> &str {
		&self.glyph
	}

	#[must_use]
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// The label shown under the glyph, if the entry has any names at all.
	#[must_use]
	pub fn primary_name(&self) -> Option<&str> {
		self.names.first().map(String::as_str)
	}

	#[must_use]
	pub fn aliases(&self) -> &[String] {
		self.names.get(1..).unwrap_or_default()
	}

	/// Lower-cased names, index-aligned with [`Entry::names`].
	#[must_use]
	pub fn search_keys(&self) -> &[String] {
		&self.keys
	}
}

/// Singular and plural nouns used in count summaries ("symbol"/"symbols").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemNoun {
	pub singular: String,
	pub plural: String,
}

impl ItemNoun {
	#[must_use]
	pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
		Self {
			singular: singular.into(),
			plural: plural.into(),
		}
	}

	/// Noun for `count` items: singular only when `count == 1`.
	#[must_use]
	pub fn for_count(&self, count: usize) -> &str {
		if count == 1 {
			&self.singular
		} else {
			&self.plural
		}
	}
}

/// A named, immutable, ordered collection of entries.
#[derive(Debug, Clone)]
pub struct Catalog {
	id: String,
	label: String,
	noun: ItemNoun,
	placeholder: String,
	entries: Arc<[Entry]>,
}

impl Catalog {
	pub fn new(
		id: impl Into<String>,
		label: impl Into<String>,
		noun: ItemNoun,
		entries: Vec<Entry>,
	) -> Self {
		let placeholder = format!("Search {} by name...", noun.plural);
		Self {
			id: id.into(),
			label: label.into(),
			noun,
			placeholder,
			entries: entries.into(),
		}
	}

	#[must_use]
	pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = placeholder.into();
		self
	}

	#[must_use]
	pub fn id(&self) -> &str {
		&self.id
	}

	#[must_use]
	pub fn label(&self) -> &str {
		&self.label
	}

	#[must_use]
	pub fn noun(&self) -> &ItemNoun {
		&self.noun
	}

	#[must_use]
	pub fn placeholder(&self) -> &str {
		&self.placeholder
	}

	#[must_use]
	pub fn entries(&self) -> &[Entry] {
		&self.entries
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Handle to a catalog inside the [`CatalogSet`] that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatalogId(usize);

impl CatalogId {
	/// Position of the catalog in its set, which is also its tab position.
	#[must_use]
	pub fn position(self) -> usize {
		self.0
	}
}

/// The catalogs available to the picker, in tab order.
#[derive(Debug, Clone)]
pub struct CatalogSet {
	catalogs: Vec<Catalog>,
}

impl CatalogSet {
	/// Build a set from catalogs in tab order.
	///
	/// # Errors
	///
	/// Fails when `catalogs` is empty or when two catalogs share an id.
	pub fn new(catalogs: Vec<Catalog>) -> Result<Self, CatalogError> {
		if catalogs.is_empty() {
			return Err(CatalogError::Empty);
		}
		let mut set = Self {
			catalogs: Vec::with_capacity(catalogs.len()),
		};
		for catalog in catalogs {
			set.push(catalog)?;
		}
		Ok(set)
	}

	/// The built-in symbol and emoji catalogs.
	#[must_use]
	pub fn builtin() -> Self {
		Self {
			catalogs: vec![symbols(), emoji()],
		}
	}

	/// Append a catalog, returning its id.
	///
	/// # Errors
	///
	/// Fails on an empty or duplicate id.
	pub fn push(&mut self, catalog: Catalog) -> Result<CatalogId, CatalogError> {
		if catalog.id().trim().is_empty() {
			return Err(CatalogError::EmptyId);
		}
		if self.find(catalog.id()).is_some() {
			return Err(CatalogError::DuplicateId {
				id: catalog.id().to_string(),
			});
		}
		self.catalogs.push(catalog);
		Ok(CatalogId(self.catalogs.len() - 1))
	}

	/// Look a catalog up by its string id (exact match).
	#[must_use]
	pub fn find(&self, id: &str) -> Option<CatalogId> {
		self.catalogs
			.iter()
			.position(|catalog| catalog.id() == id)
			.map(CatalogId)
	}

	/// Catalog for an id issued by this set.
	///
	/// Panics when handed an id from a different, larger set; that is a
	/// programming error rather than a runtime condition.
	#[must_use]
	pub fn get(&self, id: CatalogId) -> &Catalog {
		&self.catalogs[id.0]
	}

	/// Id of the first catalog in tab order.
	#[must_use]
	pub fn first(&self) -> CatalogId {
		CatalogId(0)
	}

	/// Id at tab position `position`, if there is one.
	#[must_use]
	pub fn at(&self, position: usize) -> Option<CatalogId> {
		(position < self.catalogs.len()).then_some(CatalogId(position))
	}

	/// The id after `id`, wrapping around.
	#[must_use]
	pub fn next(&self, id: CatalogId) -> CatalogId {
		CatalogId((id.0 + 1) % self.catalogs.len())
	}

	/// The id before `id`, wrapping around.
	#[must_use]
	pub fn previous(&self, id: CatalogId) -> CatalogId {
		let len = self.catalogs.len();
		CatalogId((id.0 + len - 1) % len)
	}

	pub fn iter(&self) -> impl Iterator<Item = (CatalogId, &Catalog)> {
		self.catalogs
			.iter()
			.enumerate()
			.map(|(index, catalog)| (CatalogId(index), catalog))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.catalogs.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.catalogs.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tiny(id: &str) -> Catalog {
		Catalog::new(
			id,
			id.to_uppercase(),
			ItemNoun::new("thing", "things"),
			vec![Entry::new("x", ["ex"])],
		)
	}

	#[test]
	fn entry_splits_primary_name_and_aliases() {
		let entry = Entry::new("←", ["Left Arrow", "backward"]);
		assert_eq!(entry.primary_name(), Some("Left Arrow"));
		assert_eq!(entry.aliases(), ["backward".to_string()]);
		assert_eq!(entry.search_keys(), ["left arrow", "backward"]);
	}

	#[test]
	fn entry_without_names_has_no_primary_or_aliases() {
		let entry = Entry::new("?", Vec::<String>::new());
		assert_eq!(entry.primary_name(), None);
		assert!(entry.aliases().is_empty());
	}

	#[test]
	fn noun_is_singular_only_for_one() {
		let noun = ItemNoun::new("emoji", "emojis");
		assert_eq!(noun.for_count(0), "emojis");
		assert_eq!(noun.for_count(1), "emoji");
		assert_eq!(noun.for_count(2), "emojis");
	}

	#[test]
	fn set_rejects_duplicate_and_empty_ids() {
		let err = CatalogSet::new(vec![tiny("a"), tiny("a")]).unwrap_err();
		assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "a"));

		let err = CatalogSet::new(vec![tiny(" ")]).unwrap_err();
		assert!(matches!(err, CatalogError::EmptyId));

		assert!(matches!(
			CatalogSet::new(Vec::new()).unwrap_err(),
			CatalogError::Empty
		));
	}

	#[test]
	fn set_cycles_through_catalogs() {
		let set = CatalogSet::new(vec![tiny("a"), tiny("b"), tiny("c")]).unwrap();
		let a = set.first();
		let c = set.find("c").unwrap();
		assert_eq!(set.next(c), a);
		assert_eq!(set.previous(a), c);
		assert_eq!(set.at(1), set.find("b"));
		assert_eq!(set.at(3), None);
	}

	#[test]
	fn builtin_set_has_symbols_then_emoji() {
		let set = CatalogSet::builtin();
		let ids: Vec<&str> = set.iter().map(|(_, catalog)| catalog.id()).collect();
		assert_eq!(ids, [SYMBOLS_ID, EMOJI_ID]);
		for (_, catalog) in set.iter() {
			assert!(!catalog.is_empty());
			assert!(
				catalog
					.entries()
					.iter()
					.all(|entry| entry.primary_name().is_some())
			);
		}
	}

	#[test]
	fn entry_serializes_without_search_keys() {
		let entry = Entry::new("α", ["alpha"]);
		let json = serde_json::to_string(&entry).unwrap();
		assert_eq!(json, r#"{"glyph":"α","names":["alpha"]}"#);
		let back: Entry = serde_json::from_str(&json).unwrap();
		assert_eq!(back, entry);
	}
}
