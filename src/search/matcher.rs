use crate::catalog::Entry;

/// A normalized query: lower-cased, trimmed and split on whitespace.
///
/// Every token must occur in at least one of an entry's names for the entry
/// to match. Token order does not matter, so `"arrow left"` matches an entry
/// named `"left arrow"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
	tokens: Vec<String>,
}

impl Query {
	#[must_use]
	pub fn parse(raw: &str) -> Self {
		let tokens = raw
			.trim()
			.to_lowercase()
			.split_whitespace()
			.map(str::to_string)
			.collect();
		Self { tokens }
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	#[must_use]
	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// Whether `entry` satisfies every token. The empty query matches everything.
	#[must_use]
	pub fn matches(&self, entry: &Entry) -> bool {
		self.tokens.iter().all(|token| {
			entry
				.search_keys()
				.iter()
				.any(|key| key.contains(token.as_str()))
		})
	}
}

/// Indices of the entries matching `raw`, in catalog order.
#[must_use]
pub fn filter(entries: &[Entry], raw: &str) -> Vec<usize> {
	let query = Query::parse(raw);
	if query.is_empty() {
		return (0..entries.len()).collect();
	}
	entries
		.iter()
		.enumerate()
		.filter(|(_, entry)| query.matches(entry))
		.map(|(index, _)| index)
		.collect()
}

/// Character positions of `name` covered by any occurrence of a query token.
#[must_use]
pub fn highlight_indices(name: &str, query: &Query) -> Vec<usize> {
	if query.is_empty() {
		return Vec::new();
	}

	// Folded like the search keys (word-final sigma included). Lower-casing
	// can change byte lengths, so track which source char owns each byte.
	let folded = name.to_lowercase();
	let mut owners = Vec::with_capacity(folded.len());
	let mut char_count = 0;
	for (position, ch) in name.chars().enumerate() {
		let width: usize = ch.to_lowercase().map(char::len_utf8).sum();
		owners.resize(owners.len() + width, position);
		char_count = position + 1;
	}

	let mut covered = vec![false; char_count];
	for token in query.tokens() {
		for (start, found) in folded.match_indices(token.as_str()) {
			let Some(span) = owners.get(start..start + found.len()) else {
				continue;
			};
			for owner in span {
				covered[*owner] = true;
			}
		}
	}

	covered
		.iter()
		.enumerate()
		.filter_map(|(position, hit)| hit.then_some(position))
		.collect()
}
