use serde::Serialize;

/// What the picker leaves behind once the user exits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlyphOutcome {
	/// Query text at exit.
	pub query: String,
	/// Id of the catalog that was active at exit.
	pub catalog: String,
	/// Every glyph copied during the session, oldest first.
	pub copied: Vec<String>,
}

impl GlyphOutcome {
	#[must_use]
	pub fn last_copied(&self) -> Option<&str> {
		self.copied.last().map(String::as_str)
	}
}
