//! Catalog files: user-supplied catalogs in TOML or JSON.
//!
//! ```toml
//! id = "box"
//! label = "Box drawing"
//! singular = "piece"
//! plural = "pieces"
//!
//! [[entries]]
//! glyph = "┌"
//! names = ["down and right", "top left corner"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Catalog, CatalogError, Entry, ItemNoun};

const DEFAULT_SINGULAR: &str = "item";

/// On-disk shape of a catalog, shared by catalog files and offline snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CatalogFile {
	pub(crate) id: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) label: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) singular: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) plural: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub(crate) placeholder: Option<String>,
	#[serde(default)]
	pub(crate) entries: Vec<Entry>,
}

impl CatalogFile {
	pub(crate) fn from_catalog(catalog: &Catalog) -> Self {
		Self {
			id: catalog.id().to_string(),
			label: Some(catalog.label().to_string()),
			singular: Some(catalog.noun().singular.clone()),
			plural: Some(catalog.noun().plural.clone()),
			placeholder: Some(catalog.placeholder().to_string()),
			entries: catalog.entries().to_vec(),
		}
	}

	pub(crate) fn into_catalog(self) -> Result<Catalog, CatalogError> {
		let id = self.id.trim().to_string();
		if id.is_empty() {
			return Err(CatalogError::EmptyId);
		}
		let label = self.label.unwrap_or_else(|| id.clone());
		let singular = self
			.singular
			.unwrap_or_else(|| DEFAULT_SINGULAR.to_string());
		let plural = self.plural.unwrap_or_else(|| format!("{singular}s"));
		let catalog = Catalog::new(id, label, ItemNoun::new(singular, plural), self.entries);
		Ok(match self.placeholder {
			Some(placeholder) => catalog.with_placeholder(placeholder),
			None => catalog,
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
	Toml,
	Json,
}

impl Format {
	fn from_path(path: &Path) -> Option<Self> {
		let extension = path.extension()?.to_str()?.to_ascii_lowercase();
		match extension.as_str() {
			"toml" => Some(Self::Toml),
			"json" => Some(Self::Json),
			_ => None,
		}
	}
}

/// Read and parse the catalog file at `path`.
///
/// # Errors
///
/// Fails when the file cannot be read, has an unknown extension, does not
/// parse, or declares an empty id.
pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
	let format = Format::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat {
		path: path.to_path_buf(),
	})?;
	let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	parse(path, &contents, format)
}

fn parse(path: &Path, contents: &str, format: Format) -> Result<Catalog, CatalogError> {
	let file: CatalogFile = match format {
		Format::Toml => toml::from_str(contents).map_err(|err| CatalogError::parse(path, err))?,
		Format::Json => {
			serde_json::from_str(contents).map_err(|err| CatalogError::parse(path, err))?
		}
	};
	file.into_catalog()
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	#[test]
	fn loads_toml_catalog_with_defaults() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("box.toml");
		fs::write(
			&path,
			r#"
id = "box"

[[entries]]
glyph = "┌"
names = ["down and right", "top left corner"]

[[entries]]
glyph = "─"
names = ["horizontal"]
"#,
		)
		.unwrap();

		let catalog = load(&path).unwrap();
		assert_eq!(catalog.id(), "box");
		assert_eq!(catalog.label(), "box");
		assert_eq!(catalog.noun(), &ItemNoun::new("item", "items"));
		assert_eq!(catalog.len(), 2);
		assert_eq!(catalog.entries()[0].aliases(), ["top left corner".to_string()]);
		assert_eq!(catalog.placeholder(), "Search items by name...");
	}

	#[test]
	fn loads_json_catalog_with_nouns() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("cards.JSON");
		fs::write(
			&path,
			r#"{
				"id": "cards",
				"label": "Cards",
				"singular": "card",
				"plural": "cards",
				"placeholder": "Find a card",
				"entries": [{ "glyph": "🂡", "names": ["ace of spades"] }]
			}"#,
		)
		.unwrap();

		let catalog = load(&path).unwrap();
		assert_eq!(catalog.label(), "Cards");
		assert_eq!(catalog.noun().for_count(1), "card");
		assert_eq!(catalog.placeholder(), "Find a card");
	}

	#[test]
	fn rejects_unknown_extension_and_bad_contents() {
		let dir = tempdir().unwrap();
		let yaml = dir.path().join("catalog.yaml");
		fs::write(&yaml, "id: nope").unwrap();
		assert!(matches!(
			load(&yaml).unwrap_err(),
			CatalogError::UnsupportedFormat { .. }
		));

		let broken = dir.path().join("broken.toml");
		fs::write(&broken, "id = ").unwrap();
		let err = load(&broken).unwrap_err();
		assert!(matches!(err, CatalogError::Parse { .. }));
		assert!(err.to_string().contains("broken.toml"));

		let missing = dir.path().join("missing.json");
		assert!(matches!(load(&missing).unwrap_err(), CatalogError::Io { .. }));
	}

	#[test]
	fn blank_id_is_rejected() {
		let file = CatalogFile {
			id: "  ".into(),
			label: None,
			singular: None,
			plural: None,
			placeholder: None,
			entries: Vec::new(),
		};
		assert!(matches!(file.into_catalog().unwrap_err(), CatalogError::EmptyId));
	}
}
