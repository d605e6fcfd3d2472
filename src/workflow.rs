use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use glyphpick::catalog::{self, offline};
use glyphpick::{Catalog, CatalogSet, CopyAction, GlyphOutcome, GlyphUi, app_dirs};
use log::{debug, info, warn};

use crate::settings::ResolvedConfig;

const CATALOG_EXTENSIONS: &[&str] = &["toml", "json"];

/// Coordinates loading catalogs and running the interactive picker.
pub(crate) struct PickerWorkflow {
	picker: GlyphUi,
}

impl PickerWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let catalogs = CatalogLoader::from_config(&config).load()?;
		let picker = PickerFactory::build(config, catalogs)?;
		Ok(Self { picker })
	}

	pub(crate) fn run(self) -> Result<GlyphOutcome> {
		self.picker.run()
	}
}

/// Gathers the built-in, configured and discovered catalogs into one set.
pub(crate) struct CatalogLoader {
	include_builtin: bool,
	files: Vec<PathBuf>,
	cache_dir: Option<PathBuf>,
}

impl CatalogLoader {
	pub(crate) fn from_config(config: &ResolvedConfig) -> Self {
		let mut files = config.catalog_files.clone();
		if config.discover_catalogs {
			files.extend(discovered_files());
		}
		let cache_dir = if config.offline_cache {
			app_dirs::get_cache_dir()
				.map_err(|err| warn!("offline cache disabled: {err}"))
				.ok()
		} else {
			None
		};
		Self {
			include_builtin: config.include_builtin,
			files,
			cache_dir,
		}
	}

	/// Load every catalog, skipping files that fail and duplicate ids.
	pub(crate) fn load(self) -> Result<CatalogSet> {
		let mut catalogs: Vec<Catalog> = Vec::new();
		if self.include_builtin {
			catalogs.push(catalog::symbols());
			catalogs.push(catalog::emoji());
		}

		let mut loaded = Vec::new();
		for path in &self.files {
			match offline::load_or_snapshot(path, self.cache_dir.as_deref()) {
				Ok(catalog) => {
					if catalogs.iter().any(|known| known.id() == catalog.id()) {
						warn!(
							"skipping {}: catalog id '{}' is already registered",
							path.display(),
							catalog.id()
						);
						continue;
					}
					debug!(
						"loaded catalog '{}' ({} entries) from {}",
						catalog.id(),
						catalog.len(),
						path.display()
					);
					loaded.push((path.clone(), catalog.clone()));
					catalogs.push(catalog);
				}
				Err(err) => warn!("skipping catalog: {err}"),
			}
		}

		if catalogs.is_empty() {
			bail!("no catalogs could be loaded");
		}

		if let Some(cache_dir) = self.cache_dir
			&& !loaded.is_empty()
		{
			// Detached; snapshot failures only reach the log.
			drop(offline::register(cache_dir, loaded));
		}

		let set = CatalogSet::new(catalogs)?;
		info!("{} catalog(s) ready", set.len());
		Ok(set)
	}
}

/// Catalog files under `<data dir>/catalogs`, sorted by path.
fn discovered_files() -> Vec<PathBuf> {
	match app_dirs::get_data_dir() {
		Ok(data_dir) => catalog_files_in(&data_dir.join("catalogs")),
		Err(err) => {
			debug!("catalog discovery skipped: {err}");
			Vec::new()
		}
	}
}

fn catalog_files_in(dir: &Path) -> Vec<PathBuf> {
	let Ok(entries) = fs::read_dir(dir) else {
		return Vec::new();
	};
	let mut files: Vec<PathBuf> = entries
		.filter_map(|entry| entry.ok().map(|entry| entry.path()))
		.filter(|path| {
			path.is_file()
				&& path
					.extension()
					.and_then(|ext| ext.to_str())
					.is_some_and(|ext| CATALOG_EXTENSIONS.contains(&ext))
		})
		.collect();
	files.sort();
	files
}

/// Helper for translating resolved configuration into a configured `GlyphUi`.
struct PickerFactory {
	picker: GlyphUi,
}

impl PickerFactory {
	fn build(config: ResolvedConfig, catalogs: CatalogSet) -> Result<GlyphUi> {
		let ResolvedConfig {
			initial_query,
			start_catalog,
			theme,
			ui,
			osc52_fallback,
			..
		} = config;

		if let Some(id) = start_catalog.as_deref()
			&& catalogs.find(id).is_none()
		{
			bail!(
				"unknown catalog '{id}' (available: {})",
				catalog_ids(&catalogs).join(", ")
			);
		}

		let builder = Self::new(catalogs)
			.with_ui_config(ui)
			.with_initial_query(initial_query)
			.with_theme(theme)
			.with_start_catalog(start_catalog)
			.with_copy_action(CopyAction::system(osc52_fallback));

		Ok(builder.finish())
	}

	fn new(catalogs: CatalogSet) -> Self {
		Self {
			picker: GlyphUi::new(catalogs),
		}
	}

	fn with_ui_config(mut self, config: glyphpick::UiConfig) -> Self {
		self.picker = self.picker.with_ui_config(config);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		if !query.is_empty() {
			self.picker = self.picker.with_initial_query(query);
		}
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.picker = self.picker.with_theme_name(&theme);
		}
		self
	}

	fn with_start_catalog(mut self, id: Option<String>) -> Self {
		if let Some(id) = id {
			self.picker = self.picker.with_start_catalog(id);
		}
		self
	}

	fn with_copy_action(mut self, copy: CopyAction) -> Self {
		self.picker = self.picker.with_copy_action(copy);
		self
	}

	fn finish(self) -> GlyphUi {
		self.picker
	}
}

fn catalog_ids(catalogs: &CatalogSet) -> Vec<&str> {
	catalogs.iter().map(|(_, catalog)| catalog.id()).collect()
}

/// One line per catalog: id, label and entry count.
pub(crate) fn catalog_listing(catalogs: &CatalogSet) -> Vec<String> {
	catalogs
		.iter()
		.map(|(_, catalog)| {
			format!(
				"{}\t{}\t{} {}",
				catalog.id(),
				catalog.label(),
				catalog.len(),
				catalog.noun().for_count(catalog.len())
			)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;

	const RUNES: &str = r#"
id = "runes"
label = "Runes"
singular = "rune"
plural = "runes"

[[entries]]
glyph = "ᚠ"
names = ["fehu", "wealth"]
"#;

	fn loader(include_builtin: bool, files: Vec<PathBuf>) -> CatalogLoader {
		CatalogLoader {
			include_builtin,
			files,
			cache_dir: None,
		}
	}

	#[test]
	fn file_catalogs_follow_builtins() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("runes.toml");
		fs::write(&path, RUNES).unwrap();

		let set = loader(true, vec![path]).load().unwrap();
		let ids = catalog_ids(&set);
		assert_eq!(ids, ["symbols", "emoji", "runes"]);
	}

	#[test]
	fn broken_and_duplicate_files_are_skipped() {
		let dir = tempdir().unwrap();
		let good = dir.path().join("runes.toml");
		let copy = dir.path().join("runes-again.toml");
		let broken = dir.path().join("broken.json");
		fs::write(&good, RUNES).unwrap();
		fs::write(&copy, RUNES).unwrap();
		fs::write(&broken, "{ not json").unwrap();

		let set = loader(false, vec![good, broken, copy]).load().unwrap();
		assert_eq!(catalog_ids(&set), ["runes"]);
	}

	#[test]
	fn nothing_loadable_is_an_error() {
		let dir = tempdir().unwrap();
		let missing = dir.path().join("missing.toml");
		assert!(loader(false, vec![missing]).load().is_err());
	}

	#[test]
	fn discovery_only_picks_catalog_extensions() {
		let dir = tempdir().unwrap();
		for name in ["b.toml", "a.json", "notes.txt"] {
			fs::write(dir.path().join(name), "").unwrap();
		}
		fs::create_dir(dir.path().join("nested.toml")).unwrap();

		let found = catalog_files_in(dir.path());
		let names: Vec<_> = found
			.iter()
			.filter_map(|path| path.file_name()?.to_str())
			.collect();
		assert_eq!(names, ["a.json", "b.toml"]);
	}

	#[test]
	fn unknown_start_catalog_lists_choices() {
		let config = ResolvedConfig {
			start_catalog: Some("kaomoji".to_string()),
			..ResolvedConfig::default()
		};
		let err = PickerFactory::build(config, CatalogSet::builtin())
			.err()
			.unwrap();
		assert_eq!(
			err.to_string(),
			"unknown catalog 'kaomoji' (available: symbols, emoji)"
		);
	}

	#[test]
	fn listing_shows_counts() {
		let set = CatalogSet::builtin();
		let lines = catalog_listing(&set);
		assert_eq!(lines.len(), 2);
		assert!(lines[0].starts_with("symbols\t"));
		assert!(lines[1].starts_with("emoji\t"));
	}
}
