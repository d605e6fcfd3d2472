//! Offline snapshots of file-backed catalogs.
//!
//! When enabled, every catalog loaded from a file is mirrored as JSON into
//! the cache directory on a detached thread. If the source file later goes
//! missing or stops parsing, the last snapshot stands in for it. Snapshot
//! failures are logged and otherwise ignored.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use log::{debug, info, warn};

use super::file::{self, CatalogFile};
use super::{Catalog, CatalogError};

const SNAPSHOT_DIR: &str = "catalogs";
const PATH_HASH_LEN: usize = 16;

/// Where the snapshot for the catalog file at `source` lives under `cache_dir`.
///
/// The name pairs the file stem with a hash of the absolute source path, so
/// files that share a stem in different directories keep separate snapshots.
#[must_use]
pub fn snapshot_path(cache_dir: &Path, source: &Path) -> PathBuf {
	let stem = source
		.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.unwrap_or_else(|| "catalog".to_string());
	let absolute = std::path::absolute(source).unwrap_or_else(|_| source.to_path_buf());
	let hash = blake3::hash(absolute.as_os_str().as_encoded_bytes()).to_hex();
	cache_dir
		.join(SNAPSHOT_DIR)
		.join(format!("{stem}-{}.json", &hash.as_str()[..PATH_HASH_LEN]))
}

/// Write a snapshot of `catalog`, loaded from `source`, into `cache_dir`.
///
/// # Errors
///
/// Fails when the snapshot directory or file cannot be written.
pub fn write_snapshot(
	cache_dir: &Path,
	source: &Path,
	catalog: &Catalog,
) -> Result<PathBuf, CatalogError> {
	let path = snapshot_path(cache_dir, source);
	let io_error = |source| CatalogError::Io {
		path: path.clone(),
		source,
	};
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).map_err(io_error)?;
	}
	let payload = serde_json::to_vec_pretty(&CatalogFile::from_catalog(catalog))
		.map_err(|err| CatalogError::parse(&path, err))?;
	let staging = path.with_extension("json.tmp");
	fs::write(&staging, payload).map_err(io_error)?;
	fs::rename(&staging, &path).map_err(io_error)?;
	Ok(path)
}

/// Read the snapshot previously written for `source`.
///
/// # Errors
///
/// Fails when no snapshot exists or it does not parse.
pub fn read_snapshot(cache_dir: &Path, source: &Path) -> Result<Catalog, CatalogError> {
	let path = snapshot_path(cache_dir, source);
	let contents = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
		path: path.clone(),
		source,
	})?;
	let file: CatalogFile =
		serde_json::from_str(&contents).map_err(|err| CatalogError::parse(&path, err))?;
	file.into_catalog()
}

/// Load the catalog file at `source`, falling back to its snapshot.
///
/// # Errors
///
/// Returns the original load error when there is no usable snapshot.
pub fn load_or_snapshot(source: &Path, cache_dir: Option<&Path>) -> Result<Catalog, CatalogError> {
	let error = match file::load(source) {
		Ok(catalog) => return Ok(catalog),
		Err(error) => error,
	};
	let Some(cache_dir) = cache_dir else {
		return Err(error);
	};
	match read_snapshot(cache_dir, source) {
		Ok(catalog) => {
			warn!(
				"{error}; using offline snapshot for catalog '{}'",
				catalog.id()
			);
			Ok(catalog)
		}
		Err(snapshot_error) => {
			debug!("no offline snapshot for {}: {snapshot_error}", source.display());
			Err(error)
		}
	}
}

/// Start mirroring `catalogs` into `cache_dir` in the background.
///
/// The returned handle may be dropped; the outcome is only logged.
pub fn register(cache_dir: PathBuf, catalogs: Vec<(PathBuf, Catalog)>) -> thread::JoinHandle<()> {
	thread::spawn(move || {
		let mut written = 0usize;
		for (source, catalog) in &catalogs {
			match write_snapshot(&cache_dir, source, catalog) {
				Ok(path) => {
					debug!("cached catalog '{}' at {}", catalog.id(), path.display());
					written += 1;
				}
				Err(err) => warn!("offline cache unavailable for '{}': {err}", catalog.id()),
			}
		}
		if written > 0 {
			info!(
				"offline cache registered for {written} catalog(s) in {}",
				cache_dir.display()
			);
		}
	})
}

#[cfg(test)]
mod tests {
	use std::fs;

	use tempfile::tempdir;

	use super::*;
	use crate::catalog::{Entry, ItemNoun};

	fn sample() -> Catalog {
		Catalog::new(
			"cards",
			"Cards",
			ItemNoun::new("card", "cards"),
			vec![Entry::new("🂡", ["ace of spades", "ace"])],
		)
	}

	#[test]
	fn snapshot_round_trips_catalog_metadata() {
		let cache = tempdir().unwrap();
		let source = Path::new("/nowhere/cards.toml");
		let path = write_snapshot(cache.path(), source, &sample()).unwrap();
		let name = path.file_name().unwrap().to_str().unwrap();
		assert!(name.starts_with("cards-") && name.ends_with(".json"));
		assert_eq!(path.parent().unwrap(), cache.path().join("catalogs"));

		let restored = read_snapshot(cache.path(), source).unwrap();
		assert_eq!(restored.id(), "cards");
		assert_eq!(restored.noun(), &ItemNoun::new("card", "cards"));
		assert_eq!(restored.entries(), sample().entries());
	}

	#[test]
	fn missing_source_falls_back_to_snapshot() {
		let cache = tempdir().unwrap();
		let workdir = tempdir().unwrap();
		let source = workdir.path().join("cards.toml");

		register(cache.path().to_path_buf(), vec![(source.clone(), sample())])
			.join()
			.unwrap();

		let catalog = load_or_snapshot(&source, Some(cache.path())).unwrap();
		assert_eq!(catalog.label(), "Cards");
	}

	#[test]
	fn missing_source_without_snapshot_reports_load_error() {
		let cache = tempdir().unwrap();
		let source = cache.path().join("absent.toml");
		let err = load_or_snapshot(&source, Some(cache.path())).unwrap_err();
		assert!(matches!(err, CatalogError::Io { ref path, .. } if path == &source));

		let err = load_or_snapshot(&source, None).unwrap_err();
		assert!(matches!(err, CatalogError::Io { .. }));
	}

	#[test]
	fn present_source_wins_over_snapshot() {
		let cache = tempdir().unwrap();
		let workdir = tempdir().unwrap();
		let source = workdir.path().join("cards.toml");
		write_snapshot(cache.path(), &source, &sample()).unwrap();
		fs::write(&source, "id = \"cards\"\nlabel = \"Fresh\"\n").unwrap();

		let catalog = load_or_snapshot(&source, Some(cache.path())).unwrap();
		assert_eq!(catalog.label(), "Fresh");
		assert!(catalog.is_empty());
	}

	#[test]
	fn sources_sharing_a_stem_keep_separate_snapshots() {
		let cache = tempdir().unwrap();
		let one = Path::new("/one/runes.toml");
		let two = Path::new("/two/runes.json");
		let ogham = Catalog::new(
			"ogham",
			"Ogham",
			ItemNoun::new("letter", "letters"),
			vec![Entry::new("ᚁ", ["beith"])],
		);
		let runes = Catalog::new(
			"runes",
			"Runes",
			ItemNoun::new("rune", "runes"),
			vec![Entry::new("ᚠ", ["fehu"])],
		);

		register(
			cache.path().to_path_buf(),
			vec![(one.to_path_buf(), runes), (two.to_path_buf(), ogham)],
		)
		.join()
		.unwrap();

		assert_ne!(snapshot_path(cache.path(), one), snapshot_path(cache.path(), two));
		let restored = load_or_snapshot(one, Some(cache.path())).unwrap();
		assert_eq!(restored.id(), "runes");
		let restored = load_or_snapshot(two, Some(cache.path())).unwrap();
		assert_eq!(restored.id(), "ogham");
	}
}
