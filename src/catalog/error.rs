use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling catalogs or reading catalog files.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("at least one catalog is required")]
	Empty,

	#[error("catalog id must not be empty")]
	EmptyId,

	#[error("catalog id '{id}' is already registered")]
	DuplicateId { id: String },

	#[error("failed to read catalog file {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to parse catalog file {}: {message}", path.display())]
	Parse { path: PathBuf, message: String },

	#[error("unsupported catalog file {} (expected a .toml or .json extension)", path.display())]
	UnsupportedFormat { path: PathBuf },
}

impl CatalogError {
	pub(crate) fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
		Self::Parse {
			path: path.into(),
			message: message.to_string(),
		}
	}
}
