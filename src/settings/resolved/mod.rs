use std::path::PathBuf;

use glyphpick::UiConfig;
use log::LevelFilter;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub initial_query: String,
	pub start_catalog: Option<String>,
	pub theme: Option<String>,
	pub ui: UiConfig,
	pub include_builtin: bool,
	pub catalog_files: Vec<PathBuf>,
	pub discover_catalogs: bool,
	pub offline_cache: bool,
	pub osc52_fallback: bool,
	/// Validated level name; see [`ResolvedConfig::log_filter`].
	pub log_level: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub fn log_filter(&self) -> LevelFilter {
		self.log_level.parse().unwrap_or(LevelFilter::Info)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

impl Default for ResolvedConfig {
	fn default() -> Self {
		Self {
			initial_query: String::new(),
			start_catalog: None,
			theme: None,
			ui: UiConfig::default(),
			include_builtin: true,
			catalog_files: Vec::new(),
			discover_catalogs: true,
			offline_cache: true,
			osc52_fallback: true,
			log_level: "info".to_string(),
		}
	}
}
