use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use glyphpick::UiConfig;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	catalogs: CatalogSection,
	clipboard: ClipboardSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	prompt: Option<String>,
	initial_query: Option<String>,
	start_catalog: Option<String>,
	theme: Option<String>,
	card_width: Option<u16>,
	show_log_pane: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	builtin: Option<bool>,
	files: Vec<PathBuf>,
	/// Also pick up `*.toml`/`*.json` files from `<data dir>/catalogs`.
	discover: Option<bool>,
	offline_cache: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ClipboardSection {
	fallback: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(prompt) = cli.prompt.clone() {
			self.ui.prompt = Some(prompt);
		}
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(catalog) = cli.catalog.clone() {
			self.ui.start_catalog = Some(catalog);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if cli.no_builtin {
			self.catalogs.builtin = Some(false);
		}
		self.catalogs
			.files
			.extend(cli.catalog_files.iter().cloned());
		if cli.no_offline_cache {
			self.catalogs.offline_cache = Some(false);
		}
		if cli.no_fallback {
			self.clipboard.fallback = Some(false);
		}
		if let Some(level) = cli.log_level {
			self.logging.level = Some(level.as_str().to_string());
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"GLYPHPICK__UI__THEME",
				"--theme",
				"ui.theme",
			),
			card_width: detect_source(
				false,
				self.ui.card_width.is_some(),
				"GLYPHPICK__UI__CARD_WIDTH",
				"",
				"ui.card_width",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.logging.level.is_some(),
				"GLYPHPICK__LOGGING__LEVEL",
				"--log-level",
				"logging.level",
			),
			builtin: detect_source(
				cli.no_builtin,
				self.catalogs.builtin.is_some(),
				"GLYPHPICK__CATALOGS__BUILTIN",
				"--no-builtin",
				"catalogs.builtin",
			),
		};

		let defaults = UiConfig::default();
		let ui = UiConfig {
			prompt: self.ui.prompt.unwrap_or(defaults.prompt),
			card_width: self.ui.card_width.unwrap_or(defaults.card_width),
			show_log_pane: self.ui.show_log_pane.unwrap_or(defaults.show_log_pane),
			log_pane_percent: defaults.log_pane_percent,
		};

		let config = ResolvedConfig {
			initial_query: self.ui.initial_query.unwrap_or_default(),
			start_catalog: self
				.ui
				.start_catalog
				.filter(|id| !id.trim().is_empty()),
			theme: self.ui.theme,
			ui,
			include_builtin: self.catalogs.builtin.unwrap_or(true),
			catalog_files: self.catalogs.files,
			discover_catalogs: self.catalogs.discover.unwrap_or(true),
			offline_cache: self.catalogs.offline_cache.unwrap_or(true),
			osc52_fallback: self.clipboard.fallback.unwrap_or(true),
			log_level: self.logging.level.unwrap_or_else(|| "info".to_string()),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
