use glyphpick::tui::theme;
use log::LevelFilter;

use super::{ConfigError, ConfigSources, ResolvedConfig};

const CARD_WIDTH_RANGE: std::ops::RangeInclusive<u16> = 8..=80;
const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		return Err(ConfigError::one_of(
			"ui.theme",
			name.as_str(),
			sources.source_for_theme(),
			&theme::names(),
		));
	}

	if !CARD_WIDTH_RANGE.contains(&config.ui.card_width) {
		return Err(ConfigError::invalid(
			"ui.card_width",
			config.ui.card_width.to_string(),
			sources.source_for_card_width(),
			format!(
				"must be between {} and {}",
				CARD_WIDTH_RANGE.start(),
				CARD_WIDTH_RANGE.end()
			),
		));
	}

	if config.log_level.parse::<LevelFilter>().is_err() {
		return Err(ConfigError::one_of(
			"logging.level",
			config.log_level.as_str(),
			sources.source_for_log_level(),
			LOG_LEVELS,
		));
	}

	if !config.include_builtin && config.catalog_files.is_empty() && !config.discover_catalogs {
		return Err(ConfigError::invalid(
			"catalogs.builtin",
			"false",
			sources.source_for_builtin(),
			"no catalog files are configured, so at least the built-in catalogs are required",
		));
	}

	Ok(())
}
