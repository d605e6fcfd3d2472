use std::path::PathBuf;

use clap::Parser;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"glyphpick",
		"-q",
		"arrow",
		"-c",
		"emoji",
		"--theme",
		"light",
		"--prompt",
		"Find",
		"--catalog-file",
		"runes.toml",
		"--no-offline-cache",
		"--no-fallback",
		"--log-level",
		"debug",
	]);

	let mut config: RawConfig = toml::from_str(
		r#"
		[ui]
		theme = "solarized"
		initial_query = "heart"

		[catalogs]
		files = ["kaomoji.json"]
		"#,
	)
	.unwrap();
	config.apply_cli_overrides(&cli);

	assert_eq!(config.ui.theme.as_deref(), Some("light"));
	assert_eq!(config.ui.initial_query.as_deref(), Some("arrow"));
	assert_eq!(config.ui.start_catalog.as_deref(), Some("emoji"));
	assert_eq!(config.ui.prompt.as_deref(), Some("Find"));
	assert_eq!(
		config.catalogs.files,
		[PathBuf::from("kaomoji.json"), PathBuf::from("runes.toml")]
	);
	assert_eq!(config.catalogs.offline_cache, Some(false));
	assert_eq!(config.clipboard.fallback, Some(false));
	assert_eq!(config.logging.level.as_deref(), Some("debug"));
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["glyphpick"]);
	let resolved = RawConfig::default().resolve(&cli).unwrap();

	assert_eq!(resolved.initial_query, "");
	assert_eq!(resolved.start_catalog, None);
	assert_eq!(resolved.ui.prompt(), Some("Search"));
	assert!(resolved.include_builtin);
	assert!(resolved.offline_cache);
	assert!(resolved.osc52_fallback);
	assert_eq!(resolved.log_filter(), log::LevelFilter::Info);
}

#[test]
fn resolve_reports_origin_of_bad_theme() {
	let cli = CliArgs::parse_from(["glyphpick", "--theme", "neon"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);

	let err = config.resolve(&cli).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("ui.theme"));
	assert!(message.contains("CLI flag `--theme`"));
}

#[test]
fn resolve_reports_config_key_for_file_values() {
	let cli = CliArgs::parse_from(["glyphpick"]);
	let config: RawConfig = toml::from_str("[ui]\ncard_width = 2\n").unwrap();

	let err = config.resolve(&cli).unwrap_err();
	assert!(err.to_string().contains("configuration key `ui.card_width`"));
}

#[test]
fn blank_start_catalog_is_ignored() {
	let cli = CliArgs::parse_from(["glyphpick", "-c", "  "]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).unwrap();
	assert_eq!(resolved.start_catalog, None);
}
