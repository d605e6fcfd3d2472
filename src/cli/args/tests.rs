use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::options::LogLevelArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = CliArgs::try_parse_from(["glyphpick"]).unwrap();
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.catalog_files.is_empty());
	assert!(parsed.query.is_none());
	assert!(!parsed.no_fallback);
}

#[test]
fn repeatable_paths_accumulate() {
	let parsed = CliArgs::try_parse_from([
		"glyphpick",
		"--catalog-file",
		"runes.toml",
		"--catalog-file",
		"kaomoji.json",
		"--config",
		"extra.toml",
	])
	.unwrap();
	assert_eq!(
		parsed.catalog_files,
		[PathBuf::from("runes.toml"), PathBuf::from("kaomoji.json")]
	);
	assert_eq!(parsed.config, [PathBuf::from("extra.toml")]);
}

#[test]
fn short_flags_and_value_enums_parse() {
	let parsed = CliArgs::try_parse_from([
		"glyphpick",
		"-q",
		"arrow left",
		"-c",
		"emoji",
		"-o",
		"json",
		"--log-level",
		"debug",
	])
	.unwrap();
	assert_eq!(parsed.query.as_deref(), Some("arrow left"));
	assert_eq!(parsed.catalog.as_deref(), Some("emoji"));
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.log_level, Some(LogLevelArg::Debug));
}

#[test]
fn unknown_output_format_is_rejected() {
	assert!(CliArgs::try_parse_from(["glyphpick", "-o", "yaml"]).is_err());
}
