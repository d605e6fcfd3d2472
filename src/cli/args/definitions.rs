use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `glyphpick` binary.
#[derive(Parser, Debug)]
#[command(
	name = "glyphpick",
	version,
	long_version = long_version(),
	about = "Search Unicode symbols and emoji by name and copy them to the clipboard",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		long = "config",
		value_name = "FILE",
		env = "GLYPHPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'c',
		long,
		value_name = "ID",
		help = "Start on the catalog with this id (default: first catalog)"
	)]
	pub(crate) catalog: Option<String>,
	#[arg(
		long = "catalog-file",
		value_name = "PATH",
		action = ArgAction::Append,
		help = "Load an extra catalog from a TOML or JSON file (default: none)"
	)]
	pub(crate) catalog_files: Vec<PathBuf>,
	#[arg(
		long = "no-builtin",
		help = "Hide the built-in symbol and emoji catalogs (default: disabled)"
	)]
	pub(crate) no_builtin: bool,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TEXT",
		help = "Set the prompt shown before the search input (default: Search)"
	)]
	pub(crate) prompt: Option<String>,
	#[arg(
		long = "no-offline-cache",
		help = "Do not snapshot catalog files for offline use (default: disabled)"
	)]
	pub(crate) no_offline_cache: bool,
	#[arg(
		long = "no-fallback",
		help = "Do not fall back to OSC 52 when clipboard tools fail (default: disabled)"
	)]
	pub(crate) no_fallback: bool,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Minimum level shown in the log pane (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list-catalogs",
		help = "List the configured catalogs and exit (default: disabled)"
	)]
	pub(crate) list_catalogs: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
