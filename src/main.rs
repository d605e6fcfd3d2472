mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::{CatalogLoader, PickerWorkflow, catalog_listing};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in glyphpick::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	glyphpick::logging::initialize(resolved.log_filter());

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.list_catalogs {
		let catalogs = CatalogLoader::from_config(&resolved).load()?;
		for line in catalog_listing(&catalogs) {
			println!("{line}");
		}
		return Ok(());
	}

	run_picker(cli.output, resolved)
}

/// Run the picker and print the outcome in the chosen format.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = PickerWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
