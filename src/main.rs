mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain, print_sections};
use settings::ResolvedConfig;
use workflow::BrowseWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	isola::logging::initialize(cli.verbose);

	if cli.list_sections {
		print_sections();
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_browse(cli.output, resolved)
}

/// Execute the browse workflow and print output in the chosen format.
fn run_browse(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let width = settings.width;
	let list = BrowseWorkflow::from_config(settings).run()?;

	match format {
		OutputFormat::Plain => print_plain(&list, width),
		OutputFormat::Json => print_json(&list)?,
	}

	Ok(())
}
