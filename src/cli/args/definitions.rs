use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{CategoryArg, OutputFormat, SectionArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `isola` binary.
#[derive(Parser, Debug)]
#[command(
	name = "isola",
	version,
	long_version = long_version(),
	about = "Browse and search the Sardinia travel guide",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		long = "config",
		value_name = "FILE",
		env = "ISOLA_CONFIG",
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
		short = 's',
		long,
		value_enum,
		help = "Section to open (default: nature)"
	)]
	pub(crate) section: Option<SectionArg>,
	#[arg(
		short = 'c',
		long,
		value_enum,
		help = "Category tab to show; nature only (default: food)"
	)]
	pub(crate) category: Option<CategoryArg>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		allow_hyphen_values = true,
		help = "Free-text search across every field (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'd',
		long = "data",
		value_name = "FILE",
		help = "Read content from a JSON file instead of the built-in guide"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		long = "load-timeout-ms",
		value_name = "MILLIS",
		help = "How long to wait for content to load (default: 5000)"
	)]
	pub(crate) load_timeout_ms: Option<u64>,
	#[arg(
		short = 'w',
		long,
		value_name = "COLUMNS",
		help = "Wrap plain output at this width (default: 80)"
	)]
	pub(crate) width: Option<usize>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how results are printed"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long = "list-sections", help = "Print the guide's sections and exit")]
	pub(crate) list_sections: bool,
	#[arg(
		long = "print-config",
		help = "Print the resolved configuration before running"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long,
		action = ArgAction::Count,
		help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
	)]
	pub(crate) verbose: u8,
}
