use clap::{CommandFactory, FromArgMatches};

use super::options::{CategoryArg, SectionArg};
use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> CliArgs {
	let mut matches = CliArgs::command().get_matches_from(args);
	CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
}

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = parse(&["isola"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert_eq!(parsed.section, None);
	assert_eq!(parsed.verbose, 0);
	assert!(!parsed.list_sections);
}

#[test]
fn parse_cli_reads_view_options() {
	let parsed = parse(&[
		"isola", "-s", "nature", "-c", "fauna", "-q", "MOU", "-o", "json", "-vv",
	]);
	assert_eq!(parsed.section, Some(SectionArg::Nature));
	assert_eq!(parsed.category, Some(CategoryArg::Fauna));
	assert_eq!(parsed.query.as_deref(), Some("MOU"));
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.verbose, 2);
}

#[test]
fn value_names_match_configuration_keys() {
	assert_eq!(SectionArg::Places.as_str(), "places");
	assert_eq!(CategoryArg::Vegetation.as_str(), "vegetation");
}
