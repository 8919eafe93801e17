use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use isola::{Category, ContentKind};

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::ContentSource;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"isola",
		"--section",
		"places",
		"--query",
		"beach",
		"--data",
		"/tmp/content.json",
		"--load-timeout-ms",
		"250",
		"--width",
		"60",
	]);

	let mut config = RawConfig::default();
	config.view.section = Some("diary".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.view.section.as_deref(), Some("places"));
	assert_eq!(config.view.query.as_deref(), Some("beach"));
	assert_eq!(config.content.source.as_deref(), Some("json"));
	assert_eq!(config.content.path, Some(PathBuf::from("/tmp/content.json")));
	assert_eq!(config.view.load_timeout_ms, Some(250));
	assert_eq!(config.view.width, Some(60));
}

#[test]
fn defaults_open_the_nature_section_on_food() {
	let cli = CliArgs::parse_from(["isola"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolve");
	assert_eq!(resolved.section, ContentKind::Nature);
	assert_eq!(resolved.category, Some(Category::Food));
	assert_eq!(resolved.source, ContentSource::Fixture);
	assert_eq!(resolved.query, "");
	assert_eq!(resolved.load_timeout, Duration::from_millis(5_000));
	assert_eq!(resolved.width, 80);
}

#[test]
fn untabbed_section_has_no_default_category() {
	let cli = CliArgs::parse_from(["isola", "-s", "places"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).expect("resolve");
	assert_eq!(resolved.category, None);
}

#[test]
fn category_on_untabbed_section_is_rejected() {
	let cli = CliArgs::parse_from(["isola", "-s", "diary", "-c", "fauna"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let err = config.resolve(&cli).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("view.category"), "{message}");
	assert!(message.contains("CLI flag `--category`"), "{message}");
}

#[test]
fn unknown_section_in_config_is_reported_with_its_key() {
	let cli = CliArgs::parse_from(["isola"]);
	let mut config = RawConfig::default();
	config.view.section = Some("beaches".into());
	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("view.section"), "{message}");
	assert!(message.contains("beaches"), "{message}");
}

#[test]
fn unknown_content_source_is_rejected() {
	let cli = CliArgs::parse_from(["isola"]);
	let mut config = RawConfig::default();
	config.content.source = Some("supabase".into());
	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("content.source"), "{message}");
}

#[test]
fn zero_timeout_is_rejected() {
	let cli = CliArgs::parse_from(["isola", "--load-timeout-ms", "0"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("view.load_timeout_ms"), "{message}");
}
