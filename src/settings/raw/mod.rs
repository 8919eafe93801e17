use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Error, Result};
use isola::{Category, ContentKind};
use serde::Deserialize;

use super::resolved::{
	ConfigError, ConfigSources, ContentSource, DEFAULT_LOAD_TIMEOUT_MS, DEFAULT_WIDTH,
	ResolvedConfig, SettingSource,
};
use crate::cli::CliArgs;
use isola::app_dirs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	content: ContentSection,
	view: ViewSection,
}

/// Where records are read from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ContentSection {
	source: Option<String>,
	path: Option<PathBuf>,
}

/// Initial state of the list view.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ViewSection {
	section: Option<String>,
	category: Option<String>,
	query: Option<String>,
	load_timeout_ms: Option<u64>,
	width: Option<usize>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.content.source = Some("json".to_string());
			self.content.path = Some(path);
		}
		if let Some(section) = cli.section {
			self.view.section = Some(section.as_str().to_string());
		}
		if let Some(category) = cli.category {
			self.view.category = Some(category.as_str().to_string());
		}
		if let Some(query) = cli.query.clone() {
			self.view.query = Some(query);
		}
		if let Some(timeout) = cli.load_timeout_ms {
			self.view.load_timeout_ms = Some(timeout);
		}
		if let Some(width) = cli.width {
			self.view.width = Some(width);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			content_source: detect_source(
				cli.data.is_some(),
				self.content.source.is_some(),
				"ISOLA__CONTENT__SOURCE",
				"--data",
				"content.source",
			),
			section: detect_source(
				cli.section.is_some(),
				self.view.section.is_some(),
				"ISOLA__VIEW__SECTION",
				"--section",
				"view.section",
			),
			category: detect_source(
				cli.category.is_some(),
				self.view.category.is_some(),
				"ISOLA__VIEW__CATEGORY",
				"--category",
				"view.category",
			),
			load_timeout: detect_source(
				cli.load_timeout_ms.is_some(),
				self.view.load_timeout_ms.is_some(),
				"ISOLA__VIEW__LOAD_TIMEOUT_MS",
				"--load-timeout-ms",
				"view.load_timeout_ms",
			),
			width: detect_source(
				cli.width.is_some(),
				self.view.width.is_some(),
				"ISOLA__VIEW__WIDTH",
				"--width",
				"view.width",
			),
		};

		let source = self.content.resolve(&sources)?;
		let section = match self.view.section.as_deref() {
			Some(value) => value.parse::<ContentKind>().map_err(|err| {
				ConfigError::invalid(
					"view.section",
					value,
					sources.source_for_section(),
					err.to_string(),
				)
			})?,
			None => ContentKind::Nature,
		};
		let category = match self.view.category.as_deref() {
			Some(value) => Some(value.parse::<Category>().map_err(|err| {
				ConfigError::invalid(
					"view.category",
					value,
					sources.source_for_category(),
					err.to_string(),
				)
			})?),
			None => section.default_category(),
		};

		let config = ResolvedConfig {
			source,
			section,
			category,
			query: self.view.query.unwrap_or_default(),
			load_timeout: Duration::from_millis(
				self.view.load_timeout_ms.unwrap_or(DEFAULT_LOAD_TIMEOUT_MS),
			),
			width: self.view.width.unwrap_or(DEFAULT_WIDTH),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

impl ContentSection {
	fn resolve(self, sources: &ConfigSources) -> Result<ContentSource> {
		match self.source.as_deref().map(str::trim) {
			None | Some("fixture") => Ok(ContentSource::Fixture),
			Some("json") => {
				let path = match self.path {
					Some(path) => path,
					None => app_dirs::default_content_path()?,
				};
				Ok(ContentSource::Json(path))
			}
			Some(other) => Err(Error::new(ConfigError::invalid(
				"content.source",
				other,
				sources.source_for_content(),
				"expected `fixture` or `json`",
			))),
		}
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
