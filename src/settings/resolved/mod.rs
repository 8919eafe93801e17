use std::path::PathBuf;
use std::time::Duration;

use isola::{Category, ContentKind};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

pub(crate) const DEFAULT_LOAD_TIMEOUT_MS: u64 = 5_000;
pub(crate) const DEFAULT_WIDTH: usize = isola::render::DEFAULT_WIDTH;

/// Where the browse workflow reads its records from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
	/// The built-in guide content.
	Fixture,
	/// A JSON document of content rows.
	Json(PathBuf),
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub source: ContentSource,
	pub section: ContentKind,
	pub category: Option<Category>,
	pub query: String,
	pub load_timeout: Duration,
	pub width: usize,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
