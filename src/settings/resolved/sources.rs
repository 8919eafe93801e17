use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) content_source: Option<SettingSource>,
	pub(crate) section: Option<SettingSource>,
	pub(crate) category: Option<SettingSource>,
	pub(crate) load_timeout: Option<SettingSource>,
	pub(crate) width: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_content(&self) -> SettingSource {
		self.content_source
			.clone()
			.unwrap_or(SettingSource::ConfigKey("content.source"))
	}

	pub(crate) fn source_for_section(&self) -> SettingSource {
		self.section
			.clone()
			.unwrap_or(SettingSource::ConfigKey("view.section"))
	}

	pub(crate) fn source_for_category(&self) -> SettingSource {
		self.category
			.clone()
			.unwrap_or(SettingSource::ConfigKey("view.category"))
	}

	pub(crate) fn source_for_load_timeout(&self) -> SettingSource {
		self.load_timeout
			.clone()
			.unwrap_or(SettingSource::ConfigKey("view.load_timeout_ms"))
	}

	pub(crate) fn source_for_width(&self) -> SettingSource {
		self.width
			.clone()
			.unwrap_or(SettingSource::ConfigKey("view.width"))
	}
}
