use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(category) = config.category
		&& !config.section.supports(category)
	{
		return Err(ConfigError::invalid(
			"view.category",
			category.id(),
			sources.source_for_category(),
			format!("the {} section has no category tabs", config.section),
		));
	}

	if config.load_timeout.is_zero() {
		return Err(ConfigError::invalid(
			"view.load_timeout_ms",
			"0",
			sources.source_for_load_timeout(),
			"must be greater than zero",
		));
	}

	if config.width == 0 {
		return Err(ConfigError::invalid(
			"view.width",
			"0",
			sources.source_for_width(),
			"must be at least 1",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use isola::{Category, ContentKind};

	use super::super::{ContentSource, SettingSource};
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			source: ContentSource::Fixture,
			section: ContentKind::Nature,
			category: Some(Category::Food),
			query: String::new(),
			load_timeout: Duration::from_secs(1),
			width: 80,
		}
	}

	#[test]
	fn validation_accepts_defaults() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_width() {
		let config = ResolvedConfig {
			width: 0,
			..config()
		};
		let sources = ConfigSources {
			width: Some(SettingSource::Environment("ISOLA__VIEW__WIDTH")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "view.width"));
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_rejects_category_on_places() {
		let config = ResolvedConfig {
			section: ContentKind::Places,
			category: Some(Category::Fauna),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "view.category"));
		let message = err.to_string();
		assert!(message.contains("value: fauna"));
		assert!(message.contains("configuration key"));
	}
}
