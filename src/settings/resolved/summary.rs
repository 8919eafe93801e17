use super::{ContentSource, ResolvedConfig};

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let source = match &config.source {
		ContentSource::Fixture => "built-in guide".to_string(),
		ContentSource::Json(path) => format!("JSON file {}", path.display()),
	};
	let category = config
		.category
		.map(|category| category.tab_label().to_string())
		.unwrap_or_else(|| "(none)".to_string());
	let query = if config.query.is_empty() {
		"(empty)".to_string()
	} else {
		format!("\"{}\"", config.query)
	};

	vec![
		"Effective configuration:".to_string(),
		format!("  Content: {source}"),
		format!("  Section: {}", config.section.descriptor().heading),
		format!("  Category: {category}"),
		format!("  Query: {query}"),
		format!("  Load timeout: {} ms", config.load_timeout.as_millis()),
		format!("  Width: {}", config.width),
	]
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use isola::{Category, ContentKind};

	use super::*;

	#[test]
	fn summary_describes_every_setting() {
		let config = ResolvedConfig {
			source: ContentSource::Json(PathBuf::from("/tmp/content.json")),
			section: ContentKind::Nature,
			category: Some(Category::Fauna),
			query: "seal".into(),
			load_timeout: Duration::from_millis(1500),
			width: 72,
		};

		let lines = summary_lines(&config);
		assert_eq!(lines[1], "  Content: JSON file /tmp/content.json");
		assert_eq!(lines[2], "  Section: Food, Vegetation & Fauna");
		assert_eq!(lines[3], "  Category: Fauna & Wildlife");
		assert_eq!(lines[4], "  Query: \"seal\"");
		assert_eq!(lines[5], "  Load timeout: 1500 ms");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			source: ContentSource::Fixture,
			section: ContentKind::Places,
			category: None,
			query: String::new(),
			load_timeout: Duration::from_secs(5),
			width: 80,
		};

		print_summary(&config);
	}
}
