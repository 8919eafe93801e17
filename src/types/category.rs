use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of tabs used to partition the nature section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	Food,
	Vegetation,
	Fauna,
}

impl Category {
	pub const ALL: [Category; 3] = [Category::Food, Category::Vegetation, Category::Fauna];

	/// Stable identifier used in configuration files and JSON rows.
	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			Category::Food => "food",
			Category::Vegetation => "vegetation",
			Category::Fauna => "fauna",
		}
	}

	/// Label shown on the tab button.
	#[must_use]
	pub const fn tab_label(self) -> &'static str {
		match self {
			Category::Food => "Traditional Foods",
			Category::Vegetation => "Vegetation & Plants",
			Category::Fauna => "Fauna & Wildlife",
		}
	}
}

impl fmt::Display for Category {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Returned when a string does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected one of: food, vegetation, fauna)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
	type Err = UnknownCategory;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		Category::ALL
			.into_iter()
			.find(|category| category.id() == normalized)
			.ok_or_else(|| UnknownCategory(value.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_ids_case_insensitively() {
		assert_eq!("Fauna".parse::<Category>(), Ok(Category::Fauna));
		assert_eq!(" food ".parse::<Category>(), Ok(Category::Food));
	}

	#[test]
	fn rejects_unknown_names() {
		let err = "beaches".parse::<Category>().unwrap_err();
		assert_eq!(err, UnknownCategory("beaches".into()));
		assert!(err.to_string().contains("beaches"));
	}
}
