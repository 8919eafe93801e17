use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Category;

/// The kind of content requested from a repository. Each kind backs one
/// section of the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
	Nature,
	Places,
	Diary,
}

/// Static presentation metadata attached to a [`ContentKind`].
#[derive(Debug)]
pub struct KindDescriptor {
	pub id: &'static str,
	pub heading: &'static str,
	pub subtitle: &'static str,
	/// Plural noun used by the empty-state message ("No places found ...").
	pub empty_noun: &'static str,
	/// Tabs the list is partitioned by. Empty for untabbed kinds.
	pub categories: &'static [Category],
}

static NATURE: KindDescriptor = KindDescriptor {
	id: "nature",
	heading: "Food, Vegetation & Fauna",
	subtitle: "Explore the natural wonders and culinary traditions of Sardinia",
	empty_noun: "items",
	categories: &Category::ALL,
};

static PLACES: KindDescriptor = KindDescriptor {
	id: "places",
	heading: "Places to Visit & History",
	subtitle: "Discover the historic sites, natural wonders, and charming destinations of Sardinia",
	empty_noun: "places",
	categories: &[],
};

static DIARY: KindDescriptor = KindDescriptor {
	id: "diary",
	heading: "My Travel Diary",
	subtitle: "Capture and preserve your Sardinian memories",
	empty_noun: "entries",
	categories: &[],
};

impl ContentKind {
	pub const ALL: [ContentKind; 3] = [ContentKind::Nature, ContentKind::Places, ContentKind::Diary];

	#[must_use]
	pub fn descriptor(self) -> &'static KindDescriptor {
		match self {
			ContentKind::Nature => &NATURE,
			ContentKind::Places => &PLACES,
			ContentKind::Diary => &DIARY,
		}
	}

	#[must_use]
	pub fn id(self) -> &'static str {
		self.descriptor().id
	}

	/// Whether records of this kind are split across category tabs.
	#[must_use]
	pub fn is_tabbed(self) -> bool {
		!self.descriptor().categories.is_empty()
	}

	/// Category selected when a view of this kind is activated.
	#[must_use]
	pub fn default_category(self) -> Option<Category> {
		self.descriptor().categories.first().copied()
	}

	/// Whether `category` is one of this kind's tabs.
	#[must_use]
	pub fn supports(self, category: Category) -> bool {
		self.descriptor().categories.contains(&category)
	}
}

impl fmt::Display for ContentKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section '{0}' (expected one of: nature, places, diary)")]
pub struct UnknownKind(pub String);

impl FromStr for ContentKind {
	type Err = UnknownKind;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let normalized = value.trim().to_ascii_lowercase();
		ContentKind::ALL
			.into_iter()
			.find(|kind| kind.id() == normalized)
			.ok_or_else(|| UnknownKind(value.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_nature_is_tabbed() {
		assert!(ContentKind::Nature.is_tabbed());
		assert!(!ContentKind::Places.is_tabbed());
		assert!(!ContentKind::Diary.is_tabbed());
	}

	#[test]
	fn default_category_follows_first_tab() {
		assert_eq!(ContentKind::Nature.default_category(), Some(Category::Food));
		assert_eq!(ContentKind::Places.default_category(), None);
	}

	#[test]
	fn supports_checks_the_closed_set() {
		assert!(ContentKind::Nature.supports(Category::Fauna));
		assert!(!ContentKind::Places.supports(Category::Fauna));
	}

	#[test]
	fn parses_section_names() {
		assert_eq!("PLACES".parse::<ContentKind>(), Ok(ContentKind::Places));
		assert!("home".parse::<ContentKind>().is_err());
	}
}
