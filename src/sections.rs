//! The guide's landing page: one entry per content section.

use crate::types::ContentKind;

pub const SITE_TITLE: &str = "Discover Sardinia";
pub const SITE_TAGLINE: &str = "Your complete guide to the jewel of the Mediterranean";

/// A section linked from the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
	pub kind: ContentKind,
	pub title: &'static str,
	pub description: &'static str,
	pub action: &'static str,
}

static SECTIONS: [Section; 3] = [
	Section {
		kind: ContentKind::Nature,
		title: "Food, Vegetation & Fauna",
		description: "Discover the rich culinary traditions, diverse flora, and unique wildlife of Sardinia",
		action: "Explore Nature",
	},
	Section {
		kind: ContentKind::Places,
		title: "Places to Visit & History",
		description: "Explore ancient sites, stunning beaches, and charming villages with rich histories",
		action: "Discover Places",
	},
	Section {
		kind: ContentKind::Diary,
		title: "My Travel Diary",
		description: "Document your journey and memories from your Sardinian adventure",
		action: "Open Diary",
	},
];

/// All sections in landing-page order.
#[must_use]
pub fn all() -> &'static [Section] {
	&SECTIONS
}

#[must_use]
pub fn for_kind(kind: ContentKind) -> &'static Section {
	match kind {
		ContentKind::Nature => &SECTIONS[0],
		ContentKind::Places => &SECTIONS[1],
		ContentKind::Diary => &SECTIONS[2],
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_kind_has_exactly_one_section() {
		for kind in ContentKind::ALL {
			assert_eq!(all().iter().filter(|s| s.kind == kind).count(), 1);
			assert_eq!(for_kind(kind).kind, kind);
		}
	}

	#[test]
	fn sections_follow_landing_order() {
		let kinds: Vec<_> = all().iter().map(|s| s.kind).collect();
		assert_eq!(
			kinds,
			[ContentKind::Nature, ContentKind::Places, ContentKind::Diary]
		);
	}
}
