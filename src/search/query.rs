use crate::types::ContentRecord;

/// A free-text query normalised for matching.
///
/// Surrounding whitespace is trimmed and the remainder lower-cased. No other
/// normalisation happens: accents and punctuation compare literally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
	needle: String,
}

impl Query {
	#[must_use]
	pub fn parse(raw: &str) -> Self {
		Self {
			needle: raw.trim().to_lowercase(),
		}
	}

	/// `true` for empty or whitespace-only input.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.needle.is_empty()
	}

	#[must_use]
	pub fn needle(&self) -> &str {
		&self.needle
	}

	/// Case-insensitive substring test against a single piece of text.
	#[must_use]
	pub fn matches_text(&self, text: &str) -> bool {
		self.is_empty() || text.to_lowercase().contains(&self.needle)
	}

	/// `true` when at least one searchable field contains the query.
	#[must_use]
	pub fn matches(&self, record: &ContentRecord) -> bool {
		self.is_empty()
			|| record
				.fields
				.iter()
				.any(|field| self.matches_text(&field.text))
	}
}
