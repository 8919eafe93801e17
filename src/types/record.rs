use serde::{Deserialize, Serialize};

use super::{Category, ContentKind};

/// A named text field eligible for free-text search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchField {
	pub name: String,
	pub text: String,
}

impl SearchField {
	#[must_use]
	pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			text: text.into(),
		}
	}
}

/// One displayable entry: a place, a food/flora/fauna entry or a diary entry.
///
/// Records are immutable once loaded. Inactive rows are dropped by the
/// repository before a record is ever built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
	pub id: String,
	pub kind: ContentKind,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub category: Option<Category>,
	pub fields: Vec<SearchField>,
}

impl ContentRecord {
	/// Create a record with no category and no fields.
	#[must_use]
	pub fn new(id: impl Into<String>, kind: ContentKind) -> Self {
		Self {
			id: id.into(),
			kind,
			category: None,
			fields: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_category(mut self, category: Category) -> Self {
		self.category = Some(category);
		self
	}

	/// Append a searchable field, keeping insertion order.
	#[must_use]
	pub fn with_field(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
		self.fields.push(SearchField::new(name, text));
		self
	}

	/// Look up a field's text by name.
	#[must_use]
	pub fn field(&self, name: &str) -> Option<&str> {
		self.fields
			.iter()
			.find(|field| field.name == name)
			.map(|field| field.text.as_str())
	}

	/// The `title` field, falling back to the first field.
	#[must_use]
	pub fn title(&self) -> &str {
		self.field("title")
			.or_else(|| self.fields.first().map(|field| field.text.as_str()))
			.unwrap_or("")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn title_prefers_the_title_field() {
		let record = ContentRecord::new("1", ContentKind::Places)
			.with_field("type", "Historic City")
			.with_field("title", "Alghero");
		assert_eq!(record.title(), "Alghero");
	}

	#[test]
	fn title_falls_back_to_first_field() {
		let record = ContentRecord::new("d1", ContentKind::Diary)
			.with_field("date", "2024-01-15")
			.with_field("notes", "Arrived in Alghero");
		assert_eq!(record.title(), "2024-01-15");
		assert_eq!(ContentRecord::new("x", ContentKind::Diary).title(), "");
	}

	#[test]
	fn builder_keeps_field_order() {
		let record = ContentRecord::new("1", ContentKind::Nature)
			.with_category(Category::Food)
			.with_field("title", "Seadas")
			.with_field("description", "Crispy pastry");
		let names: Vec<_> = record.fields.iter().map(|f| f.name.as_str()).collect();
		assert_eq!(names, ["title", "description"]);
		assert_eq!(record.category, Some(Category::Food));
	}
}
