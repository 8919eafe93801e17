//! Content sources consumed by the list views.
//!
//! A repository only ever hands out active rows of one kind, ordered by
//! title. Everything downstream treats the returned records as an immutable
//! snapshot.

mod error;
mod fixture;
mod json;

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use error::FetchError;
pub use fixture::FixtureRepository;
pub use json::JsonFileRepository;

use crate::types::{Category, ContentKind, ContentRecord, SearchField};

/// Lists the active records of a given kind.
pub trait ContentRepository: Send + Sync {
	/// Return every active record of `kind`, ordered by title ascending.
	///
	/// # Errors
	///
	/// Returns a [`FetchError`] when the backing source cannot be read or
	/// holds inconsistent rows.
	fn list_active(&self, kind: ContentKind) -> Result<Vec<ContentRecord>, FetchError>;
}

impl<T: ContentRepository + ?Sized> ContentRepository for Arc<T> {
	fn list_active(&self, kind: ContentKind) -> Result<Vec<ContentRecord>, FetchError> {
		(**self).list_active(kind)
	}
}

/// A stored row as it exists in a content source, before the active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRow {
	pub id: String,
	pub kind: ContentKind,
	#[serde(default)]
	pub category: Option<Category>,
	#[serde(default = "default_active")]
	pub active: bool,
	#[serde(default)]
	pub fields: Vec<SearchField>,
}

fn default_active() -> bool {
	true
}

impl ContentRow {
	#[must_use]
	pub fn new(id: impl Into<String>, kind: ContentKind) -> Self {
		Self {
			id: id.into(),
			kind,
			category: None,
			active: true,
			fields: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_category(mut self, category: Category) -> Self {
		self.category = Some(category);
		self
	}

	#[must_use]
	pub fn with_field(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
		self.fields.push(SearchField::new(name, text));
		self
	}

	#[must_use]
	pub fn inactive(mut self) -> Self {
		self.active = false;
		self
	}

	fn to_record(&self) -> ContentRecord {
		ContentRecord {
			id: self.id.clone(),
			kind: self.kind,
			category: self.category,
			fields: self.fields.clone(),
		}
	}
}

/// Select the active rows of `kind`, enforce id uniqueness and order the
/// result by title.
pub(crate) fn select_active<'a, I>(
	rows: I,
	kind: ContentKind,
) -> Result<Vec<ContentRecord>, FetchError>
where
	I: IntoIterator<Item = &'a ContentRow>,
{
	let mut seen = HashSet::new();
	let mut records = Vec::new();

	for row in rows {
		if row.kind != kind || !row.active {
			continue;
		}
		if !seen.insert(row.id.as_str()) {
			return Err(FetchError::DuplicateId {
				kind,
				id: row.id.clone(),
			});
		}
		records.push(row.to_record());
	}

	records.sort_by(|a, b| a.title().cmp(b.title()));
	Ok(records)
}
