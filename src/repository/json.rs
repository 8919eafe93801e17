use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::{ContentRepository, ContentRow, FetchError, select_active};
use crate::types::{ContentKind, ContentRecord};

/// Reads rows from a JSON document on every request.
///
/// The document is an array of [`ContentRow`] objects. The file is re-read
/// per call so that edits show up on the next view activation.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
	path: PathBuf,
}

impl JsonFileRepository {
	#[must_use]
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_rows(&self) -> Result<Vec<ContentRow>, FetchError> {
		let contents = fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
			path: self.path.clone(),
			source,
		})?;
		serde_json::from_str(&contents).map_err(|source| FetchError::Parse {
			path: self.path.clone(),
			source,
		})
	}
}

impl ContentRepository for JsonFileRepository {
	fn list_active(&self, kind: ContentKind) -> Result<Vec<ContentRecord>, FetchError> {
		let rows = self.read_rows()?;
		debug!(
			"read {} rows from {} for {kind}",
			rows.len(),
			self.path.display()
		);
		select_active(&rows, kind)
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::NamedTempFile;

	use super::*;
	use crate::types::Category;

	fn write_json(contents: &str) -> NamedTempFile {
		let mut file = NamedTempFile::new().expect("tempfile");
		file.write_all(contents.as_bytes()).expect("write");
		file
	}

	#[test]
	fn lists_active_rows_sorted_by_title() {
		let file = write_json(
			r#"[
				{"id": "2", "kind": "nature", "category": "fauna",
				 "fields": [{"name": "title", "text": "Mouflon"}]},
				{"id": "1", "kind": "nature", "category": "food",
				 "fields": [{"name": "title", "text": "Pecorino Sardo"}]},
				{"id": "3", "kind": "nature", "category": "food", "active": false,
				 "fields": [{"name": "title", "text": "Bottarga"}]}
			]"#,
		);

		let repo = JsonFileRepository::new(file.path());
		let records = repo.list_active(ContentKind::Nature).expect("list");
		let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
		assert_eq!(ids, ["2", "1"]);
		assert_eq!(records[0].category, Some(Category::Fauna));
	}

	#[test]
	fn missing_file_is_an_io_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let repo = JsonFileRepository::new(dir.path().join("absent.json"));
		let err = repo.list_active(ContentKind::Places).unwrap_err();
		assert!(matches!(err, FetchError::Io { .. }));
	}

	#[test]
	fn malformed_json_is_a_parse_error() {
		let file = write_json("{ not json");
		let repo = JsonFileRepository::new(file.path());
		let err = repo.list_active(ContentKind::Places).unwrap_err();
		assert!(matches!(err, FetchError::Parse { .. }));
		assert!(err.to_string().contains("malformed content"));
	}

	#[test]
	fn unknown_category_is_a_parse_error() {
		let file = write_json(r#"[{"id": "1", "kind": "nature", "category": "beaches"}]"#);
		let repo = JsonFileRepository::new(file.path());
		assert!(matches!(
			repo.list_active(ContentKind::Nature),
			Err(FetchError::Parse { .. })
		));
	}
}
