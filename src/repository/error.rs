use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ContentKind;

/// Failure raised by a [`ContentRepository`](super::ContentRepository) while
/// listing records.
#[derive(Debug, Error)]
pub enum FetchError {
	/// The backing file could not be read.
	#[error("failed to read content from {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The backing file was read but did not contain valid rows.
	#[error("malformed content in {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// Two active rows of the same kind share an id.
	#[error("duplicate id '{id}' in {kind} content")]
	DuplicateId { kind: ContentKind, id: String },

	/// The source refused or could not serve the request.
	#[error("content source unavailable: {0}")]
	Unavailable(String),
}
