//! Core crate exports for the `isola` travel guide.
//!
//! Every section of the guide is a [`ContentList`]: a snapshot of records
//! from a [`ContentRepository`], an optional category tab and a free-text
//! query. [`ContentView`] adds the activation lifecycle and background
//! loading on top.

pub mod app_dirs;
pub mod list;
pub mod loader;
pub mod logging;
pub mod render;
pub mod repository;
pub mod search;
pub mod sections;
pub mod types;
pub mod view;

pub use list::{ContentList, ListState, LoadTicket};
pub use repository::{
	ContentRepository, ContentRow, FetchError, FixtureRepository, JsonFileRepository,
};
pub use search::Query;
pub use types::{Category, ContentKind, ContentRecord, KindDescriptor, SearchField};
pub use view::ContentView;
