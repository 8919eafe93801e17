//! The filterable content list behind every section of the guide.
//!
//! A [`ContentList`] owns an immutable snapshot of records, an optional active
//! category and the raw query text. [`ContentList::visible_records`] derives
//! the visible subset on demand; nothing is cached, so every state change is
//! reflected by the next call.

use log::{debug, warn};

use crate::repository::FetchError;
use crate::search;
use crate::types::{Category, ContentKind, ContentRecord};

/// Identifies one load issued by [`ContentList::begin_load`].
///
/// Only the most recently issued ticket is honoured when a load completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
	#[must_use]
	pub const fn generation(self) -> u64 {
		self.0
	}
}

/// What the presentation layer should draw for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState<'a> {
	/// A load is in flight: draw neither records nor the empty-state message.
	Loading,
	/// Nothing is visible. Offer [`ContentList::clear_query`] as the way out,
	/// whatever the reason for the empty result.
	Empty { query: &'a str },
	Records(Vec<&'a ContentRecord>),
}

#[derive(Debug, Clone)]
pub struct ContentList {
	kind: ContentKind,
	records: Vec<ContentRecord>,
	active_category: Option<Category>,
	query: String,
	loading: bool,
	generation: u64,
}

impl ContentList {
	/// An empty, idle list for `kind`, on the kind's default tab.
	#[must_use]
	pub fn new(kind: ContentKind) -> Self {
		Self {
			kind,
			records: Vec::new(),
			active_category: kind.default_category(),
			query: String::new(),
			loading: false,
			generation: 0,
		}
	}

	/// A list pre-populated with `records`, e.g. for offline use.
	#[must_use]
	pub fn with_records(kind: ContentKind, records: Vec<ContentRecord>) -> Self {
		Self {
			records,
			..Self::new(kind)
		}
	}

	#[must_use]
	pub fn kind(&self) -> ContentKind {
		self.kind
	}

	#[must_use]
	pub fn records(&self) -> &[ContentRecord] {
		&self.records
	}

	#[must_use]
	pub fn active_category(&self) -> Option<Category> {
		self.active_category
	}

	/// The query exactly as last set, untrimmed.
	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Records in the active category that match the query, in load order.
	#[must_use]
	pub fn visible_records(&self) -> Vec<&ContentRecord> {
		let partitioned = search::partition(&self.records, self.active_category);
		search::filter(partitioned, &self.query)
	}

	/// Switch tabs. The query is kept so a search carries across categories.
	pub fn set_category(&mut self, category: Option<Category>) {
		self.active_category = category;
	}

	/// Replace the query verbatim; trimming only happens when filtering.
	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	pub fn clear_query(&mut self) {
		self.query.clear();
	}

	/// Number of records under each of the kind's tabs, ignoring the query.
	#[must_use]
	pub fn category_counts(&self) -> Vec<(Category, usize)> {
		self.kind
			.descriptor()
			.categories
			.iter()
			.map(|&category| {
				let count = self
					.records
					.iter()
					.filter(|record| record.category == Some(category))
					.count();
				(category, count)
			})
			.collect()
	}

	/// Mark a load as in flight and clear the query for the new activation.
	pub fn begin_load(&mut self) -> LoadTicket {
		self.generation += 1;
		self.loading = true;
		self.query.clear();
		debug!("{} list: load #{} issued", self.kind, self.generation);
		LoadTicket(self.generation)
	}

	/// Apply a completed load. Returns `false` when `ticket` is stale and the
	/// completion was ignored.
	///
	/// A failure is logged and otherwise swallowed: the records keep their
	/// previous value and the list reads as empty once loading ends.
	pub fn finish_load(
		&mut self,
		ticket: LoadTicket,
		result: Result<Vec<ContentRecord>, FetchError>,
	) -> bool {
		if !self.is_current(ticket) {
			debug!(
				"{} list: dropping stale load #{} (latest #{})",
				self.kind, ticket.0, self.generation
			);
			return false;
		}

		self.loading = false;
		match result {
			Ok(records) => {
				debug!("{} list: loaded {} records", self.kind, records.len());
				self.records = records;
			}
			Err(err) => warn!("{} list: failed to load content: {err}", self.kind),
		}
		true
	}

	/// Forget any in-flight load so a late completion is ignored.
	pub fn cancel_load(&mut self) {
		if self.loading {
			debug!("{} list: load #{} cancelled", self.kind, self.generation);
		}
		self.generation += 1;
		self.loading = false;
	}

	/// Ticket of the most recently issued load.
	#[must_use]
	pub fn current_ticket(&self) -> LoadTicket {
		LoadTicket(self.generation)
	}

	#[must_use]
	pub fn is_current(&self, ticket: LoadTicket) -> bool {
		ticket.0 == self.generation
	}

	/// Return the list to its freshly-mounted state. The generation counter
	/// survives so tickets issued before the reset stay stale.
	pub(crate) fn reset(&mut self) {
		self.records.clear();
		self.active_category = self.kind.default_category();
		self.query.clear();
		self.loading = false;
	}

	#[must_use]
	pub fn render_state(&self) -> ListState<'_> {
		if self.loading {
			return ListState::Loading;
		}

		let visible = self.visible_records();
		if visible.is_empty() {
			ListState::Empty { query: &self.query }
		} else {
			ListState::Records(visible)
		}
	}
}
