//! Activation lifecycle for a single content section.
//!
//! All state transitions run on the caller's thread. The only asynchronous
//! step is the load issued by [`ContentView::activate`], which completes on a
//! worker thread and is applied by [`ContentView::pump`] or
//! [`ContentView::wait_for_load`].

use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, TryRecvError};
use std::time::Duration;

use log::debug;

use crate::list::{ContentList, ListState};
use crate::loader::{self, LoadOutcome};
use crate::repository::{ContentRepository, FetchError};
use crate::types::{Category, ContentKind, ContentRecord};

pub struct ContentView {
	repository: Arc<dyn ContentRepository>,
	list: ContentList,
	pending: Option<Receiver<LoadOutcome>>,
	active: bool,
}

impl ContentView {
	#[must_use]
	pub fn new(kind: ContentKind, repository: Arc<dyn ContentRepository>) -> Self {
		Self {
			repository,
			list: ContentList::new(kind),
			pending: None,
			active: false,
		}
	}

	#[must_use]
	pub fn kind(&self) -> ContentKind {
		self.list.kind()
	}

	#[must_use]
	pub fn list(&self) -> &ContentList {
		&self.list
	}

	#[must_use]
	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Mount the view: reset to an empty list and issue a single load.
	pub fn activate(&mut self) {
		self.list.cancel_load();
		self.list.reset();
		let ticket = self.list.begin_load();
		self.pending = Some(loader::spawn(
			Arc::clone(&self.repository),
			self.list.kind(),
			ticket,
		));
		self.active = true;
	}

	/// Unmount the view. A load still in flight is abandoned and its result
	/// will never touch this view's state.
	pub fn deactivate(&mut self) {
		if self.pending.take().is_some() {
			debug!("{} view deactivated with a load in flight", self.kind());
		}
		self.list.cancel_load();
		self.active = false;
	}

	pub fn set_category(&mut self, category: Option<Category>) {
		self.list.set_category(category);
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.list.set_query(query);
	}

	pub fn clear_query(&mut self) {
		self.list.clear_query();
	}

	#[must_use]
	pub fn visible_records(&self) -> Vec<&ContentRecord> {
		self.list.visible_records()
	}

	#[must_use]
	pub fn render_state(&self) -> ListState<'_> {
		self.list.render_state()
	}

	/// Apply a finished load, if any, without blocking. Returns `true` when
	/// the list changed.
	pub fn pump(&mut self) -> bool {
		let Some(rx) = self.pending.as_ref() else {
			return false;
		};

		match rx.try_recv() {
			Ok(outcome) => self.complete(outcome),
			Err(TryRecvError::Empty) => false,
			Err(TryRecvError::Disconnected) => self.worker_vanished(),
		}
	}

	/// Block until the pending load completes or `timeout` elapses. Returns
	/// `true` when a completion was applied.
	pub fn wait_for_load(&mut self, timeout: Duration) -> bool {
		let Some(rx) = self.pending.as_ref() else {
			return false;
		};

		match rx.recv_timeout(timeout) {
			Ok(outcome) => self.complete(outcome),
			Err(RecvTimeoutError::Timeout) => false,
			Err(RecvTimeoutError::Disconnected) => self.worker_vanished(),
		}
	}

	fn complete(&mut self, outcome: LoadOutcome) -> bool {
		self.pending = None;
		self.list.finish_load(outcome.ticket, outcome.result)
	}

	fn worker_vanished(&mut self) -> bool {
		self.pending = None;
		// The worker died without reporting; finish the current load as failed.
		let ticket = self.list.current_ticket();
		self.list.finish_load(
			ticket,
			Err(FetchError::Unavailable("load worker exited".into())),
		)
	}
}
