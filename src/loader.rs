//! Background loading of content snapshots.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::debug;

use crate::list::LoadTicket;
use crate::repository::{ContentRepository, FetchError};
use crate::types::{ContentKind, ContentRecord};

/// Completion message sent back by a load worker.
#[derive(Debug)]
pub struct LoadOutcome {
	pub ticket: LoadTicket,
	pub kind: ContentKind,
	pub result: Result<Vec<ContentRecord>, FetchError>,
}

/// Run `repository.list_active(kind)` on a worker thread.
///
/// Exactly one [`LoadOutcome`] is sent on the returned receiver. Dropping the
/// receiver before then is how a caller abandons the load.
pub fn spawn(
	repository: Arc<dyn ContentRepository>,
	kind: ContentKind,
	ticket: LoadTicket,
) -> Receiver<LoadOutcome> {
	let (result_tx, result_rx) = mpsc::channel();

	thread::spawn(move || {
		let result = repository.list_active(kind);
		let outcome = LoadOutcome {
			ticket,
			kind,
			result,
		};
		if result_tx.send(outcome).is_err() {
			debug!(
				"{kind} load #{} finished after its view went away",
				ticket.generation()
			);
		}
	});

	result_rx
}
