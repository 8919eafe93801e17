use std::sync::Arc;

use anyhow::{Result, bail};
use isola::{ContentList, ContentRepository, ContentView, FixtureRepository, JsonFileRepository};
use log::info;

use crate::settings::{ContentSource, ResolvedConfig};

/// Opens one section, waits for its content and applies the requested tab
/// and query.
pub(crate) struct BrowseWorkflow {
	view: ContentView,
	config: ResolvedConfig,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let repository = repository_for(&config.source);
		let view = ContentView::new(config.section, repository);
		Self { view, config }
	}

	/// Run the workflow and hand back the settled list.
	pub(crate) fn run(mut self) -> Result<ContentList> {
		self.view.activate();
		if !self.view.wait_for_load(self.config.load_timeout) {
			bail!(
				"{} content did not load within {} ms",
				self.config.section,
				self.config.load_timeout.as_millis()
			);
		}

		self.view.set_category(self.config.category);
		self.view.set_query(self.config.query.as_str());
		info!(
			"{}: {} of {} records visible",
			self.config.section,
			self.view.visible_records().len(),
			self.view.list().records().len()
		);

		let list = self.view.list().clone();
		self.view.deactivate();
		Ok(list)
	}
}

fn repository_for(source: &ContentSource) -> Arc<dyn ContentRepository> {
	match source {
		ContentSource::Fixture => Arc::new(FixtureRepository::sardinia()),
		ContentSource::Json(path) => Arc::new(JsonFileRepository::new(path.clone())),
	}
}
