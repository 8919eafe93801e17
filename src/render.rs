//! Plain-text presentation of a content list.
//!
//! The renderer only looks at [`ListState`] plus the list's tab selection, so
//! the same state always produces the same lines.

use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

use crate::list::{ContentList, ListState};
use crate::types::{ContentKind, ContentRecord};

pub const DEFAULT_WIDTH: usize = 80;
const INDENT: &str = "  ";

/// Text printed while a load is in flight.
pub const LOADING_MESSAGE: &str = "Loading…";

/// Hint shown under the empty-state message.
pub const CLEAR_SEARCH_HINT: &str = "Clear the search to show everything again.";

/// Render the header, tab bar and body of `list` wrapped to `width` columns.
#[must_use]
pub fn render_plain(list: &ContentList, width: usize) -> Vec<String> {
	let descriptor = list.kind().descriptor();
	let mut lines = vec![
		descriptor.heading.to_string(),
		"=".repeat(descriptor.heading.width()),
	];
	lines.extend(wrap(descriptor.subtitle, width));

	if let Some(tabs) = tab_bar(list) {
		lines.push(String::new());
		lines.push(tabs);
	}

	lines.push(String::new());
	lines.extend(render_state(&list.render_state(), list.kind(), width));
	lines
}

/// Render just the body for a given state.
#[must_use]
pub fn render_state(state: &ListState<'_>, kind: ContentKind, width: usize) -> Vec<String> {
	match state {
		ListState::Loading => vec![LOADING_MESSAGE.to_string()],
		ListState::Empty { query } => vec![
			empty_message(kind, query),
			CLEAR_SEARCH_HINT.to_string(),
		],
		ListState::Records(records) => {
			let mut lines = Vec::new();
			for (index, record) in records.iter().enumerate() {
				if index > 0 {
					lines.push(String::new());
				}
				lines.extend(render_card(record, width));
			}
			lines
		}
	}
}

/// `No <noun> found matching "<query>"`.
#[must_use]
pub fn empty_message(kind: ContentKind, query: &str) -> String {
	format!(
		"No {} found matching \"{}\"",
		kind.descriptor().empty_noun,
		query
	)
}

/// One line listing the kind's tabs, the active one in brackets.
#[must_use]
pub fn tab_bar(list: &ContentList) -> Option<String> {
	let counts = list.category_counts();
	if counts.is_empty() {
		return None;
	}

	let tabs: Vec<String> = counts
		.into_iter()
		.map(|(category, count)| {
			let label = format!("{} ({count})", category.tab_label());
			if list.active_category() == Some(category) {
				format!("[{label}]")
			} else {
				format!(" {label} ")
			}
		})
		.collect();
	Some(tabs.join(" "))
}

/// Render a single record as a titled card.
#[must_use]
pub fn render_card(record: &ContentRecord, width: usize) -> Vec<String> {
	let title = card_title(record);
	let header = match record.field("type") {
		Some(badge) => format!("{title}  [{badge}]"),
		None => title.clone(),
	};

	let mut lines = vec![header, "-".repeat(title.width())];
	let body_width = width.saturating_sub(INDENT.len()).max(1);

	for field in &record.fields {
		if matches!(field.name.as_str(), "title" | "type" | "date") {
			continue;
		}
		match field_label(&field.name) {
			Some(label) => {
				lines.push(format!("{INDENT}{label}:"));
				lines.extend(
					wrap(&field.text, body_width.saturating_sub(INDENT.len()).max(1))
						.into_iter()
						.map(|line| format!("{INDENT}{INDENT}{line}")),
				);
			}
			None => lines.extend(
				wrap(&field.text, body_width)
					.into_iter()
					.map(|line| format!("{INDENT}{line}")),
			),
		}
	}
	lines
}

fn card_title(record: &ContentRecord) -> String {
	match (record.kind, record.field("date")) {
		(ContentKind::Diary, Some(date)) => long_date(date),
		_ => record.title().to_string(),
	}
}

fn field_label(name: &str) -> Option<&'static str> {
	match name {
		"history" => Some("Historical Background"),
		"fun_fact" => Some("Fun Fact"),
		_ => None,
	}
}

/// Format an ISO date as `Monday, January 15, 2024`. Unparseable input is
/// returned unchanged.
#[must_use]
pub fn long_date(date: &str) -> String {
	NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
		.map(|parsed| parsed.format("%A, %B %-d, %Y").to_string())
		.unwrap_or_else(|_| date.to_string())
}

/// Greedy word wrap measured in terminal columns. Words wider than `width`
/// get a line of their own.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
	let mut lines = Vec::new();
	let mut current = String::new();

	for word in text.split_whitespace() {
		if current.is_empty() {
			current.push_str(word);
		} else if current.width() + 1 + word.width() <= width {
			current.push(' ');
			current.push_str(word);
		} else {
			lines.push(std::mem::take(&mut current));
			current.push_str(word);
		}
	}

	if !current.is_empty() {
		lines.push(current);
	}
	lines
}
