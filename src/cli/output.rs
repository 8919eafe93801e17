use anyhow::Result;
use isola::{ContentList, render, sections};
use serde_json::json;

/// Print the rendered list as plain text cards.
pub(crate) fn print_plain(list: &ContentList, width: usize) {
	for line in render::render_plain(list, width) {
		println!("{line}");
	}
}

/// Format the visible records and the view state as a JSON string.
pub(crate) fn format_list_json(list: &ContentList) -> Result<String> {
	let visible = list.visible_records();
	let payload = json!({
		"section": list.kind(),
		"category": list.active_category(),
		"query": list.query(),
		"loading": list.is_loading(),
		"count": visible.len(),
		"records": visible,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the list.
pub(crate) fn print_json(list: &ContentList) -> Result<()> {
	println!("{}", format_list_json(list)?);
	Ok(())
}

/// Print the landing page: the site title and one entry per section.
pub(crate) fn print_sections() {
	println!("{}", sections::SITE_TITLE);
	println!("{}", sections::SITE_TAGLINE);
	for section in sections::all() {
		println!();
		println!("{} ({})", section.title, section.kind);
		println!("  {}", section.description);
		println!("  -> {}", section.action);
	}
}

#[cfg(test)]
mod tests {
	use isola::{Category, ContentKind, ContentRecord};
	use serde_json::Value;

	use super::*;

	fn nature_list() -> ContentList {
		ContentList::with_records(
			ContentKind::Nature,
			vec![
				ContentRecord::new("1", ContentKind::Nature)
					.with_category(Category::Food)
					.with_field("title", "Pecorino Sardo"),
				ContentRecord::new("2", ContentKind::Nature)
					.with_category(Category::Fauna)
					.with_field("title", "Mouflon"),
			],
		)
	}

	#[test]
	fn json_includes_visible_records_only() {
		let mut list = nature_list();
		list.set_category(Some(Category::Fauna));
		list.set_query("mou");

		let json = format_list_json(&list).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["section"], "nature");
		assert_eq!(value["category"], "fauna");
		assert_eq!(value["query"], "mou");
		assert_eq!(value["count"], 1);
		assert_eq!(value["records"][0]["id"], "2");
		assert_eq!(value["records"][0]["fields"][0]["text"], "Mouflon");
	}

	#[test]
	fn json_reports_null_category_for_untabbed_lists() {
		let list = ContentList::new(ContentKind::Places);
		let value: Value =
			serde_json::from_str(&format_list_json(&list).expect("json")).expect("parse");
		assert_eq!(value["category"], Value::Null);
		assert_eq!(value["count"], 0);
	}
}
