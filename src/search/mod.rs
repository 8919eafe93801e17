//! Free-text filtering over content records.
//!
//! Matching is a plain case-insensitive substring test across every
//! searchable field of a record. There is no scoring: results always keep the
//! order of the input.

mod query;

pub use query::Query;

use crate::types::{Category, ContentRecord};

/// Restrict `records` to those in `category`. `None` leaves the input as is.
pub fn partition<'a, I>(records: I, category: Option<Category>) -> Vec<&'a ContentRecord>
where
	I: IntoIterator<Item = &'a ContentRecord>,
{
	records
		.into_iter()
		.filter(|record| category.is_none_or(|category| record.category == Some(category)))
		.collect()
}

/// Keep the records matching `raw_query`, preserving input order.
pub fn filter<'a, I>(records: I, raw_query: &str) -> Vec<&'a ContentRecord>
where
	I: IntoIterator<Item = &'a ContentRecord>,
{
	let query = Query::parse(raw_query);
	if query.is_empty() {
		return records.into_iter().collect();
	}

	records
		.into_iter()
		.filter(|record| query.matches(record))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::ContentKind;

	fn nature(id: &str, title: &str, category: Category) -> ContentRecord {
		ContentRecord::new(id, ContentKind::Nature)
			.with_category(category)
			.with_field("title", title)
	}

	#[test]
	fn partition_keeps_only_matching_category() {
		let records = vec![
			nature("1", "Seadas", Category::Food),
			nature("2", "Flamingos", Category::Fauna),
			nature("3", "Bottarga", Category::Food),
		];
		let ids: Vec<_> = partition(&records, Some(Category::Food))
			.into_iter()
			.map(|r| r.id.as_str())
			.collect();
		assert_eq!(ids, ["1", "3"]);
	}

	#[test]
	fn partition_without_category_is_identity() {
		let records = vec![
			nature("1", "Seadas", Category::Food),
			nature("2", "Flamingos", Category::Fauna),
		];
		assert_eq!(partition(&records, None).len(), 2);
	}

	#[test]
	fn filter_preserves_order() {
		let records = vec![
			nature("1", "Wild Myrtle", Category::Vegetation),
			nature("2", "Cork Oak", Category::Vegetation),
			nature("3", "Wild Fennel", Category::Vegetation),
		];
		let ids: Vec<_> = filter(&records, "wild")
			.into_iter()
			.map(|r| r.id.as_str())
			.collect();
		assert_eq!(ids, ["1", "3"]);
	}
}
