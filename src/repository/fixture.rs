use super::{ContentRepository, ContentRow, FetchError, select_active};
use crate::types::{Category, ContentKind, ContentRecord};

/// In-memory content source used for offline browsing and tests.
#[derive(Debug, Clone, Default)]
pub struct FixtureRepository {
	rows: Vec<ContentRow>,
}

impl FixtureRepository {
	#[must_use]
	pub fn new(rows: Vec<ContentRow>) -> Self {
		Self { rows }
	}

	/// The built-in guide content.
	#[must_use]
	pub fn sardinia() -> Self {
		let mut rows = Vec::new();
		rows.extend(nature_rows(Category::Food, FOODS));
		rows.extend(nature_rows(Category::Vegetation, VEGETATION));
		rows.extend(nature_rows(Category::Fauna, FAUNA));
		rows.extend(PLACES.iter().map(|(id, title, kind, history, fun_fact)| {
			ContentRow::new(*id, ContentKind::Places)
				.with_field("title", *title)
				.with_field("type", *kind)
				.with_field("history", *history)
				.with_field("fun_fact", *fun_fact)
		}));
		rows.extend(DIARY.iter().map(|(id, date, notes)| {
			ContentRow::new(*id, ContentKind::Diary)
				.with_field("date", *date)
				.with_field("notes", *notes)
		}));
		Self { rows }
	}

	#[must_use]
	pub fn rows(&self) -> &[ContentRow] {
		&self.rows
	}
}

impl ContentRepository for FixtureRepository {
	fn list_active(&self, kind: ContentKind) -> Result<Vec<ContentRecord>, FetchError> {
		select_active(&self.rows, kind)
	}
}

fn nature_rows(
	category: Category,
	items: &'static [(&'static str, &'static str, &'static str)],
) -> impl Iterator<Item = ContentRow> {
	items.iter().map(move |(id, title, description)| {
		ContentRow::new(*id, ContentKind::Nature)
			.with_category(category)
			.with_field("title", *title)
			.with_field("description", *description)
	})
}

type NatureItem = (&'static str, &'static str, &'static str);
type PlaceItem = (
	&'static str,
	&'static str,
	&'static str,
	&'static str,
	&'static str,
);

const FOODS: &[NatureItem] = &[
	(
		"food-pane-carasau",
		"Pane Carasau",
		"Traditional crispy flatbread, thin as paper and incredibly versatile. Often called 'carta da musica' (music paper) for its thinness.",
	),
	(
		"food-pecorino-sardo",
		"Pecorino Sardo",
		"Aged sheep's milk cheese with a distinctive sharp flavor. One of Italy's most prized cheeses with DOP protection.",
	),
	(
		"food-culurgiones",
		"Culurgiones",
		"Hand-pleated pasta dumplings filled with potato, cheese, and mint. The pleating technique is UNESCO-recognized cultural heritage.",
	),
	(
		"food-seadas",
		"Seadas",
		"Crispy pastry filled with fresh cheese and lemon zest, drizzled with honey. A perfect sweet ending to any meal.",
	),
	(
		"food-bottarga",
		"Bottarga",
		"Cured fish roe, often called 'Mediterranean caviar'. Grated over pasta or eaten with olive oil and bread.",
	),
];

const VEGETATION: &[NatureItem] = &[
	(
		"veg-macchia",
		"Mediterranean Macchia",
		"Dense shrubland covering much of Sardinia. Contains aromatic herbs like rosemary, myrtle, and juniper that perfume the air.",
	),
	(
		"veg-cork-oak",
		"Cork Oak (Quercus suber)",
		"Iconic trees with thick, spongy bark harvested for cork production. These ancient trees can live for several centuries.",
	),
	(
		"veg-wild-myrtle",
		"Wild Myrtle",
		"Aromatic shrub used to make Mirto liqueur, Sardinia's traditional digestif. The purple berries ripen in autumn.",
	),
	(
		"veg-prickly-pear",
		"Prickly Pear Cactus",
		"Widespread succulent with edible fruits. The colorful flowers and fruits add vibrant colors to the landscape.",
	),
	(
		"veg-wild-fennel",
		"Wild Fennel",
		"Aromatic herb growing wild across the island. Used in traditional cooking and recognizable by its feathery leaves.",
	),
];

const FAUNA: &[NatureItem] = &[
	(
		"fauna-mouflon",
		"Mouflon (Ovis orientalis)",
		"Wild sheep endemic to Sardinia and Corsica. These agile animals roam the mountainous regions with their distinctive curved horns.",
	),
	(
		"fauna-wild-boar",
		"Wild Boar (Sus scrofa)",
		"Intelligent and adaptable mammals found throughout Sardinia's forests. They play a crucial role in the island's ecosystem.",
	),
	(
		"fauna-flamingos",
		"Flamingos",
		"Pink flamingos gather in large flocks in coastal lagoons, especially around Cagliari. A spectacular sight during migration seasons.",
	),
	(
		"fauna-sardinian-deer",
		"Sardinian Deer",
		"Endemic subspecies that was nearly extinct but has recovered thanks to conservation efforts. Now thriving in protected areas.",
	),
	(
		"fauna-monk-seal",
		"Mediterranean Monk Seal",
		"One of the world's most endangered marine mammals, occasionally spotted in remote coastal caves around Sardinia.",
	),
];

const PLACES: &[PlaceItem] = &[
	(
		"place-alghero",
		"Alghero",
		"Historic City",
		"Founded by the Genoese in 1102, later ruled by Catalans. Known as 'Little Barcelona' for its Catalan heritage and architecture.",
		"The city walls were built by the Spanish in the 16th century and are still largely intact today.",
	),
	(
		"place-costa-smeralda",
		"Costa Smeralda",
		"Beach Resort",
		"Developed in the 1960s by Prince Karim Aga Khan IV as an exclusive resort destination for the international jet set.",
		"Building regulations require all structures to blend with the natural landscape - no building can be taller than the surrounding trees.",
	),
	(
		"place-su-nuraxi",
		"Su Nuraxi, Barumini",
		"Archaeological Site",
		"Built around 1500 BCE by the Nuragic civilization. This UNESCO World Heritage site represents one of Europe's finest prehistoric monuments.",
		"The central tower originally stood 18-20 meters high and the complex housed up to 200 people.",
	),
	(
		"place-cagliari",
		"Cagliari",
		"Capital City",
		"Founded by Phoenicians around 8th century BCE. The historic Castello district preserves medieval and Renaissance architecture.",
		"The city's Poetto beach stretches for 8 kilometers and is one of the longest urban beaches in Europe.",
	),
	(
		"place-cala-goloritze",
		"Cala Goloritze",
		"Natural Monument",
		"This pristine beach was formed by a landslide in 1962. Now protected as a natural monument since 1995.",
		"The 143-meter limestone spire next to the beach is a popular destination for rock climbers from around the world.",
	),
	(
		"place-tharros",
		"Tharros",
		"Ancient Ruins",
		"Ancient Phoenician city founded in 8th century BCE, later expanded by Romans. Abandoned in 11th century due to Saracen raids.",
		"The site contains one of the best-preserved Phoenician tophet (sacred burial grounds) in the Mediterranean.",
	),
	(
		"place-orgosolo",
		"Orgosolo",
		"Mountain Village",
		"Traditional pastoral village famous for its murals depicting social and political themes, started in the 1960s.",
		"The village has over 150 murals painted on building walls, making it an open-air art gallery.",
	),
	(
		"place-maddalena",
		"Maddalena Archipelago",
		"National Park",
		"Strategic naval base for centuries. Garibaldi lived in exile on Caprera island from 1855 until his death in 1882.",
		"The pink sand beach of Budelli gets its color from microscopic fragments of coral and shells.",
	),
	(
		"place-sassari",
		"Sassari",
		"University City",
		"Free commune in medieval times, later ruled by Pisans and Aragonese. Founded its university in 1562, one of Italy's oldest.",
		"The Cavalcata Sarda festival in May features over 3,000 participants in traditional costumes from across Sardinia.",
	),
];

const DIARY: &[(&str, &str, &str)] = &[
	(
		"diary-1",
		"2024-01-15",
		"Arrived in Alghero today! The Catalan architecture is stunning, and the sunset from the city walls was breathtaking. Had my first taste of culurgiones at a local trattoria - absolutely delicious!",
	),
	(
		"diary-2",
		"2024-01-16",
		"Visited Costa Smeralda. The emerald waters truly live up to the name. Spent the afternoon at Cala di Volpe beach - the sand is incredibly soft and the water crystal clear.",
	),
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sardinia_has_every_section() {
		let repo = FixtureRepository::sardinia();
		assert_eq!(repo.list_active(ContentKind::Nature).unwrap().len(), 15);
		assert_eq!(repo.list_active(ContentKind::Places).unwrap().len(), 9);
		assert_eq!(repo.list_active(ContentKind::Diary).unwrap().len(), 2);
	}

	#[test]
	fn places_are_sorted_by_title() {
		let places = FixtureRepository::sardinia()
			.list_active(ContentKind::Places)
			.unwrap();
		let titles: Vec<_> = places.iter().map(ContentRecord::title).collect();
		let mut sorted = titles.clone();
		sorted.sort_unstable();
		assert_eq!(titles, sorted);
		assert_eq!(titles.first(), Some(&"Alghero"));
	}

	#[test]
	fn diary_orders_chronologically() {
		let entries = FixtureRepository::sardinia()
			.list_active(ContentKind::Diary)
			.unwrap();
		assert_eq!(entries[0].field("date"), Some("2024-01-15"));
		assert_eq!(entries[1].field("date"), Some("2024-01-16"));
	}

	#[test]
	fn every_nature_row_has_a_category() {
		let repo = FixtureRepository::sardinia();
		assert!(
			repo.rows()
				.iter()
				.filter(|row| row.kind == ContentKind::Nature)
				.all(|row| row.category.is_some())
		);
	}
}
