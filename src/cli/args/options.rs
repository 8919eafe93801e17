use clap::ValueEnum;

/// Sections accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SectionArg {
	Nature,
	Places,
	Diary,
}

impl SectionArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			SectionArg::Nature => "nature",
			SectionArg::Places => "places",
			SectionArg::Diary => "diary",
		}
	}
}

/// Category tabs accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum CategoryArg {
	Food,
	Vegetation,
	Fauna,
}

impl CategoryArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			CategoryArg::Food => "food",
			CategoryArg::Vegetation => "vegetation",
			CategoryArg::Fauna => "fauna",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
