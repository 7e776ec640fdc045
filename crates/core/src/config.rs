//! Pattern configuration loaded from `patterns.json`.

use std::sync::LazyLock;

use serde::Deserialize;

static PATTERNS: LazyLock<ArticlePatterns> = LazyLock::new(|| {
	let json = include_str!("../patterns.json");
	serde_json::from_str(json).expect("Failed to parse patterns.json")
});

pub(crate) fn patterns() -> &'static ArticlePatterns {
	&PATTERNS
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArticlePatterns {
	pub(crate) content_selectors: ContentSelectors,
	pub(crate) images: ImagePatterns,
	pub(crate) junk_text: JunkTextPatterns,
}

/// Candidate containers for the article body, highest priority first.
#[derive(Debug, Deserialize)]
pub(crate) struct ContentSelectors {
	pub(crate) selectors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImagePatterns {
	/// Attributes holding the real image address, checked in order.
	pub(crate) lazy_source_attributes: Vec<String>,
	pub(crate) presentation_attributes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JunkTextPatterns {
	pub(crate) exact: Vec<String>,
}
