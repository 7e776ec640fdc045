//! Article body lookup over the known page layouts.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::config::patterns;

/// Content selectors in priority order, compiled once.
static CONTENT_SELECTORS: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| {
	patterns()
		.content_selectors
		.selectors
		.iter()
		.map(|raw| (raw.as_str(), Selector::parse(raw).expect("content selector should parse")))
		.collect()
});

/// Returns the first element matching the content selectors, or `None` when
/// the page uses none of the known layouts.
pub fn locate_content(doc: &Html) -> Option<ElementRef<'_>> {
	CONTENT_SELECTORS.iter().find_map(|(raw, selector)| {
		let found = doc.select(selector).next();
		if found.is_some() {
			debug!(target = "wxmd", selector = raw, "content container matched");
		}
		found
	})
}
