//! Metadata extraction from the source document.

use std::sync::LazyLock;

use chrono::NaiveDate;
use scraper::{Html, Selector};
use tracing::warn;

use crate::error::MetadataError;
use crate::types::ArticleMetadata;

pub const UNTITLED: &str = "untitled article";
pub const UNKNOWN_AUTHOR: &str = "unknown author";
pub const FAILED_TITLE: &str = "failed to parse";
pub const FAILED_AUTHOR: &str = "unknown";

const OG_TITLE: &str = r#"meta[property="og:title"]"#;
const AUTHOR: &str = r#"meta[name="author"]"#;

static OG_TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse(OG_TITLE).expect("OG_TITLE selector should parse"));
static AUTHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse(AUTHOR).expect("AUTHOR selector should parse"));
static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").expect("title selector should parse"));

/// Extracts metadata, substituting fixed literals when a tag is unreadable.
pub fn metadata_or_fallback(doc: &Html, date: NaiveDate) -> (ArticleMetadata, Option<MetadataError>) {
	match extract_metadata(doc, date) {
		Ok(metadata) => (metadata, None),
		Err(err) => {
			warn!(target = "wxmd", error = %err, "metadata extraction failed, using fallback");
			let metadata = ArticleMetadata {
				title: FAILED_TITLE.to_string(),
				author: FAILED_AUTHOR.to_string(),
				date: format_date(date),
			};
			(metadata, Some(err))
		}
	}
}

/// Reads title and author, falling back to the `<title>` element and fixed
/// literals for absent tags. A tag that is present without a `content`
/// attribute is an error.
pub fn extract_metadata(doc: &Html, date: NaiveDate) -> Result<ArticleMetadata, MetadataError> {
	let title = match meta_content(doc, &OG_TITLE_SELECTOR, OG_TITLE)? {
		Some(title) => title,
		None => title_element(doc).unwrap_or_else(|| UNTITLED.to_string()),
	};
	let author = meta_content(doc, &AUTHOR_SELECTOR, AUTHOR)?.unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

	Ok(ArticleMetadata {
		title,
		author,
		date: format_date(date),
	})
}

pub(crate) fn format_date(date: NaiveDate) -> String {
	date.format("%Y-%m-%d").to_string()
}

fn meta_content(doc: &Html, selector: &Selector, raw: &'static str) -> Result<Option<String>, MetadataError> {
	let Some(tag) = doc.select(selector).next() else {
		return Ok(None);
	};
	tag.value()
		.attr("content")
		.map(|content| Some(content.to_string()))
		.ok_or(MetadataError::MissingContent { selector: raw })
}

fn title_element(doc: &Html) -> Option<String> {
	let title = doc.select(&TITLE_SELECTOR).next()?.text().collect::<String>();
	let title = title.trim();
	(!title.is_empty()).then(|| title.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn day() -> NaiveDate {
		NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
	}

	fn metadata(html: &str) -> (ArticleMetadata, Option<MetadataError>) {
		metadata_or_fallback(&Html::parse_document(html), day())
	}

	#[test]
	fn reads_og_title_before_title_element() {
		let (meta, err) = metadata(r#"<html><head><meta property="og:title" content="OG Title"><title>Doc Title</title><meta name="author" content="Ada"></head></html>"#);
		assert_eq!(meta.title, "OG Title");
		assert_eq!(meta.author, "Ada");
		assert_eq!(meta.date, "2024-03-09");
		assert!(err.is_none());
	}

	#[test]
	fn falls_back_to_title_element() {
		let (meta, _) = metadata("<html><head><title>  Doc Title </title></head><body></body></html>");
		assert_eq!(meta.title, "Doc Title");
		assert_eq!(meta.author, UNKNOWN_AUTHOR);
	}

	#[test]
	fn uses_literals_when_everything_is_missing() {
		let (meta, err) = metadata("<html><body><p>bare</p></body></html>");
		assert_eq!(meta.title, UNTITLED);
		assert_eq!(meta.author, UNKNOWN_AUTHOR);
		assert_eq!(meta.date, "2024-03-09");
		assert!(err.is_none());
	}

	#[test]
	fn empty_title_element_counts_as_missing() {
		let (meta, _) = metadata("<html><head><title></title></head></html>");
		assert_eq!(meta.title, UNTITLED);
	}

	#[test]
	fn og_title_without_content_falls_back_entirely() {
		let (meta, err) = metadata(r#"<html><head><meta property="og:title"><meta name="author" content="Ada"></head></html>"#);
		assert_eq!(meta.title, FAILED_TITLE);
		assert_eq!(meta.author, FAILED_AUTHOR);
		assert_eq!(meta.date, "2024-03-09");
		assert_eq!(err, Some(MetadataError::MissingContent { selector: OG_TITLE }));
	}

	#[test]
	fn author_without_content_is_reported() {
		let (meta, err) = metadata(r#"<html><head><meta property="og:title" content="T"><meta name="author"></head></html>"#);
		assert_eq!(meta.title, FAILED_TITLE);
		assert!(matches!(err, Some(MetadataError::MissingContent { selector: AUTHOR })));
	}
}
