//! Orchestration for the conversion stages.

use chrono::{Local, NaiveDate};
use ego_tree::NodeId;
use scraper::{ElementRef, Html};
use tracing::{info, warn};

use crate::assemble::{MISSING_CONTENT_HTML, assemble_document, missing_content_document, render_failure_document};
use crate::cleanup::clean_markdown;
use crate::error::RenderError;
use crate::images::normalize_images;
use crate::locator::locate_content;
use crate::metadata::metadata_or_fallback;
use crate::render_markdown::render_markdown;
use crate::types::{ArticleMetadata, ConversionResult, Fallback};

/// Turns serialized body HTML into raw Markdown.
type Renderer = fn(&str) -> Result<String, RenderError>;

#[derive(Debug)]
struct ExtractedArticle {
	metadata: ArticleMetadata,
	/// Serialized body after image normalization.
	content: Option<String>,
	fallbacks: Vec<Fallback>,
}

/// Converts a fetched article page, stamping today's local date.
pub fn convert_article(html: &str, url: &str) -> ConversionResult {
	convert_article_on(html, url, Local::now().date_naive())
}

/// Converts a fetched article page. `url` is only used for the source link.
///
/// Never fails: missing content and rendering errors produce a degraded
/// document and are listed in [`ConversionResult::fallbacks`].
pub fn convert_article_on(html: &str, url: &str, date: NaiveDate) -> ConversionResult {
	convert_with(html, url, date, render_markdown)
}

fn convert_with(html: &str, url: &str, date: NaiveDate, render: Renderer) -> ConversionResult {
	info!(target = "wxmd", %url, bytes = html.len(), "converting article");
	let ExtractedArticle {
		metadata,
		content,
		mut fallbacks,
	} = extract(html, date);

	let Some(content) = content else {
		warn!(target = "wxmd", %url, "article body not found");
		fallbacks.push(Fallback::ContentNotFound);
		return ConversionResult {
			markdown: missing_content_document(&metadata.title),
			content: MISSING_CONTENT_HTML.to_string(),
			title: metadata.title,
			author: metadata.author,
			date: metadata.date,
			fallbacks,
		};
	};

	let markdown = match render(&content) {
		Ok(raw) => assemble_document(&metadata, url, &clean_markdown(&raw)),
		Err(err) => {
			warn!(target = "wxmd", %url, error = %err, "markdown rendering failed");
			let markdown = render_failure_document(&metadata.title, &err);
			fallbacks.push(Fallback::Render(err));
			markdown
		}
	};

	ConversionResult {
		title: metadata.title,
		author: metadata.author,
		date: metadata.date,
		content,
		markdown,
		fallbacks,
	}
}

fn extract(html: &str, date: NaiveDate) -> ExtractedArticle {
	let doc = Html::parse_document(html);
	let (metadata, metadata_error) = metadata_or_fallback(&doc, date);
	let content = locate_content(&doc).map(|el| el.id()).and_then(|id| serialize_normalized(doc, id));

	ExtractedArticle {
		metadata,
		content,
		fallbacks: metadata_error.map(Fallback::Metadata).into_iter().collect(),
	}
}

/// Normalizes images below `content`, then serializes that element.
fn serialize_normalized(doc: Html, content: NodeId) -> Option<String> {
	let doc = normalize_images(doc, content);
	doc.tree.get(content).and_then(ElementRef::wrap).map(|el| el.html())
}
