//! Public types returned by article conversion.

use serde::Serialize;

use crate::error::{MetadataError, RenderError};

/// Title, author and conversion date of an article. Every field is always set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMetadata {
	pub title: String,
	pub author: String,
	/// Calendar date of the conversion, `YYYY-MM-DD`.
	pub date: String,
}

/// Result of converting one article page.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
	pub title: String,
	pub author: String,
	pub date: String,
	/// Serialized HTML of the located article body, or a fixed placeholder.
	pub content: String,
	/// Final Markdown document, always starting with `# {title}`.
	pub markdown: String,
	/// Recovered failures, in the order they occurred.
	#[serde(skip)]
	pub fallbacks: Vec<Fallback>,
}

impl ConversionResult {
	/// `true` when the article body was found and rendered without fallback.
	pub fn is_complete(&self) -> bool {
		!self.fallbacks.iter().any(|f| matches!(f, Fallback::ContentNotFound | Fallback::Render(_)))
	}
}

/// A stage that substituted fallback output instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
	Metadata(MetadataError),
	ContentNotFound,
	Render(RenderError),
}

impl std::fmt::Display for Fallback {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Fallback::Metadata(err) => write!(f, "metadata: {err}"),
			Fallback::ContentNotFound => write!(f, "content not found"),
			Fallback::Render(err) => write!(f, "render: {err}"),
		}
	}
}
