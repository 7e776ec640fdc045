//! Recoverable failures raised inside the conversion pipeline.
//!
//! None of these escape [`convert_article`](crate::convert_article). Each is
//! caught at its stage boundary, replaced with fallback output, and recorded
//! on the result as a [`Fallback`](crate::Fallback).

use thiserror::Error;

/// Metadata tag was found but could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
	#[error("meta tag `{selector}` has no content attribute")]
	MissingContent { selector: &'static str },
}

/// HTML-to-Markdown conversion failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
	#[error("markdown conversion failed: {0}")]
	Convert(String),
}

impl From<std::io::Error> for RenderError {
	fn from(err: std::io::Error) -> Self {
		RenderError::Convert(err.to_string())
	}
}
