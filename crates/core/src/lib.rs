//! Article page to Markdown conversion.
//!
//! The pipeline parses a fetched article page, picks the body container used
//! by the page's layout, repairs lazy-loaded images, renders the body to
//! Markdown and cleans up the rendered text before wrapping it with a title
//! and attribution block.
//!
//! Every stage recovers locally. [`convert_article`] always returns a
//! complete [`ConversionResult`]; degraded stages are listed in its
//! `fallbacks`.

pub mod assemble;
pub mod cleanup;
mod config;
mod error;
pub mod images;
pub mod locator;
pub mod metadata;
mod pipeline;
pub mod render_markdown;
mod types;

pub use error::{MetadataError, RenderError};
pub use pipeline::{convert_article, convert_article_on};
pub use types::{ArticleMetadata, ConversionResult, Fallback};
