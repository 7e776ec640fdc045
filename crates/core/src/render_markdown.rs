//! HTML-to-Markdown rendering of the normalized article body.

use std::sync::LazyLock;

use htmd::HtmlToMarkdown;
use htmd::options::{BulletListMarker, HeadingStyle, Options};

use crate::error::RenderError;

static CONVERTER: LazyLock<HtmlToMarkdown> = LazyLock::new(|| {
	HtmlToMarkdown::builder()
		.skip_tags(vec!["script", "style"])
		.options(Options {
			heading_style: HeadingStyle::Atx,
			bullet_list_marker: BulletListMarker::Dash,
			..Default::default()
		})
		.build()
});

/// Renders serialized article HTML. Output has not been through cleanup yet.
pub fn render_markdown(html: &str) -> Result<String, RenderError> {
	Ok(CONVERTER.convert(html)?)
}
