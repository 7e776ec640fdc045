//! Final document layout.

use crate::types::ArticleMetadata;

/// `content` value used when no article body was found.
pub const MISSING_CONTENT_HTML: &str = "<p>Unable to parse the article body; the article may use a special layout or has been deleted.</p>";
const MISSING_CONTENT_NOTICE: &str = "> Unable to parse the article body, please check that the link is valid.";

/// Wraps a cleaned body with the title heading and attribution block.
///
/// Newlines around `body` are dropped so the separator is followed by exactly
/// one blank line and the document ends with one newline. Indentation of the
/// first line is kept.
pub fn assemble_document(metadata: &ArticleMetadata, url: &str, body: &str) -> String {
	let body = body.trim_matches('\n');
	format!(
		"# {title}\n\n> author: {author}\n> date: {date}\n> source: [{url}]({url})\n\n---\n\n{body}\n",
		title = metadata.title,
		author = metadata.author,
		date = metadata.date,
	)
}

/// Document returned when the page has none of the known content layouts.
pub fn missing_content_document(title: &str) -> String {
	format!("# {title}\n\n{MISSING_CONTENT_NOTICE}")
}

/// Document returned when Markdown rendering failed.
pub fn render_failure_document(title: &str, error: &dyn std::fmt::Display) -> String {
	format!("# {title}\n\nconversion error: {error}")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn meta() -> ArticleMetadata {
		ArticleMetadata {
			title: "Hello".to_string(),
			author: "Ada".to_string(),
			date: "2024-01-02".to_string(),
		}
	}

	#[test]
	fn lays_out_header_block_and_body() {
		let doc = assemble_document(&meta(), "https://mp.weixin.qq.com/s/abc", "Body text");
		assert_eq!(
			doc,
			"# Hello\n\n> author: Ada\n> date: 2024-01-02\n> source: [https://mp.weixin.qq.com/s/abc](https://mp.weixin.qq.com/s/abc)\n\n---\n\nBody text\n"
		);
	}

	#[test]
	fn trims_body_padding() {
		let doc = assemble_document(&meta(), "u", "\n\nBody\n\n");
		assert!(doc.ends_with("---\n\nBody\n"));
	}

	#[test]
	fn keeps_leading_indentation() {
		let doc = assemble_document(&meta(), "u", "\n    let x = 1;\n\nafter\n");
		assert!(doc.ends_with("---\n\n    let x = 1;\n\nafter\n"), "{doc}");
	}

	#[test]
	fn degraded_documents_start_with_title() {
		assert!(missing_content_document("Hello").starts_with("# Hello\n\n> Unable to parse"));
		assert_eq!(render_failure_document("Hello", &"boom"), "# Hello\n\nconversion error: boom");
	}
}
