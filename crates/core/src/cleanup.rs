//! Text-level repairs applied to rendered Markdown.
//!
//! Each pass is a plain `&str -> String` function. [`CLEANUP_PASSES`] fixes
//! their order: bullet repair runs before blank lines are collapsed, then junk
//! is removed. New passes go after junk removal unless they must see the
//! uncollapsed text. The final collapse catches blank-line runs left behind
//! where a junk label filled a whole paragraph.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::patterns;

/// A single cleanup rule.
pub type CleanupPass = fn(&str) -> String;

/// Cleanup rules in application order.
pub const CLEANUP_PASSES: &[(&str, CleanupPass)] = &[
	("dedupe_bullets", dedupe_bullets),
	("collapse_blank_lines", collapse_blank_lines),
	("remove_junk_text", remove_junk_text),
	("collapse_junk_gaps", collapse_blank_lines),
];

// Marker, then the page's own bullet glyph left over as list item text.
static DOUBLE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^([^\S\n]*[-*+])[^\S\n]+[•·][^\S\n]*").expect("DOUBLE_BULLET regex should compile"));
static BLANK_LINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("BLANK_LINE_RUN regex should compile"));

/// Runs every pass in [`CLEANUP_PASSES`] over `markdown`.
pub fn clean_markdown(markdown: &str) -> String {
	CLEANUP_PASSES.iter().fold(markdown.to_string(), |text, (name, pass)| {
		let cleaned = pass(&text);
		if cleaned.len() != text.len() {
			debug!(target = "wxmd", pass = name, removed = text.len().saturating_sub(cleaned.len()), "cleanup pass applied");
		}
		cleaned
	})
}

/// `- • item` becomes `- item`, line by line.
pub fn dedupe_bullets(markdown: &str) -> String {
	DOUBLE_BULLET.replace_all(markdown, "${1} ").into_owned()
}

/// Leaves at most one blank line between blocks.
pub fn collapse_blank_lines(markdown: &str) -> String {
	BLANK_LINE_RUN.replace_all(markdown, "\n\n").into_owned()
}

/// Strips dead UI labels the platform injects into article bodies.
pub fn remove_junk_text(markdown: &str) -> String {
	patterns().junk_text.exact.iter().fold(markdown.to_string(), |text, junk| text.replace(junk.as_str(), ""))
}
