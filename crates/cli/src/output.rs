use clap::ValueEnum;
use wxmd::ConversionResult;

use crate::error::Result;

/// Output format for converted articles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// The Markdown document only
	#[default]
	Markdown,
	/// Title, author, date, content HTML and Markdown as JSON
	Json,
}

impl std::fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OutputFormat::Markdown => write!(f, "markdown"),
			OutputFormat::Json => write!(f, "json"),
		}
	}
}

/// Renders `result` as the text written to stdout or the output file.
pub fn render(result: &ConversionResult, format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Markdown => Ok(result.markdown.clone()),
		OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(result)?)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn result() -> ConversionResult {
		ConversionResult {
			title: "T".to_string(),
			author: "A".to_string(),
			date: "2024-01-01".to_string(),
			content: "<p>x</p>".to_string(),
			markdown: "# T\n".to_string(),
			fallbacks: Vec::new(),
		}
	}

	#[test]
	fn markdown_format_is_document_only() {
		assert_eq!(render(&result(), OutputFormat::Markdown).unwrap(), "# T\n");
	}

	#[test]
	fn json_format_carries_all_fields() {
		let rendered = render(&result(), OutputFormat::Json).unwrap();
		let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
		assert_eq!(value["title"], "T");
		assert_eq!(value["content"], "<p>x</p>");
		assert_eq!(value["markdown"], "# T\n");
	}
}
