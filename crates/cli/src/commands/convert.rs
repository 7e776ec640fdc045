//! `wxmd convert`: fetch or read one page and write its Markdown.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::Result;
use crate::fetch::{ArticleFetcher, is_platform_article, parse_article_url};
use crate::output::{OutputFormat, render};

#[derive(Debug, Clone)]
pub struct ConvertOptions {
	pub url: String,
	pub input: Option<PathBuf>,
	pub output: Option<PathBuf>,
	pub format: OutputFormat,
	pub timeout: Duration,
}

pub async fn execute(opts: ConvertOptions) -> Result<()> {
	let url = parse_article_url(&opts.url)?;
	if !is_platform_article(&url) {
		warn!(target = "wxmd", %url, "url does not look like an article link");
	}

	let html = match &opts.input {
		Some(path) => {
			info!(target = "wxmd", path = %path.display(), "reading saved page");
			tokio::fs::read_to_string(path).await?
		}
		None => ArticleFetcher::new(opts.timeout)?.fetch(&url).await?,
	};

	let result = wxmd::convert_article(&html, &opts.url);
	for fallback in &result.fallbacks {
		warn!(target = "wxmd", %url, %fallback, "conversion degraded");
	}

	let rendered = render(&result, opts.format)?;
	match &opts.output {
		Some(path) => {
			tokio::fs::write(path, rendered).await?;
			info!(target = "wxmd", path = %path.display(), format = %opts.format, "wrote article");
		}
		None => print!("{rendered}"),
	}

	Ok(())
}
