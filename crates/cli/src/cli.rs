use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "wxmd")]
#[command(about = "Convert official-account article pages to Markdown")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Timeout for fetching a page, in seconds
	#[arg(long, global = true, env = "WXMD_TIMEOUT_SECS", default_value = "15", value_name = "SECS")]
	pub timeout: u64,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Fetch an article and print it as Markdown
	Convert {
		/// Article URL, also used as the source link
		url: String,

		/// Convert a saved HTML file instead of fetching the URL
		#[arg(short, long, value_name = "FILE")]
		input: Option<PathBuf>,

		/// Write to a file instead of stdout
		#[arg(short, long, value_name = "FILE")]
		output: Option<PathBuf>,

		/// Output format
		#[arg(short, long, value_enum, default_value = "markdown")]
		format: OutputFormat,
	},

	/// Serve the conversion API and the frontend page
	Serve {
		/// Address to bind
		#[arg(long, env = "WXMD_HOST", default_value = "0.0.0.0")]
		host: String,

		/// Port to bind
		#[arg(short, long, env = "WXMD_PORT", default_value = "8000")]
		port: u16,

		/// Frontend page served at `/`
		#[arg(long, env = "WXMD_INDEX", default_value = "index.html", value_name = "FILE")]
		index: PathBuf,
	},
}
