use clap::Parser;
use tracing::error;
use wxmd_cli::cli::{Cli, Commands};
use wxmd_cli::{commands, logging};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();

	// The server reports its address and requests at info by default.
	let base = u8::from(matches!(cli.command, Commands::Serve { .. }));
	logging::init_logging(cli.verbose.saturating_add(base));

	if let Err(err) = commands::dispatch(cli).await {
		error!(target = "wxmd", error = %err, "command failed");
		std::process::exit(1);
	}
}
