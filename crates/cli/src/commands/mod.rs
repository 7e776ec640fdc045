mod convert;
mod serve;

use std::time::Duration;

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub use convert::ConvertOptions;

pub async fn dispatch(cli: Cli) -> Result<()> {
	let timeout = Duration::from_secs(cli.timeout);

	match cli.command {
		Commands::Convert { url, input, output, format } => {
			convert::execute(ConvertOptions {
				url,
				input,
				output,
				format,
				timeout,
			})
			.await?
		}
		Commands::Serve { host, port, index } => serve::execute(&host, port, index, timeout).await?,
	}

	Ok(())
}
