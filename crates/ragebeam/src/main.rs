use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::app::App;

mod cli;
mod error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let app = App::parse();
    init_logging(app.verbose);

    match cli::run(app).await {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "download finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let code = e.exit_code();
            eprintln!("error: {:#}", anyhow::Error::from(e));
            ExitCode::from(code)
        }
    }
}

/// `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
