use clap::Parser;
use std::process::ExitCode;

use ticketdesk::cli::Cli;
use ticketdesk::logging::{self, LogTarget};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The dashboard sets up file logging itself once it owns the terminal
    if !cli.is_interactive() {
        let _ = logging::init(LogTarget::Stderr);
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
