use crate::check::{run_check, CheckArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use harvest_identity::error::AppError;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "Harvest Identity",
    about = "Validate national identity numbers for farm logistics registrations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate a single NIC and print the result as JSON
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await.map(|_| ExitCode::SUCCESS),
        Command::Check(args) => run_check(args),
    }
}
