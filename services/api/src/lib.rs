mod check;
mod cli;
mod infra;
mod routes;
mod server;

use harvest_identity::error::AppError;
use std::process::ExitCode;

pub async fn run() -> Result<ExitCode, AppError> {
    cli::run().await
}
