use harvest_identity_api::run;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("application error: {err}");
            ExitCode::FAILURE
        }
    }
}
