mod cli;
mod models;
mod services;

use std::process::ExitCode;

use cli::cli;
use services::shared::logger::init_logger;

async fn run_humo_rates() -> anyhow::Result<ExitCode> {
    init_logger();
    cli().await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    run_humo_rates().await
}
