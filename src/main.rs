mod app;
mod cli;
mod components;
mod config;
mod error;
mod host;
mod logging;
mod utils;

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use cli::Cli;
use config::AppConfig;
use error::AppError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match start(&cli).await {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "visualfs failed");
            eprintln!("visualfs: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn start(cli: &Cli) -> Result<String, AppError> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    logging::init_logging(&config.logging)?;
    app::run(cli, config).await
}
