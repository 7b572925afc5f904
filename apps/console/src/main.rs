//! Campus console composition root.

#![forbid(unsafe_code)]

mod cli;
mod console_config;
mod render;
mod screen;

use campus_core::AppError;
use clap::Parser;

use crate::cli::Cli;
use crate::console_config::{ConsoleConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = ConsoleConfig::load()?;
    let offline = cli.offline || config.offline;

    let output = screen::run(cli.command, &config, offline).await?;
    println!("{}", output.trim_end());

    Ok(())
}
