//! DevOps demo service
//!
//! Entry point: parse the CLI, load config, start the HTTP server.

mod cli;
mod server;

use clap::Parser;

use devops_demo_config::ConfigLoader;

use crate::cli::Cli;
use crate::server::{init_tracing, run_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load_or_default(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    init_tracing(&config.logging)?;

    run_server(config).await
}
