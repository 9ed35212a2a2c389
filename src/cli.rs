//! CLI definitions for the DevOps demo service.

use std::path::PathBuf;

use clap::Parser;

use devops_demo_config::Config;

/// DevOps demo service CLI.
#[derive(Debug, Parser)]
#[command(name = "devops-demo")]
#[command(about = "Demo informational web service for CI/CD pipelines")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults to config/default.toml when present)
    #[arg(short, long, env = "DEVOPS_DEMO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Server host, overrides the config file
    #[arg(long, env = "DEVOPS_DEMO_HOST")]
    pub host: Option<String>,

    /// Server port, overrides the config file
    #[arg(long, env = "DEVOPS_DEMO_PORT")]
    pub port: Option<u16>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
