//! CLI interface for Rolegate

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;

use crate::api;
use crate::config;

#[derive(Parser)]
#[command(name = "rolegate")]
#[command(version)]
#[command(about = "Role-based access control API gateway", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP gateway
    Serve {
        /// Address to bind (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to the configured port)
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// Initialize a new rolegate.toml configuration file
    Init,
}

/// Run the gateway with config-file settings unless overridden on the CLI
pub async fn serve(host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = config::load_config()?;
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);
    api::run_server(config, &host, port).await?;
    Ok(())
}

/// Initialize a new rolegate.toml configuration file
pub fn init() -> Result<()> {
    let config_path = std::path::Path::new("rolegate.toml");

    if config_path.exists() {
        println!("rolegate.toml already exists");
        return Ok(());
    }

    fs::write(config_path, config::default_config_content())?;
    println!("Created rolegate.toml");
    println!("Edit the configuration file and run 'rolegate serve' to start the gateway");

    Ok(())
}
