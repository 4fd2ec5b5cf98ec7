// Copyright 2025 The Reporting Server Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Allow println! in main.rs for CLI user-facing output (validate command)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;

use reporting_server::{
    load_config_file, save_config_file, ReportingServer, ReportingServerConfig,
};

#[derive(Parser)]
#[command(name = "reporting-server")]
#[command(about = "Standalone REST server for report definitions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config/server.yaml", global = true)]
    config: PathBuf,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,

        /// Override the server port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate a configuration file without starting the server
    Validate {
        /// Path to the configuration file to validate
        #[arg(short, long, default_value = "config/server.yaml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { config, port }) => run_server(config, port).await,
        Some(Commands::Validate { config }) => validate_config(config),
        None => run_server(cli.config, cli.port).await,
    }
}

/// Run the Reporting Server
async fn run_server(config_path: PathBuf, port_override: Option<u16>) -> Result<()> {
    // Load .env from the config file's directory, if one exists, so env var
    // interpolation can see it
    let env_file_loaded = if let Some(config_dir) = config_path.parent() {
        let env_file = config_dir.join(".env");
        if env_file.exists() {
            match dotenvy::from_path(&env_file) {
                Ok(_) => true,
                Err(e) => {
                    eprintln!("Warning: Failed to load .env file: {e}");
                    false
                }
            }
        } else {
            false
        }
    } else {
        false
    };

    // Check if config file exists, create default if it doesn't
    let config = if !config_path.exists() {
        init_logging("info");

        warn!(
            "Config file '{}' not found. Creating default configuration.",
            config_path.display()
        );

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut default_config = ReportingServerConfig::default();
        if let Some(port) = port_override {
            default_config.server.port = port;
            info!("Using command line port {port} in default configuration");
        }

        save_config_file(&default_config, &config_path)?;
        info!(
            "Default configuration created at: {}",
            config_path.display()
        );

        default_config
    } else {
        let config = load_config_file(&config_path)?;
        init_logging(&config.server.log_level);
        config
    };

    if env_file_loaded {
        info!("Loaded environment variables from .env file");
    }
    info!("Config file: {}", config_path.display());

    let mut server = ReportingServer::new(config);
    if let Some(port) = port_override {
        server = server.with_port(port);
    }
    server.run().await
}

/// Initialize the logging backend. An explicit RUST_LOG wins over the
/// configured level.
fn init_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Validate a configuration file
fn validate_config(config_path: PathBuf) -> Result<()> {
    println!("Validating configuration: {}", config_path.display());
    println!();

    if !config_path.exists() {
        println!(
            "[ERROR] Configuration file not found: {}",
            config_path.display()
        );
        std::process::exit(1);
    }

    match load_config_file(&config_path) {
        Ok(config) => {
            println!("[OK] Configuration file is valid");
            println!();
            println!("Summary:");
            println!("  Host: {}", config.server.host);
            println!("  Port: {}", config.server.port);
            println!("  Resource name: {}", config.api.resource_name);
            println!(
                "  Presentation prefix: {}",
                config.api.presentation_prefix
            );
            match &config.store.definitions_file {
                Some(path) => println!("  Definitions file: {}", path.display()),
                None => println!("  Definitions file: (none, in-memory only)"),
            }
            println!("  Seed definitions: {}", config.definitions.len());
            Ok(())
        }
        Err(e) => {
            println!("[ERROR] Configuration is invalid:");
            println!("  {e}");
            std::process::exit(1);
        }
    }
}
