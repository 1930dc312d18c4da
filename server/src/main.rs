mod move_api;
mod server_config;
mod web_server;

use clap::Parser;
use std::path::PathBuf;
use tictactoe_common::config::Validate;
use tictactoe_common::{log, log_error, logger};

use server_config::{ServerConfig, get_config_manager, get_config_path};

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    /// Path to the YAML config file. Defaults to one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the default config to the config path and exit.
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(get_config_path);
    let config_manager = get_config_manager(config_path.clone());

    if args.init_config {
        config_manager.set_config(&ServerConfig::default())?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    let mut config = config_manager.get_config()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.validate()?;

    let prefix = args.use_log_prefix.then(|| "Server".to_string());
    logger::init_logger(prefix, config.log_level);
    log!(
        "Using config {}, binding {}",
        config_path.display(),
        config.bind_address()
    );

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log_error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        log!("Shutdown signal received");
    };

    web_server::run_web_server(&config, shutdown_signal).await?;

    log!("Server shut down gracefully");

    Ok(())
}
