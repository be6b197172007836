use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use layerview::config::Config;
use layerview::logging::init_tracing;

#[derive(Debug, Parser)]
#[command(
    name = "layerview",
    version,
    about = "Browse the image layers served by a local layer API"
)]
struct Cli {
    /// Override the API base URL from the config file
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<Config, layerview::config::ConfigError> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)?;
    match &cli.url {
        Some(url) => config.with_base_url(url.as_str()),
        None => Ok(config),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = layerview::ui::run(config, runtime.handle());

    // In-flight requests are not aborted by unmount; don't wait on them.
    runtime.shutdown_timeout(Duration::from_millis(200));
    result
}
