//! GREEN Supermarket storefront - terminal checkout client
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use storefront_app::config::{init_config_dir, load_settings};
use storefront_app::{AppState, Route};
use storefront_client::HttpOrderClient;
use storefront_core::prelude::*;

/// GREEN Supermarket storefront - place orders from the terminal
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Terminal storefront and checkout for GREEN Supermarket", long_about = None)]
struct Args {
    /// Directory holding .storefront/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Order endpoint URL (overrides config)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Order total in major units (overrides config)
    #[arg(long, value_name = "AMOUNT")]
    total: Option<f64>,

    /// Open straight on the checkout page
    #[arg(long)]
    checkout: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let base_dir = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        let path = init_config_dir(&base_dir)?;
        println!("Config written to {}", path.display());
        return Ok(());
    }

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    storefront_core::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("GREEN storefront starting");
    info!("═══════════════════════════════════════════════════════");

    let mut settings = load_settings(&base_dir);
    if let Some(endpoint) = args.endpoint {
        settings.order.endpoint = endpoint;
    }
    if let Some(total) = args.total {
        settings.checkout.total_price = total;
    }

    let total = settings.checkout.total()?;
    let client = HttpOrderClient::new(&settings.order.endpoint)
        .with_context(|| format!("Invalid order endpoint {:?}", settings.order.endpoint))?;
    info!(
        endpoint = %client.endpoint(),
        total = %total,
        log_file = %storefront_core::logging::get_current_log_file().display(),
        "Configuration loaded"
    );

    let mut state = AppState::new(settings, total);
    if args.checkout {
        state.route = Route::Checkout;
    }

    storefront_tui::run(state, client)
        .await
        .context("Storefront exited with an error")
}
