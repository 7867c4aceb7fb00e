//! CLI administration tool for qrlink.
//!
//! Works directly against the configured key-value store, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a short link (prompts for the URL when omitted)
//! cargo run --bin admin -- shorten https://example.com/page
//!
//! # Show the click report of a code
//! cargo run --bin admin -- stats aB3dE9
//!
//! # Render a QR code into the static dir
//! cargo run --bin admin -- qr https://example.com
//!
//! # Check the store connection
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`qrlink::config`]. `STORE_BACKEND=memory` makes
//! every command operate on a throwaway store.

use qrlink::application::services::{LinkService, QrService, StatsService};
use qrlink::config::{self, Config, StoreBackend, mask_connection_string};
use qrlink::infrastructure::persistence::KvLinkRepository;
use qrlink::infrastructure::store::KeyValueStore;
use qrlink::server::connect_store;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// CLI tool for managing qrlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,

        /// Base of the printed short link (defaults to BASE_URL or the listen address)
        #[arg(short, long)]
        base_url: Option<String>,
    },

    /// Show the click report of a short code
    Stats {
        /// Short code
        code: String,
    },

    /// Render a QR code image for a URL
    Qr {
        /// Exact text to encode
        url: String,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Store subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    if config.store_backend == StoreBackend::Memory {
        println!(
            "{}",
            "Warning: STORE_BACKEND=memory, changes are discarded on exit".yellow()
        );
    }

    match cli.command {
        Commands::Shorten { url, base_url } => shorten(&config, url, base_url).await?,
        Commands::Stats { code } => stats(&config, &code).await?,
        Commands::Qr { url } => qr(&config, &url).await?,
        Commands::Store { action } => match action {
            StoreAction::Check => store_check(&config).await?,
        },
    }

    Ok(())
}

async fn link_repository(config: &Config) -> Result<Arc<KvLinkRepository>> {
    let store = connect_store(config).await?;
    Ok(Arc::new(KvLinkRepository::new(store)))
}

/// Creates a short link and prints it.
async fn shorten(config: &Config, url: Option<String>, base_url: Option<String>) -> Result<()> {
    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("URL to shorten").interact_text()?,
    };

    let base_url = base_url
        .or_else(|| config.base_url.clone())
        .unwrap_or_else(|| format!("http://{}", config.listen_addr));

    let service = LinkService::new(link_repository(config).await?);
    let link = service
        .shorten(&url, &base_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "Short link created".green().bold());
    println!("  Code:     {}", link.code.bright_yellow().bold());
    println!("  Short:    {}", link.short_url.cyan());
    println!("  Original: {}", link.original_url);

    Ok(())
}

/// Prints the click report of a code.
async fn stats(config: &Config, code: &str) -> Result<()> {
    let service = StatsService::new(link_repository(config).await?);

    match service.get_stats(code).await {
        Ok(stats) => {
            println!("{}", "Link stats".bright_blue().bold());
            println!("  Code:     {}", stats.code.bright_yellow());
            println!("  Original: {}", stats.original_url.cyan());
            println!("  Clicks:   {}", stats.clicks.to_string().bright_white().bold());
            Ok(())
        }
        Err(qrlink::AppError::NotFound { .. }) => {
            println!("{} {}", "No short link for code".red(), code.bright_yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to load stats: {}", e)),
    }
}

/// Renders a QR code into the static dir.
async fn qr(config: &Config, url: &str) -> Result<()> {
    let service = QrService::new(config.static_dir.clone());
    let artifact = service
        .generate(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to generate QR code: {}", e))?;

    println!("{}", "QR code saved".green().bold());
    println!(
        "  File: {}",
        service
            .static_root()
            .join(&artifact.file)
            .display()
            .to_string()
            .cyan()
    );
    println!("  URL:  /static/{}", artifact.file);

    Ok(())
}

/// Pings the configured store.
async fn store_check(config: &Config) -> Result<()> {
    match config.store_backend {
        StoreBackend::Redis => println!(
            "Checking {}...",
            mask_connection_string(&config.redis_url).bright_black()
        ),
        StoreBackend::Memory => println!("Checking in-memory store..."),
    }

    let store: Arc<dyn KeyValueStore> = connect_store(config).await?;

    if store.health_check().await {
        println!("{}", "Store connection OK".green().bold());
        Ok(())
    } else {
        anyhow::bail!("Store did not answer PING")
    }
}
