use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;

use lavkabot::catalog_source::{load_catalog, oversized_payloads};
use lavkabot::cli::{Cli, Commands};
use lavkabot::config;
use lavkabot::logging::{init_logger, install_panic_hook};
use lavkabot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use lavkacore::{Cart, Catalog};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, catalog, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    install_panic_hook();

    // Load environment variables from .env if present, before any config is read
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
        Some(Commands::CheckCatalog { path }) => run_check_catalog(path),
        Some(Commands::PrintCatalog { path }) => run_print_catalog(path),
    }
}

fn resolve_catalog(path: Option<String>) -> Result<Catalog> {
    let path = path.or_else(|| config::CATALOG_PATH.clone());
    Ok(load_catalog(path.as_deref())?)
}

fn ensure_servable(catalog: &Catalog) -> Result<()> {
    let oversized = oversized_payloads(catalog);
    if !oversized.is_empty() {
        return Err(anyhow::anyhow!(
            "Menu names too long for Telegram buttons: {}",
            oversized.join(", ")
        ));
    }
    Ok(())
}

/// Run the check-catalog command
fn run_check_catalog(path: Option<String>) -> Result<()> {
    let catalog = resolve_catalog(path)?;
    ensure_servable(&catalog)?;
    println!(
        "✅ Menu '{}' is valid: {} sections, {} products",
        catalog.title,
        catalog.sections.len(),
        catalog.products().count()
    );
    Ok(())
}

/// Run the print-catalog command
fn run_print_catalog(path: Option<String>) -> Result<()> {
    let catalog = resolve_catalog(path)?;
    println!("{}", catalog.title);
    for section in &catalog.sections {
        println!();
        println!("{}", section.name);
        for product in &section.products {
            println!("  • {} — {} руб", product.name, product.price);
        }
    }
    Ok(())
}

/// Runs the bot with long polling until Ctrl+C
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    let catalog = resolve_catalog(None)?;
    ensure_servable(&catalog)?;
    log::info!(
        "Serving menu '{}' ({} sections, {} products)",
        catalog.title,
        catalog.sections.len(),
        catalog.products().count()
    );

    let bot = create_bot()?;
    let me = bot
        .get_me()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to Bot API: {}", e))?;
    log::info!("Bot username: {}, Bot ID: {}", me.username(), me.id);

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}. Continuing anyway.", e);
    }

    // The only cart ledger in the process; handlers get it through HandlerDeps
    let cart = Arc::new(Cart::new());
    let deps = HandlerDeps::new(Arc::clone(&cart), Arc::new(catalog));

    Dispatcher::builder(bot, schema(deps))
        .default_handler(|upd| async move {
            log::debug!("Unhandled update: {:?}", upd.kind);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Exit. {} users had a cart during this run", cart.user_count());
    Ok(())
}
