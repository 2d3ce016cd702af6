//! serprank bot
//!
//! Answers "where does my site rank for this query?" over Telegram, or
//! once from the command line.

mod adapters;
mod config;
mod handler;
mod poller;
mod report;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serprank::{Notifier, Outcome, PageBudget, Query, RankFinder, UrlContains};
use serprank_integration_telegram::{TelegramConfig, TelegramNotifier};
use tracing_subscriber::EnvFilter;

use adapters::GoogleCsePageSource;
use config::{SearchSettings, TelegramSettings};
use handler::RequestHandler;

#[derive(Parser)]
#[command(name = "serprank-bot")]
#[command(about = "Find the search rank of a site for a query", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer rank requests sent to the Telegram bot
    Serve,

    /// Run a single rank check and print the result
    Check {
        /// Search query, sent to the provider as-is
        query: String,
        /// Result positions to scan (overrides PAGE_BUDGET)
        #[arg(short, long)]
        budget: Option<PageBudget>,
        /// URL substring to look for (overrides TARGET_DOMAIN)
        #[arg(short, long)]
        target: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the environment may already be set.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("Failed to load .env file");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve().await,
        Commands::Check {
            query,
            budget,
            target,
        } => check(query, budget, target).await,
    }
}

async fn serve() -> Result<()> {
    let search = SearchSettings::from_env().context("Invalid search configuration")?;
    let telegram = TelegramSettings::from_env().context("Invalid Telegram configuration")?;

    tracing::info!("🔎 serprank bot initializing...");

    let predicate = UrlContains::new(search.target_domain);
    if predicate.needle().is_empty() {
        tracing::warn!("⚠️  No TARGET_DOMAIN set - every query will match its first result");
    }

    let telegram_config = TelegramConfig::new(telegram.token, telegram.operator_chat_id)
        .with_poll_timeout(telegram.poll_timeout_secs)
        .with_api_base_url(telegram.api_base_url);

    let telegram_notifier =
        Arc::new(TelegramNotifier::new(telegram_config).with_page_budget(search.page_budget));
    let client = telegram_notifier.client();
    let me = client
        .get_me()
        .await
        .context("Failed to authorize with Telegram")?;
    tracing::info!("✅ Authorized on account {}", me.label());

    let source = Arc::new(
        GoogleCsePageSource::new(search.api_key).with_base_url(search.api_base_url),
    );
    let notifier: Arc<dyn Notifier> = telegram_notifier.clone();

    let handler = RequestHandler::new(
        RankFinder::new(source),
        notifier,
        search.engine_id,
        predicate,
        search.page_budget,
    );

    tracing::info!(budget = %search.page_budget, "✅ Listening for rank requests");

    let handled = poller::poll_updates(client, &handler, shutdown_signal()).await;

    tracing::info!(handled = %handled, "Shutting down");
    Ok(())
}

async fn check(query: String, budget: Option<PageBudget>, target: Option<String>) -> Result<()> {
    let search = SearchSettings::from_env().context("Invalid search configuration")?;
    let budget = budget.unwrap_or(search.page_budget);
    let predicate = UrlContains::new(target.unwrap_or(search.target_domain));

    let source = Arc::new(
        GoogleCsePageSource::new(search.api_key).with_base_url(search.api_base_url),
    );
    let finder = RankFinder::new(source);
    let query = Query::new(query, search.engine_id);

    let outcome = finder.find(&query, &predicate, budget).await;
    println!("{}", report::render(&query, &outcome, budget));

    if let Outcome::Failed(err) = outcome {
        bail!("search provider failed: {}", err.message());
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
