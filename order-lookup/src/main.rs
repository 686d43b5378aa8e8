//! Order Lookup
//!
//! Interactive terminal form for the order API: type an order id, press Enter,
//! and the order card (or the reason it could not be loaded) is printed.
//!
//! The base API address comes from `ORDER_API_URL` or the first argument.

mod client;
mod config;
mod controller;
mod error;
mod order;
mod render;


use std::future::{self, Future};
use std::pin::Pin;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use client::{OrderClient, OrderSource};
use config::Config;
use controller::{LookupController, Page};
use error::FetchResult;

type PendingLookup = Pin<Box<dyn Future<Output = FetchResult> + Send>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout is the page
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().with_api_url(std::env::args().nth(1));
    tracing::info!(api_url = %config.api_url, "Starting order lookup");

    let client = OrderClient::from_config(&config)?;
    let mut controller = LookupController::new(Arc::new(client));

    println!("Lookup Order");
    println!("Enter an order id and press Enter (Ctrl-D to quit).");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<PendingLookup> = None;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };

                controller.set_input(&line);
                match controller.trigger() {
                    Some(order_id) => {
                        println!("Fetching order {}...", order_id);
                        let source = controller.source();
                        pending = Some(Box::pin(async move { source.fetch_order(&order_id).await }));
                    }
                    None if controller.is_busy() => println!("Still fetching, please wait."),
                    None => show_validation(controller.page()),
                }
            }
            result = poll_pending(&mut pending) => {
                pending = None;
                controller.complete(result);
                show_card(controller.page());
            }
        }
    }

    if let Some(lookup) = pending {
        controller.complete(lookup.await);
        show_card(controller.page());
    }

    Ok(())
}

/// Resolves with the in-flight lookup, or never when there is none
async fn poll_pending(pending: &mut Option<PendingLookup>) -> FetchResult {
    match pending.as_mut() {
        Some(lookup) => lookup.await,
        None => future::pending().await,
    }
}

fn show_validation(page: &Page) {
    if let Some(message) = &page.validation_error {
        println!("! {}", message);
    }
}

fn show_card(page: &Page) {
    if let Some(card) = &page.card {
        println!("\n{}\n", card.content().trim_end());
    }
}
