//! Lookup view controller
//!
//! Owns everything the user sees (the `Page`) and the busy flag that keeps a
//! second lookup from starting while one is outstanding. A lookup is split in
//! two halves, `trigger` and `complete`, so an event loop can keep taking input
//! while the request is in flight; `submit` runs both halves back to back.

use std::sync::Arc;

use crate::client::OrderSource;
use crate::error::FetchResult;
use crate::render::{render_fetch_error, render_order_card};

const EMPTY_ID_MESSAGE: &str = "order id cannot be empty";

/// Visible state of the lookup form
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Current contents of the order id input
    pub input: String,
    /// Inline validation message; hidden when `None`
    pub validation_error: Option<String>,
    /// Result card contents; hidden until the first lookup finishes
    pub card: Option<Card>,
    pub submit_enabled: bool,
    /// Page-level loading indicator
    pub loading: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            input: String::new(),
            validation_error: None,
            card: None,
            submit_enabled: true,
            loading: false,
        }
    }
}

/// What the result card currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum Card {
    Order(String),
    Error(String),
}

impl Card {
    pub fn content(&self) -> &str {
        match self {
            Card::Order(content) | Card::Error(content) => content,
        }
    }
}

pub struct LookupController<S> {
    source: Arc<S>,
    page: Page,
    busy: bool,
}

impl<S: OrderSource> LookupController<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            page: Page::default(),
            busy: false,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Shared handle to the order source, for running a lookup off the controller
    pub fn source(&self) -> Arc<S> {
        Arc::clone(&self.source)
    }

    pub fn set_input(&mut self, value: &str) {
        self.page.input = value.to_string();
    }

    /// Start a lookup from the current input
    ///
    /// Returns the trimmed order id to fetch, or `None` when the trigger is
    /// ignored (a lookup is already running) or rejected by validation.
    pub fn trigger(&mut self) -> Option<String> {
        if self.busy {
            tracing::debug!("Lookup already in flight, ignoring trigger");
            return None;
        }

        let order_id = self.page.input.trim();
        if order_id.is_empty() {
            tracing::debug!("Rejecting empty order id");
            self.page.validation_error = Some(EMPTY_ID_MESSAGE.to_string());
            return None;
        }
        let order_id = order_id.to_string();

        self.set_busy(true);
        self.page.validation_error = None;
        Some(order_id)
    }

    /// Finish the outstanding lookup and show its result
    pub fn complete(&mut self, result: FetchResult) {
        self.set_busy(false);

        let card = match result {
            Ok(order) => {
                tracing::info!(order_uid = %order.order_uid, "Order loaded");
                Card::Order(render_order_card(&order))
            }
            Err(e) => {
                tracing::info!(kind = e.kind(), error = %e, "Order lookup failed");
                Card::Error(render_fetch_error(&e))
            }
        };
        self.page.card = Some(card);
    }

    /// Run a whole lookup from the current input
    pub async fn submit(&mut self) {
        let Some(order_id) = self.trigger() else {
            return;
        };

        let result = self.source.fetch_order(&order_id).await;
        self.complete(result);
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.page.submit_enabled = !busy;
        self.page.loading = busy;
    }
}
