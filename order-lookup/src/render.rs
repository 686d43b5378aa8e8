//! Order card renderer
//!
//! Renders a fetched order, or the reason it could not be fetched, to
//! terminal-readable markdown.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::FetchError;
use crate::order::{Amount, Delivery, Item, Order, Payment};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
const INVALID_DATE: &str = "Invalid Date";

/// Render an order to markdown format
pub fn render_order_card(order: &Order) -> String {
    let mut buf = String::new();

    buf.push_str("## Order Details\n\n");
    buf.push_str(&render_general(order));
    buf.push('\n');
    buf.push_str(&render_delivery(&order.delivery));
    buf.push('\n');
    buf.push_str(&render_payment(&order.payment));
    buf.push('\n');
    buf.push_str(&render_items(&order.items));

    buf
}

/// Render a failed lookup as a single line
pub fn render_fetch_error(error: &FetchError) -> String {
    match error {
        FetchError::Api { message } => message.clone(),
        other => format!("Unexpected {} error happened", other.kind()),
    }
}

fn render_general(order: &Order) -> String {
    let mut buf = String::from("### General\n\n");
    buf.push_str(&field("Order UID", &order.order_uid));
    buf.push_str(&field("Track Number", &order.track_number));
    buf.push_str(&field("Entry", &order.entry));
    buf.push_str(&field("Date Created", &format_created(&order.date_created)));
    buf.push_str(&field("Locale", &order.locale));
    buf.push_str(&field("Delivery Service", &order.delivery_service));
    buf
}

fn render_delivery(delivery: &Delivery) -> String {
    let address = format!(
        "{}, {}, {}, {}",
        delivery.address, delivery.city, delivery.region, delivery.zip
    );

    let mut buf = String::from("### Delivery Info\n\n");
    buf.push_str(&field("Name", &delivery.name));
    buf.push_str(&field("Phone", &delivery.phone));
    buf.push_str(&field("Address", &address));
    buf.push_str(&field("Email", &delivery.email));
    buf
}

fn render_payment(payment: &Payment) -> String {
    let mut buf = String::from("### Payment\n\n");
    buf.push_str(&field("Transaction ID", &payment.transaction));
    buf.push_str(&field("Request ID", &payment.request_id));
    buf.push_str(&field("Provider", &payment.provider));
    buf.push_str(&field("Amount", &money(&payment.amount)));
    buf.push_str(&field("Currency", &payment.currency));
    buf.push_str(&field("Payment Date", &format_unix(payment.payment_dt)));
    buf.push_str(&field("Bank", &payment.bank));
    buf.push_str(&field("Delivery Cost", &money(&payment.delivery_cost)));
    buf.push_str(&field("Goods Total", &money(&payment.goods_total)));
    buf.push_str(&field("Custom Fee", &money(&payment.custom_fee)));
    buf
}

fn render_items(items: &[Item]) -> String {
    let mut buf = String::from("### Items\n\n");

    if items.is_empty() {
        buf.push_str("_No items._\n");
        return buf;
    }

    buf.push_str("| Name | Price | Sale | Total Price |\n");
    buf.push_str("|------|------:|-----:|------------:|\n");
    for item in items {
        buf.push_str(&format!(
            "| {} | {} | {}% | {} |\n",
            escape_cell(&item.name),
            item.price,
            item.sale,
            item.total_price
        ));
    }

    buf
}

fn field(label: &str, value: &str) -> String {
    format!("- **{}:** {}\n", label, value)
}

fn money(value: &Amount) -> String {
    format!("${}", value.as_str())
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|")
}

/// Format a unix timestamp in seconds
fn format_unix(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Format a creation timestamp as sent by the API
///
/// RFC 3339 first; timestamps without an offset are taken as UTC.
fn format_created(raw: &str) -> String {
    parse_created(raw.trim())
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_created(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}
