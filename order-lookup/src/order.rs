//! Order record returned by the order API
//!
//! Decoding never rejects a JSON value: a missing, `null` or mistyped field
//! takes its default value, and money fields keep whatever the API sent
//! (numbers or decimal strings). The API owns the schema; this client only
//! displays what it gets.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Helper to deserialize anything that does not fit as default (empty vec, etc.)
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "deserialize_lenient")]
    pub order_uid: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub track_number: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub entry: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub delivery: Delivery,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub payment: Payment,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub items: Vec<Item>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub locale: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub internal_signature: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub customer_id: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub delivery_service: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub shardkey: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub sm_id: i64,
    /// Creation time as sent by the API
    #[serde(deserialize_with = "deserialize_lenient")]
    pub date_created: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub oof_shard: String,
}

impl Order {
    /// Build an order from any JSON value; a non-object gives an empty order
    pub fn from_value(value: Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Delivery {
    #[serde(deserialize_with = "deserialize_lenient")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub phone: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub zip: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub city: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub address: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub region: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Payment {
    #[serde(deserialize_with = "deserialize_lenient")]
    pub transaction: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub request_id: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub currency: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub provider: String,
    pub amount: Amount,
    /// Unix seconds
    #[serde(deserialize_with = "deserialize_lenient")]
    pub payment_dt: i64,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub bank: String,
    pub delivery_cost: Amount,
    pub goods_total: Amount,
    pub custom_fee: Amount,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "deserialize_lenient")]
    pub chrt_id: i64,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub track_number: String,
    pub price: Amount,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub rid: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub name: String,
    /// Discount in percent
    pub sale: Amount,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub size: String,
    pub total_price: Amount,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub nm_id: i64,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub brand: String,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub status: i64,
}

/// Money or percentage value, kept exactly as the API wrote it
///
/// Accepts a JSON number (`1817`, `453.5`) or a decimal string (`"259.48"`);
/// anything else is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Amount(String);

impl Amount {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Amount {
    fn from(s: &str) -> Self {
        Amount(s.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => Amount(n.to_string()),
            Value::String(s) => Amount(s),
            _ => Amount::default(),
        })
    }
}
