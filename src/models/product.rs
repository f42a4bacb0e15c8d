use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable product. `cost` is decimal currency, never a float.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned primary key. Zero on records not yet persisted.
    #[serde(default)]
    pub prod_id: i64,
    pub name: String,
    pub description: String,
    pub cost: Decimal,
    /// Set by the store on insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
}
