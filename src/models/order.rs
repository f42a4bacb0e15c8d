use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer order. `user_id` references the owning user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Store-assigned primary key. Zero on records not yet persisted.
    #[serde(default)]
    pub order_id: i64,
    pub order_date: NaiveDate,
    pub comments: String,
    pub user_id: i64,
}
