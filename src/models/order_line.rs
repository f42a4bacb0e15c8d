use serde::{Deserialize, Serialize};

/// One line of an order: a product and a quantity. Carries a surrogate key;
/// (product_id, order_id) is unique per the store schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Store-assigned primary key. Zero on records not yet persisted.
    #[serde(default)]
    pub order_line_id: i64,
    pub product_id: i64,
    pub order_id: i64,
    pub quantity: i32,
}
