//! Row-to-entity mapping with column-name translation.
//!
//! A direct field-by-field copy from store columns to domain fields; no value
//! validation happens here. Absent rows never reach these functions — the
//! repositories fetch with `fetch_optional` and pass `None` upward.

use crate::models::{Order, OrderLine, Product, User};
use sqlx::postgres::PgRow;
use sqlx::Row;

pub fn map_user_row(row: &PgRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        password: row.try_get("password")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        role: row.try_get("role_name")?,
    })
}

pub fn map_order_row(row: &PgRow) -> Result<Order, sqlx::Error> {
    Ok(Order {
        order_id: row.try_get("order_id")?,
        order_date: row.try_get("order_date")?,
        comments: row.try_get("order_comments")?,
        user_id: row.try_get("user_id")?,
    })
}

pub fn map_order_line_row(row: &PgRow) -> Result<OrderLine, sqlx::Error> {
    Ok(OrderLine {
        order_line_id: row.try_get("order_line_id")?,
        product_id: row.try_get("product_id")?,
        order_id: row.try_get("order_id")?,
        quantity: row.try_get("quantity")?,
    })
}

pub fn map_product_row(row: &PgRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        prod_id: row.try_get("product_id")?,
        name: row.try_get("product_name")?,
        description: row.try_get("description")?,
        cost: row.try_get("product_cost")?,
        created_time: row.try_get("created_time")?,
    })
}
