//! Order data access.

use super::{db_err, write_err, CrudRepository};
use crate::error::AppError;
use crate::mapper::map_order_row;
use crate::models::Order;
use async_trait::async_trait;
use sqlx::PgPool;

const ORDER_COLUMNS: &str = "order_id, order_date, order_comments, user_id";

pub trait OrderRepository: CrudRepository<Order> {}

#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Order> for PgOrderRepository {
    async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY order_id");
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("orders.get_all"))?;
        rows.iter()
            .map(map_order_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err("orders.get_all"))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE order_id = $1");
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("orders.get_by_id"))?;
        row.as_ref()
            .map(map_order_row)
            .transpose()
            .map_err(db_err("orders.get_by_id"))
    }

    async fn add(&self, new: Order) -> Result<Order, AppError> {
        let sql = format!(
            "INSERT INTO orders (order_date, order_comments, user_id) \
             VALUES ($1, $2, $3) RETURNING {ORDER_COLUMNS}"
        );
        tracing::debug!(sql = %sql, user_id = new.user_id, "query");
        let row = sqlx::query(&sql)
            .bind(new.order_date)
            .bind(&new.comments)
            .bind(new.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(write_err("orders.add"))?;
        map_order_row(&row).map_err(db_err("orders.add"))
    }

    async fn update(&self, updated: &Order) -> Result<bool, AppError> {
        let sql = "UPDATE orders SET order_date = $2, order_comments = $3, user_id = $4 \
                   WHERE order_id = $1";
        tracing::debug!(sql = %sql, order_id = updated.order_id, "query");
        let result = sqlx::query(sql)
            .bind(updated.order_id)
            .bind(updated.order_date)
            .bind(&updated.comments)
            .bind(updated.user_id)
            .execute(&self.pool)
            .await
            .map_err(write_err("orders.update"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM orders WHERE order_id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(write_err("orders.delete_by_id"))?;
        Ok(result.rows_affected() > 0)
    }
}

impl OrderRepository for PgOrderRepository {}
