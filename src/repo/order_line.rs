//! Order-line data access.

use super::{db_err, write_err, CrudRepository};
use crate::error::AppError;
use crate::mapper::map_order_line_row;
use crate::models::OrderLine;
use async_trait::async_trait;
use sqlx::PgPool;

const ORDER_LINE_COLUMNS: &str = "order_line_id, product_id, order_id, quantity";

#[async_trait]
pub trait OrderLineRepository: CrudRepository<OrderLine> {
    /// Lookup by the composite natural key (order, product).
    async fn get_by_order_and_product(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> Result<Option<OrderLine>, AppError>;
}

#[derive(Clone)]
pub struct PgOrderLineRepository {
    pool: PgPool,
}

impl PgOrderLineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<OrderLine> for PgOrderLineRepository {
    async fn get_all(&self) -> Result<Vec<OrderLine>, AppError> {
        let sql = format!("SELECT {ORDER_LINE_COLUMNS} FROM order_line ORDER BY order_line_id");
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("order_lines.get_all"))?;
        rows.iter()
            .map(map_order_line_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err("order_lines.get_all"))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<OrderLine>, AppError> {
        let sql = format!("SELECT {ORDER_LINE_COLUMNS} FROM order_line WHERE order_line_id = $1");
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("order_lines.get_by_id"))?;
        row.as_ref()
            .map(map_order_line_row)
            .transpose()
            .map_err(db_err("order_lines.get_by_id"))
    }

    async fn add(&self, new: OrderLine) -> Result<OrderLine, AppError> {
        let sql = format!(
            "INSERT INTO order_line (product_id, order_id, quantity) \
             VALUES ($1, $2, $3) RETURNING {ORDER_LINE_COLUMNS}"
        );
        tracing::debug!(sql = %sql, order_id = new.order_id, product_id = new.product_id, "query");
        let row = sqlx::query(&sql)
            .bind(new.product_id)
            .bind(new.order_id)
            .bind(new.quantity)
            .fetch_one(&self.pool)
            .await
            .map_err(write_err("order_lines.add"))?;
        map_order_line_row(&row).map_err(db_err("order_lines.add"))
    }

    async fn update(&self, updated: &OrderLine) -> Result<bool, AppError> {
        let sql = "UPDATE order_line SET product_id = $2, order_id = $3, quantity = $4 \
                   WHERE order_line_id = $1";
        tracing::debug!(sql = %sql, order_line_id = updated.order_line_id, "query");
        let result = sqlx::query(sql)
            .bind(updated.order_line_id)
            .bind(updated.product_id)
            .bind(updated.order_id)
            .bind(updated.quantity)
            .execute(&self.pool)
            .await
            .map_err(write_err("order_lines.update"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM order_line WHERE order_line_id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(write_err("order_lines.delete_by_id"))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl OrderLineRepository for PgOrderLineRepository {
    async fn get_by_order_and_product(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> Result<Option<OrderLine>, AppError> {
        let sql = format!(
            "SELECT {ORDER_LINE_COLUMNS} FROM order_line WHERE order_id = $1 AND product_id = $2"
        );
        tracing::debug!(sql = %sql, order_id, product_id, "query");
        let row = sqlx::query(&sql)
            .bind(order_id)
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("order_lines.get_by_order_and_product"))?;
        row.as_ref()
            .map(map_order_line_row)
            .transpose()
            .map_err(db_err("order_lines.get_by_order_and_product"))
    }
}
