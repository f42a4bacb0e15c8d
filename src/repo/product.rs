//! Product data access.

use super::{db_err, write_err, CrudRepository};
use crate::error::AppError;
use crate::mapper::map_product_row;
use crate::models::Product;
use async_trait::async_trait;
use sqlx::PgPool;

const PRODUCT_COLUMNS: &str = "product_id, product_name, description, product_cost, created_time";

pub trait ProductRepository: CrudRepository<Product> {}

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Product> for PgProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY product_id");
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("products.get_all"))?;
        rows.iter()
            .map(map_product_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err("products.get_all"))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1");
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("products.get_by_id"))?;
        row.as_ref()
            .map(map_product_row)
            .transpose()
            .map_err(db_err("products.get_by_id"))
    }

    async fn add(&self, new: Product) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO products (product_name, description, product_cost) \
             VALUES ($1, $2, $3) RETURNING {PRODUCT_COLUMNS}"
        );
        tracing::debug!(sql = %sql, name = %new.name, "query");
        let row = sqlx::query(&sql)
            .bind(&new.name)
            .bind(&new.description)
            .bind(new.cost)
            .fetch_one(&self.pool)
            .await
            .map_err(write_err("products.add"))?;
        map_product_row(&row).map_err(db_err("products.add"))
    }

    async fn update(&self, updated: &Product) -> Result<bool, AppError> {
        let sql = "UPDATE products SET product_name = $2, description = $3, product_cost = $4 \
                   WHERE product_id = $1";
        tracing::debug!(sql = %sql, product_id = updated.prod_id, "query");
        let result = sqlx::query(sql)
            .bind(updated.prod_id)
            .bind(&updated.name)
            .bind(&updated.description)
            .bind(updated.cost)
            .execute(&self.pool)
            .await
            .map_err(write_err("products.update"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM products WHERE product_id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(write_err("products.delete_by_id"))?;
        Ok(result.rows_affected() > 0)
    }
}

impl ProductRepository for PgProductRepository {}
