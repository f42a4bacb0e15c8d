//! Order-line orchestration.

use crate::error::AppError;
use crate::models::OrderLine;
use crate::repo::OrderLineRepository;
use crate::validation::{is_valid_id, validate, NEW_ORDER_LINE_RULES, UPDATE_ORDER_LINE_RULES};

pub struct OrderLineService<R> {
    repo: R,
}

impl<R: OrderLineRepository> OrderLineService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<OrderLine>, AppError> {
        let lines = self.repo.get_all().await?;
        if lines.is_empty() {
            return Err(AppError::NotFound("no order lines exist".into()));
        }
        Ok(lines)
    }

    pub async fn get_by_id(&self, order_line_id: i64) -> Result<OrderLine, AppError> {
        if !is_valid_id(order_line_id) {
            return Err(AppError::BadRequest(format!(
                "{order_line_id} is not a valid order line id"
            )));
        }
        self.repo
            .get_by_id(order_line_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("order line {order_line_id}")))
    }

    /// Lookup by the composite natural key.
    pub async fn get_by_order_and_product(
        &self,
        order_id: i64,
        product_id: i64,
    ) -> Result<OrderLine, AppError> {
        if !is_valid_id(order_id) || !is_valid_id(product_id) {
            return Err(AppError::BadRequest(
                "order id and product id must be valid ids".into(),
            ));
        }
        self.repo
            .get_by_order_and_product(order_id, product_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("order line for order {order_id}, product {product_id}"))
            })
    }

    pub async fn add(&self, new_line: OrderLine) -> Result<OrderLine, AppError> {
        validate(&new_line, NEW_ORDER_LINE_RULES)?;
        self.repo.add(new_line).await
    }

    pub async fn update(&self, updated: OrderLine) -> Result<bool, AppError> {
        validate(&updated, UPDATE_ORDER_LINE_RULES)?;
        self.repo.update(&updated).await
    }

    pub async fn delete_by_id(&self, order_line_id: i64) -> Result<bool, AppError> {
        if !is_valid_id(order_line_id) {
            return Err(AppError::BadRequest(format!(
                "{order_line_id} is not a valid order line id"
            )));
        }
        self.repo.delete_by_id(order_line_id).await
    }
}
