//! Order orchestration.

use crate::error::AppError;
use crate::models::Order;
use crate::repo::OrderRepository;
use crate::validation::{is_valid_id, validate, NEW_ORDER_RULES, UPDATE_ORDER_RULES};

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        let orders = self.repo.get_all().await?;
        if orders.is_empty() {
            return Err(AppError::NotFound("no orders exist".into()));
        }
        Ok(orders)
    }

    pub async fn get_by_id(&self, order_id: i64) -> Result<Order, AppError> {
        if !is_valid_id(order_id) {
            return Err(AppError::BadRequest(format!(
                "{order_id} is not a valid order id"
            )));
        }
        self.repo
            .get_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))
    }

    pub async fn add(&self, new_order: Order) -> Result<Order, AppError> {
        validate(&new_order, NEW_ORDER_RULES)?;
        self.repo.add(new_order).await
    }

    pub async fn update(&self, updated: Order) -> Result<bool, AppError> {
        validate(&updated, UPDATE_ORDER_RULES)?;
        self.repo.update(&updated).await
    }

    pub async fn delete_by_id(&self, order_id: i64) -> Result<bool, AppError> {
        if !is_valid_id(order_id) {
            return Err(AppError::BadRequest(format!(
                "{order_id} is not a valid order id"
            )));
        }
        self.repo.delete_by_id(order_id).await
    }
}
