//! Shared application state: the four services over their Pg repositories.
//! The pool is constructed once at startup and injected here; nothing else
//! in the crate reaches for a global.

use crate::repo::{
    PgOrderLineRepository, PgOrderRepository, PgProductRepository, PgUserRepository,
};
use crate::service::{OrderLineService, OrderService, ProductService, UserService};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService<PgUserRepository>>,
    pub orders: Arc<OrderService<PgOrderRepository>>,
    pub order_lines: Arc<OrderLineService<PgOrderLineRepository>>,
    pub products: Arc<ProductService<PgProductRepository>>,
    /// Kept for the readiness probe.
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: Arc::new(UserService::new(PgUserRepository::new(pool.clone()))),
            orders: Arc::new(OrderService::new(PgOrderRepository::new(pool.clone()))),
            order_lines: Arc::new(OrderLineService::new(PgOrderLineRepository::new(pool.clone()))),
            products: Arc::new(ProductService::new(PgProductRepository::new(pool.clone()))),
            pool,
        }
    }
}
