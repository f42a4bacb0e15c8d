//! Routers: per-entity CRUD surfaces plus common service routes.

mod common;

pub use common::common_routes;

use crate::handlers::{order, order_line, product, user};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(user::list).post(user::register).put(user::update))
        .route("/auth", post(user::authenticate))
        .route("/username/:username", get(user::get_by_username))
        .route("/:id", get(user::get_by_id).delete(user::remove))
        .with_state(state)
}

pub fn order_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(order::list).post(order::create).put(order::update))
        .route("/:id", get(order::get_by_id).delete(order::remove))
        .with_state(state)
}

pub fn order_line_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(order_line::list).post(order_line::create).put(order_line::update),
        )
        .route(
            "/order/:order_id/product/:product_id",
            get(order_line::get_by_order_and_product),
        )
        .route("/:id", get(order_line::get_by_id).delete(order_line::remove))
        .with_state(state)
}

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(product::list).post(product::create).put(product::update))
        .route("/:id", get(product::get_by_id).delete(product::remove))
        .with_state(state)
}

/// The full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/users", user_routes(state.clone()))
        .nest("/orders", order_routes(state.clone()))
        .nest("/orderlines", order_line_routes(state.clone()))
        .nest("/products", product_routes(state))
}
