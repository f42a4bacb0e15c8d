//! Order-line endpoints.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::AdminRole;
use crate::models::OrderLine;
use crate::response::{success_many, success_one, success_one_ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list(
    State(state): State<AppState>,
    _guard: AdminRole,
) -> Result<impl IntoResponse, AppError> {
    let lines = state.order_lines.get_all().await?;
    Ok(success_many(lines))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let line = state.order_lines.get_by_id(id).await?;
    Ok(success_one_ok(line))
}

/// Composite natural-key lookup: /orderlines/order/:order_id/product/:product_id
pub async fn get_by_order_and_product(
    State(state): State<AppState>,
    Path((order_id_str, product_id_str)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let order_id = parse_id(&order_id_str)?;
    let product_id = parse_id(&product_id_str)?;
    let line = state
        .order_lines
        .get_by_order_and_product(order_id, product_id)
        .await?;
    Ok(success_one_ok(line))
}

pub async fn create(
    State(state): State<AppState>,
    Json(new_line): Json<OrderLine>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.order_lines.add(new_line).await?;
    Ok(success_one(created))
}

pub async fn update(
    State(state): State<AppState>,
    Json(line): Json<OrderLine>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.order_lines.update(line).await?;
    Ok(success_one_ok(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    _guard: AdminRole,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let deleted = state.order_lines.delete_by_id(id).await?;
    Ok(success_one_ok(deleted))
}
