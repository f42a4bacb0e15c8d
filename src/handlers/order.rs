//! Order endpoints.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::AdminRole;
use crate::models::Order;
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
    let orders = state.orders.get_all().await?;
    Ok(success_many(orders))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let order = state.orders.get_by_id(id).await?;
    Ok(success_one_ok(order))
}

pub async fn create(
    State(state): State<AppState>,
    Json(new_order): Json<Order>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.orders.add(new_order).await?;
    Ok(success_one(created))
}

pub async fn update(
    State(state): State<AppState>,
    Json(order): Json<Order>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.orders.update(order).await?;
    Ok(success_one_ok(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    _guard: AdminRole,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let deleted = state.orders.delete_by_id(id).await?;
    Ok(success_one_ok(deleted))
}
