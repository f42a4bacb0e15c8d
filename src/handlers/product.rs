//! Product endpoints.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::AdminRole;
use crate::models::Product;
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
    let products = state.products.get_all().await?;
    Ok(success_many(products))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let product = state.products.get_by_id(id).await?;
    Ok(success_one_ok(product))
}

pub async fn create(
    State(state): State<AppState>,
    Json(new_product): Json<Product>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.products.add(new_product).await?;
    Ok(success_one(created))
}

pub async fn update(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.products.update(product).await?;
    Ok(success_one_ok(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    _guard: AdminRole,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let deleted = state.products.delete_by_id(id).await?;
    Ok(success_one_ok(deleted))
}
