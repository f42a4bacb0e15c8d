//! User endpoints.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::AdminRole;
use crate::models::User;
use crate::response::{success_many, success_one, success_one_ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub async fn list(
    State(state): State<AppState>,
    _guard: AdminRole,
) -> Result<impl IntoResponse, AppError> {
    let users = state.users.get_all().await?;
    Ok(success_many(users))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let user = state.users.get_by_id(id).await?;
    Ok(success_one_ok(user))
}

pub async fn get_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.get_by_username(&username).await?;
    Ok(success_one_ok(user))
}

pub async fn register(
    State(state): State<AppState>,
    Json(new_user): Json<User>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.users.add(new_user).await?;
    Ok(success_one(created))
}

pub async fn update(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> Result<impl IntoResponse, AppError> {
    let updated = state.users.update(user).await?;
    Ok(success_one_ok(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    _guard: AdminRole,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let deleted = state.users.delete_by_id(id).await?;
    Ok(success_one_ok(deleted))
}

pub async fn authenticate(
    State(state): State<AppState>,
    Json(creds): Json<Credentials>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.users.authenticate(&creds.username, &creds.password).await?;
    Ok(success_one_ok(user))
}
