//! Admin guard: an opaque pre-condition on listing and deleting routes.
//! Trusts an upstream proxy to have resolved the caller's role into the
//! `X-User-Role` header; this is deliberately not a session system.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts, http::HeaderMap};

/// Header carrying the caller's resolved role.
pub const USER_ROLE_HEADER: &str = "X-User-Role";

/// Extractor that admits only admin callers.
#[derive(Clone, Debug)]
pub struct AdminRole;

pub(crate) fn is_admin(headers: &HeaderMap) -> bool {
    headers
        .get(USER_ROLE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        == Some("Admin")
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminRole
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if is_admin(&parts.headers) {
            Ok(AdminRole)
        } else {
            Err(AppError::Authentication)
        }
    }
}
