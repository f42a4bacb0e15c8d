//! Data access: one parameterized statement per call against an injected pool.
//!
//! Every sqlx failure is collapsed here into an opaque [`AppError::Internal`];
//! callers never see raw store errors. Write paths additionally translate
//! constraint violations into [`AppError::Conflict`] since the service-level
//! uniqueness pre-checks cannot close the check-then-act race.

mod order;
mod order_line;
mod product;
mod user;

pub use order::{OrderRepository, PgOrderRepository};
pub use order_line::{OrderLineRepository, PgOrderLineRepository};
pub use product::{PgProductRepository, ProductRepository};
pub use user::{PgUserRepository, UserLookupKey, UserRepository};

use crate::error::AppError;
use async_trait::async_trait;

/// Uniform per-entity data-access contract.
#[async_trait]
pub trait CrudRepository<T>: Send + Sync {
    /// Unfiltered select ordered by primary key; possibly empty.
    async fn get_all(&self) -> Result<Vec<T>, AppError>;
    /// Single-row select by primary key; `None` when no row matches.
    async fn get_by_id(&self, id: i64) -> Result<Option<T>, AppError>;
    /// Insert; the returned entity carries the store-assigned primary key.
    async fn add(&self, new: T) -> Result<T, AppError>;
    /// Full-row update keyed by primary id; true iff a row was affected.
    async fn update(&self, updated: &T) -> Result<bool, AppError>;
    /// Delete keyed by primary id; true iff a row was affected.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}

/// Collapse a read failure. The detail goes to the log, not the caller.
pub(crate) fn db_err(op: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        tracing::error!(op, error = %e, "data access failed");
        AppError::Internal(e)
    }
}

/// Collapse a write failure, surfacing constraint violations as conflicts.
/// 23505 = unique_violation, 23503 = foreign_key_violation.
pub(crate) fn write_err(op: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| {
        if let Some(db) = e.as_database_error() {
            match db.code().as_deref() {
                Some("23505") => {
                    return AppError::Conflict(
                        "a record with the same unique value already exists".into(),
                    )
                }
                Some("23503") => {
                    return AppError::Conflict(
                        "the record references a row that does not exist".into(),
                    )
                }
                _ => {}
            }
        }
        tracing::error!(op, error = %e, "data access failed");
        AppError::Internal(e)
    }
}
