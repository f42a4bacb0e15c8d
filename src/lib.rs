//! order-api: layered REST backend for users, orders, order lines, and
//! products over PostgreSQL.

pub mod db;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod repo;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod validation;

pub use db::{connect, ensure_database_exists, ensure_tables};
pub use error::AppError;
pub use routes::{app, common_routes};
pub use state::AppState;
