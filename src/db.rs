//! Pool construction and idempotent schema bootstrap.

use crate::error::AppError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

/// Table DDL, ordered so foreign-key targets exist first.
const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        role_name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        order_id BIGSERIAL PRIMARY KEY,
        order_date DATE NOT NULL,
        order_comments TEXT NOT NULL,
        user_id BIGINT NOT NULL REFERENCES users(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        product_id BIGSERIAL PRIMARY KEY,
        product_name TEXT NOT NULL,
        description TEXT NOT NULL,
        product_cost NUMERIC(12, 2) NOT NULL,
        created_time TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS order_line (
        order_line_id BIGSERIAL PRIMARY KEY,
        product_id BIGINT NOT NULL REFERENCES products(product_id),
        order_id BIGINT NOT NULL REFERENCES orders(order_id),
        quantity INTEGER NOT NULL,
        UNIQUE (product_id, order_id)
    )
    "#,
];

/// Build the shared pool. Connections carry a server-side statement timeout
/// and acquisition is bounded.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, AppError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?
        .options([("statement_timeout", "5000")]);
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the four entity tables if missing. Idempotent; not a migrations
/// framework.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to
/// the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_database_name_from_url() {
        let (admin, name) =
            parse_db_name_from_url("postgres://localhost:5432/order_api").unwrap();
        assert_eq!(admin, "postgres://localhost:5432/postgres");
        assert_eq!(name, "order_api");
    }

    #[test]
    fn ignores_query_params_in_database_name() {
        let (_, name) =
            parse_db_name_from_url("postgres://localhost/order_api?sslmode=disable").unwrap();
        assert_eq!(name, "order_api");
    }
}
