//! User data access.

use super::{db_err, write_err, CrudRepository};
use crate::error::AppError;
use crate::mapper::map_user_row;
use crate::models::User;
use async_trait::async_trait;
use sqlx::PgPool;

const USER_COLUMNS: &str = "id, username, password, first_name, last_name, email, role_name";

/// Closed set of unique-key columns a user may be looked up by. Keeps caller
/// input out of SQL identifiers.
#[derive(Clone, Copy, Debug)]
pub enum UserLookupKey {
    Username,
    Email,
}

impl UserLookupKey {
    fn column(self) -> &'static str {
        match self {
            UserLookupKey::Username => "username",
            UserLookupKey::Email => "email",
        }
    }
}

#[async_trait]
pub trait UserRepository: CrudRepository<User> {
    async fn get_by_unique_key(
        &self,
        key: UserLookupKey,
        value: &str,
    ) -> Result<Option<User>, AppError>;

    async fn get_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<User> for PgUserRepository {
    async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err("users.get_all"))?;
        rows.iter()
            .map(map_user_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err("users.get_all"))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("users.get_by_id"))?;
        row.as_ref()
            .map(map_user_row)
            .transpose()
            .map_err(db_err("users.get_by_id"))
    }

    async fn add(&self, new: User) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO users (username, password, first_name, last_name, email, role_name) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {USER_COLUMNS}"
        );
        tracing::debug!(sql = %sql, username = %new.username, "query");
        let row = sqlx::query(&sql)
            .bind(&new.username)
            .bind(&new.password)
            .bind(&new.first_name)
            .bind(&new.last_name)
            .bind(&new.email)
            .bind(&new.role)
            .fetch_one(&self.pool)
            .await
            .map_err(write_err("users.add"))?;
        map_user_row(&row).map_err(db_err("users.add"))
    }

    async fn update(&self, updated: &User) -> Result<bool, AppError> {
        // COALESCE keeps the stored password when the caller omits it.
        let sql = "UPDATE users SET username = $2, password = COALESCE($3, password), \
                   first_name = $4, last_name = $5, email = $6, role_name = $7 WHERE id = $1";
        tracing::debug!(sql = %sql, id = updated.id, "query");
        let result = sqlx::query(sql)
            .bind(updated.id)
            .bind(&updated.username)
            .bind(&updated.password)
            .bind(&updated.first_name)
            .bind(&updated.last_name)
            .bind(&updated.email)
            .bind(&updated.role)
            .execute(&self.pool)
            .await
            .map_err(write_err("users.update"))?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM users WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(write_err("users.delete_by_id"))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_by_unique_key(
        &self,
        key: UserLookupKey,
        value: &str,
    ) -> Result<Option<User>, AppError> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users WHERE {} = $1",
            key.column()
        );
        tracing::debug!(sql = %sql, value, "query");
        let row = sqlx::query(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("users.get_by_unique_key"))?;
        row.as_ref()
            .map(map_user_row)
            .transpose()
            .map_err(db_err("users.get_by_unique_key"))
    }

    async fn get_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let sql =
            format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1 AND password = $2");
        tracing::debug!(sql = %sql, username, "query");
        let row = sqlx::query(&sql)
            .bind(username)
            .bind(password)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("users.get_by_credentials"))?;
        row.as_ref()
            .map(map_user_row)
            .transpose()
            .map_err(db_err("users.get_by_credentials"))
    }
}
