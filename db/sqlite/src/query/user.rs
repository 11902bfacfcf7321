use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::user::UserModel};

const INSERT: &str = "INSERT INTO \"users\" (\"id\", \"created_at\", \"updated_at\", \"email\", \"password_hash\", \"role\") VALUES (?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"email\", \"password_hash\", \"role\" FROM \"users\" WHERE \"id\" = ?";
const SELECT_BY_EMAIL: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"email\", \"password_hash\", \"role\" FROM \"users\" WHERE \"email\" = ?";
const UPDATE: &str = "UPDATE \"users\" SET \"updated_at\" = ?, \"password_hash\" = ?, \"role\" = ? WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    ks_log::info(Some("🔧"), "[SQLite] Setting up users table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"users\" (\"id\" blob, \"created_at\" datetime, \"updated_at\" datetime, \"email\" text UNIQUE, \"password_hash\" text, \"role\" text, PRIMARY KEY (\"id\"))").await?;

    pool.prepare(INSERT).await?;
    pool.prepare(SELECT).await?;
    pool.prepare(SELECT_BY_EMAIL).await?;
    pool.prepare(UPDATE).await?;

    Ok(())
}

impl SqliteDb {
    pub async fn insert_user(&self, value: &UserModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.email())
                .bind(value.password_hash())
                .bind(value.role()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_user(&self, id: &Uuid) -> Result<Option<UserModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_user_by_email(&self, email: &str) -> Result<Option<UserModel>> {
        Ok(self
            .fetch_optional(sqlx::query_as(SELECT_BY_EMAIL).bind(email))
            .await?)
    }

    pub async fn update_user(&self, value: &UserModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.password_hash())
                .bind(value.role())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }
}
