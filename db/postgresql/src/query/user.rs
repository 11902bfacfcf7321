use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::user::UserModel};

const INSERT: &str = "INSERT INTO \"users\" (\"id\", \"created_at\", \"updated_at\", \"email\", \"password_hash\", \"role\") VALUES ($1, $2, $3, $4, $5, $6)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"email\", \"password_hash\", \"role\" FROM \"users\" WHERE \"id\" = $1";
const SELECT_BY_EMAIL: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"email\", \"password_hash\", \"role\" FROM \"users\" WHERE \"email\" = $1";
const UPDATE: &str = "UPDATE \"users\" SET \"updated_at\" = $1, \"password_hash\" = $2, \"role\" = $3 WHERE \"id\" = $4";

pub async fn init(pool: &Pool<Postgres>) -> Result<()> {
    ks_log::info(Some("🔧"), "[PostgreSQL] Setting up users table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"users\" (\"id\" uuid, \"created_at\" timestamptz, \"updated_at\" timestamptz, \"email\" text UNIQUE, \"password_hash\" text, \"role\" text, PRIMARY KEY (\"id\"))").await?;

    pool.prepare(INSERT).await?;
    pool.prepare(SELECT).await?;
    pool.prepare(SELECT_BY_EMAIL).await?;
    pool.prepare(UPDATE).await?;

    Ok(())
}

impl PostgresDb {
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
