use anyhow::Result;
use sqlx::{
    postgres::{PgArguments, PgPoolOptions, PgQueryResult, PgRow},
    query::{Query, QueryAs},
    Error, Pool, Postgres,
};

use crate::query::{project, user};

pub struct PostgresDb {
    pool: Pool<Postgres>,
}

impl PostgresDb {
    pub async fn new(url: &str, max_connections: &u32) -> Result<Self> {
        ks_log::info(Some("⚡"), "[PostgreSQL] Initializing component");

        let pool = PgPoolOptions::new()
            .max_connections(*max_connections)
            .connect(url)
            .await?;

        Self::init(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn execute(
        &self,
        query: Query<'_, Postgres, PgArguments>,
    ) -> Result<PgQueryResult, Error> {
        query.execute(&self.pool).await
    }

    pub async fn fetch_optional<T: Send + Unpin + for<'r> sqlx::FromRow<'r, PgRow>>(
        &self,
        query: QueryAs<'_, Postgres, T, PgArguments>,
    ) -> Result<Option<T>, Error> {
        query.fetch_optional(&self.pool).await
    }

    pub async fn fetch_all<T: Send + Unpin + for<'r> sqlx::FromRow<'r, PgRow>>(
        &self,
        query: QueryAs<'_, Postgres, T, PgArguments>,
    ) -> Result<Vec<T>, Error> {
        query.fetch_all(&self.pool).await
    }

    async fn init(pool: &Pool<Postgres>) -> Result<()> {
        user::init(pool).await?;
        project::init(pool).await?;
        Ok(())
    }
}
