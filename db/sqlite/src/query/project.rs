use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::project::ProjectModel};

const INSERT: &str = "INSERT INTO \"projects\" (\"id\", \"created_at\", \"updated_at\", \"user_id\", \"name\", \"description\", \"banner_image\", \"logo_url\", \"preview_images\", \"categories\", \"blockchain\", \"project_stage\", \"website\", \"discord\", \"twitter\", \"status\", \"rejected_reason\") VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const UPDATE: &str = "UPDATE \"projects\" SET \"updated_at\" = ?, \"name\" = ?, \"description\" = ?, \"banner_image\" = ?, \"logo_url\" = ?, \"preview_images\" = ?, \"categories\" = ?, \"blockchain\" = ?, \"project_stage\" = ?, \"website\" = ?, \"discord\" = ?, \"twitter\" = ?, \"status\" = ?, \"rejected_reason\" = ? WHERE \"id\" = ?";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"user_id\", \"name\", \"description\", \"banner_image\", \"logo_url\", \"preview_images\", \"categories\", \"blockchain\", \"project_stage\", \"website\", \"discord\", \"twitter\", \"status\", \"rejected_reason\" FROM \"projects\" WHERE \"id\" = ?";
const SELECT_OWNED: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"user_id\", \"name\", \"description\", \"banner_image\", \"logo_url\", \"preview_images\", \"categories\", \"blockchain\", \"project_stage\", \"website\", \"discord\", \"twitter\", \"status\", \"rejected_reason\" FROM \"projects\" WHERE \"id\" = ? AND \"user_id\" = ?";
const SELECT_MANY_BY_USER_ID: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"user_id\", \"name\", \"description\", \"banner_image\", \"logo_url\", \"preview_images\", \"categories\", \"blockchain\", \"project_stage\", \"website\", \"discord\", \"twitter\", \"status\", \"rejected_reason\" FROM \"projects\" WHERE \"user_id\" = ? ORDER BY \"created_at\" DESC";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"user_id\", \"name\", \"description\", \"banner_image\", \"logo_url\", \"preview_images\", \"categories\", \"blockchain\", \"project_stage\", \"website\", \"discord\", \"twitter\", \"status\", \"rejected_reason\" FROM \"projects\" ORDER BY \"created_at\" DESC";
const SELECT_MANY_BY_STATUS: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"user_id\", \"name\", \"description\", \"banner_image\", \"logo_url\", \"preview_images\", \"categories\", \"blockchain\", \"project_stage\", \"website\", \"discord\", \"twitter\", \"status\", \"rejected_reason\" FROM \"projects\" WHERE \"status\" = ? ORDER BY \"created_at\" DESC";
const DELETE: &str = "DELETE FROM \"projects\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    ks_log::info(Some("🔧"), "[SQLite] Setting up projects table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"projects\" (\"id\" blob, \"created_at\" datetime, \"updated_at\" datetime, \"user_id\" blob, \"name\" text, \"description\" text, \"banner_image\" text, \"logo_url\" text, \"preview_images\" text, \"categories\" text, \"blockchain\" text, \"project_stage\" text, \"website\" text, \"discord\" text, \"twitter\" text, \"status\" text, \"rejected_reason\" text, PRIMARY KEY (\"id\"))").await?;
    pool.execute("CREATE INDEX IF NOT EXISTS \"projects_user_id\" ON \"projects\" (\"user_id\")").await?;

    pool.prepare(INSERT).await?;
    pool.prepare(SELECT).await?;
    pool.prepare(SELECT_OWNED).await?;
    pool.prepare(SELECT_MANY_BY_USER_ID).await?;
    pool.prepare(SELECT_MANY).await?;
    pool.prepare(SELECT_MANY_BY_STATUS).await?;
    pool.prepare(UPDATE).await?;
    pool.prepare(DELETE).await?;

    Ok(())
}

impl SqliteDb {
    pub async fn insert_project(&self, value: &ProjectModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.user_id())
                .bind(value.name())
                .bind(value.description())
                .bind(value.banner_image())
                .bind(value.logo_url())
                .bind(value.preview_images())
                .bind(value.categories())
                .bind(value.blockchain())
                .bind(value.project_stage())
                .bind(value.website())
                .bind(value.discord())
                .bind(value.twitter())
                .bind(value.status())
                .bind(value.rejected_reason()),
        )
        .await?;
        Ok(())
    }

    /// Zero or one project. With `user_id` set, a project owned by someone
    /// else is indistinguishable from a missing one.
    pub async fn select_project(
        &self,
        id: &Uuid,
        user_id: &Option<Uuid>,
    ) -> Result<Option<ProjectModel>> {
        Ok(match user_id {
            Some(user_id) => {
                self.fetch_optional(sqlx::query_as(SELECT_OWNED).bind(id).bind(user_id))
                    .await?
            }
            None => self.fetch_optional(sqlx::query_as(SELECT).bind(id)).await?,
        })
    }

    pub async fn select_many_projects_by_user_id(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<ProjectModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_BY_USER_ID).bind(user_id))
            .await?)
    }

    pub async fn select_many_projects(&self, status: &Option<String>) -> Result<Vec<ProjectModel>> {
        Ok(match status {
            Some(status) => {
                self.fetch_all(sqlx::query_as(SELECT_MANY_BY_STATUS).bind(status))
                    .await?
            }
            None => self.fetch_all(sqlx::query_as(SELECT_MANY)).await?,
        })
    }

    pub async fn update_project(&self, value: &ProjectModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.name())
                .bind(value.description())
                .bind(value.banner_image())
                .bind(value.logo_url())
                .bind(value.preview_images())
                .bind(value.categories())
                .bind(value.blockchain())
                .bind(value.project_stage())
                .bind(value.website())
                .bind(value.discord())
                .bind(value.twitter())
                .bind(value.status())
                .bind(value.rejected_reason())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_project(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
