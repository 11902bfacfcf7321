use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use ks_db_postgresql::model::project::ProjectModel as ProjectPostgresModel;
use ks_db_sqlite::model::project::ProjectModel as ProjectSqliteModel;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;
use uuid::Uuid;

use crate::Db;

#[derive(
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
)]
pub enum ProjectStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
#[strum(serialize_all = "lowercase")]
pub enum ProjectAction {
    Edit,
    Submit,
    Approve,
    Reject,
}

impl ProjectStatus {
    /// Status reached by applying `action`, `None` when the moderation
    /// workflow doesn't allow it.
    pub fn after(&self, action: &ProjectAction) -> Option<Self> {
        match (self, action) {
            (Self::Draft | Self::Rejected, ProjectAction::Edit) => Some(Self::Draft),
            (Self::Draft, ProjectAction::Submit) => Some(Self::Pending),
            (Self::Pending, ProjectAction::Approve) => Some(Self::Approved),
            (Self::Pending, ProjectAction::Reject) => Some(Self::Rejected),
            _ => None,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Can't {action} a project with status '{status}'")]
    InvalidTransition {
        status: ProjectStatus,
        action: ProjectAction,
    },
    #[error("A reason is required to reject a project")]
    MissingRejectionReason,
    #[error("Project name can't be empty")]
    EmptyName,
}

/// Which projects a lookup may return.
///
/// `OwnedBy` folds the ownership check into the query itself, so a project
/// that exists but belongs to someone else comes back exactly like a missing
/// one. Callers must keep it that way and never look the id up unscoped to
/// produce a different error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProjectScope {
    Any,
    OwnedBy(Uuid),
}

impl ProjectScope {
    pub fn owner(&self) -> Option<Uuid> {
        match self {
            Self::Any => None,
            Self::OwnedBy(user_id) => Some(*user_id),
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct ProjectFields {
    pub name: String,
    pub description: String,
    pub banner_image: String,
    pub logo_url: String,
    pub preview_images: Vec<String>,
    pub categories: Vec<String>,
    pub blockchain: String,
    pub project_stage: String,
    pub website: Option<String>,
    pub discord: Option<String>,
    pub twitter: Option<String>,
}

/// Partial update. An empty string on a link clears it.
#[derive(Clone, Default, Debug)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub banner_image: Option<String>,
    pub logo_url: Option<String>,
    pub preview_images: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub blockchain: Option<String>,
    pub project_stage: Option<String>,
    pub website: Option<String>,
    pub discord: Option<String>,
    pub twitter: Option<String>,
}

impl ProjectChanges {
    pub fn is_all_none(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.banner_image.is_none()
            && self.logo_url.is_none()
            && self.preview_images.is_none()
            && self.categories.is_none()
            && self.blockchain.is_none()
            && self.project_stage.is_none()
            && self.website.is_none()
            && self.discord.is_none()
            && self.twitter.is_none()
    }
}

#[derive(Clone, Debug)]
pub struct ProjectDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: Uuid,
    name: String,
    description: String,
    banner_image: String,
    logo_url: String,
    preview_images: Vec<String>,
    categories: Vec<String>,
    blockchain: String,
    project_stage: String,
    website: Option<String>,
    discord: Option<String>,
    twitter: Option<String>,
    status: ProjectStatus,
    rejected_reason: Option<String>,
}

impl ProjectDao {
    pub fn new(user_id: &Uuid, fields: ProjectFields) -> Result<Self, ProjectError> {
        if fields.name.trim().is_empty() {
            return Err(ProjectError::EmptyName);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            user_id: *user_id,
            name: fields.name.trim().to_owned(),
            description: fields.description,
            banner_image: fields.banner_image,
            logo_url: fields.logo_url,
            preview_images: fields.preview_images,
            categories: dedup_categories(fields.categories),
            blockchain: fields.blockchain,
            project_stage: fields.project_stage,
            website: normalize_link(fields.website),
            discord: normalize_link(fields.discord),
            twitter: normalize_link(fields.twitter),
            status: ProjectStatus::Draft,
            rejected_reason: None,
        })
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn banner_image(&self) -> &str {
        &self.banner_image
    }

    pub fn logo_url(&self) -> &str {
        &self.logo_url
    }

    pub fn preview_images(&self) -> &[String] {
        &self.preview_images
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn blockchain(&self) -> &str {
        &self.blockchain
    }

    pub fn project_stage(&self) -> &str {
        &self.project_stage
    }

    pub fn website(&self) -> &Option<String> {
        &self.website
    }

    pub fn discord(&self) -> &Option<String> {
        &self.discord
    }

    pub fn twitter(&self) -> &Option<String> {
        &self.twitter
    }

    pub fn status(&self) -> &ProjectStatus {
        &self.status
    }

    pub fn rejected_reason(&self) -> &Option<String> {
        &self.rejected_reason
    }

    /// Editing a rejected project sends it back to draft.
    pub fn apply_changes(&mut self, changes: &ProjectChanges) -> Result<(), ProjectError> {
        if let Some(name) = &changes.name {
            if name.trim().is_empty() {
                return Err(ProjectError::EmptyName);
            }
        }
        self.transition(&ProjectAction::Edit)?;

        if let Some(name) = &changes.name {
            self.name = name.trim().to_owned();
        }
        if let Some(description) = &changes.description {
            self.description = description.to_owned();
        }
        if let Some(banner_image) = &changes.banner_image {
            self.banner_image = banner_image.to_owned();
        }
        if let Some(logo_url) = &changes.logo_url {
            self.logo_url = logo_url.to_owned();
        }
        if let Some(preview_images) = &changes.preview_images {
            self.preview_images = preview_images.clone();
        }
        if let Some(categories) = &changes.categories {
            self.categories = dedup_categories(categories.clone());
        }
        if let Some(blockchain) = &changes.blockchain {
            self.blockchain = blockchain.to_owned();
        }
        if let Some(project_stage) = &changes.project_stage {
            self.project_stage = project_stage.to_owned();
        }
        if let Some(website) = &changes.website {
            self.website = normalize_link(Some(website.to_owned()));
        }
        if let Some(discord) = &changes.discord {
            self.discord = normalize_link(Some(discord.to_owned()));
        }
        if let Some(twitter) = &changes.twitter {
            self.twitter = normalize_link(Some(twitter.to_owned()));
        }

        Ok(())
    }

    pub fn submit(&mut self) -> Result<(), ProjectError> {
        self.transition(&ProjectAction::Submit)
    }

    pub fn approve(&mut self) -> Result<(), ProjectError> {
        self.transition(&ProjectAction::Approve)
    }

    pub fn reject(&mut self, reason: &str) -> Result<(), ProjectError> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(ProjectError::MissingRejectionReason);
        }
        self.transition(&ProjectAction::Reject)?;
        self.rejected_reason = Some(reason.to_owned());
        Ok(())
    }

    fn transition(&mut self, action: &ProjectAction) -> Result<(), ProjectError> {
        match self.status.after(action) {
            Some(status) => {
                if status != ProjectStatus::Rejected {
                    self.rejected_reason = None;
                }
                self.status = status;
                Ok(())
            }
            None => Err(ProjectError::InvalidTransition {
                status: self.status,
                action: *action,
            }),
        }
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_project(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_project(&self.to_sqlitedb_model()).await,
        }
    }

    /// Point lookup restricted to `scope`. See [`ProjectScope`] for why a
    /// foreign project yields `None` rather than an authorization error.
    pub async fn db_select(db: &Db, id: &Uuid, scope: &ProjectScope) -> Result<Option<Self>> {
        let owner = scope.owner();
        match db {
            Db::PostgresqlDb(db) => db
                .select_project(id, &owner)
                .await?
                .map(|model| Self::from_postgresdb_model(&model))
                .transpose(),
            Db::SqliteDb(db) => db
                .select_project(id, &owner)
                .await?
                .map(|model| Self::from_sqlitedb_model(&model))
                .transpose(),
        }
    }

    pub async fn db_select_many_by_user_id(db: &Db, user_id: &Uuid) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let projects = db.select_many_projects_by_user_id(user_id).await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_postgresdb_model(project)?);
                }
                Ok(projects_data)
            }
            Db::SqliteDb(db) => {
                let projects = db.select_many_projects_by_user_id(user_id).await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_sqlitedb_model(project)?);
                }
                Ok(projects_data)
            }
        }
    }

    pub async fn db_select_many(db: &Db, status: &Option<ProjectStatus>) -> Result<Vec<Self>> {
        let status = status.map(|status| status.as_ref().to_owned());
        match db {
            Db::PostgresqlDb(db) => {
                let projects = db.select_many_projects(&status).await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_postgresdb_model(project)?);
                }
                Ok(projects_data)
            }
            Db::SqliteDb(db) => {
                let projects = db.select_many_projects(&status).await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_sqlitedb_model(project)?);
                }
                Ok(projects_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_project(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_project(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_project(id).await,
            Db::SqliteDb(db) => db.delete_project(id).await,
        }
    }

    fn parse_status(status: &str) -> Result<ProjectStatus> {
        ProjectStatus::from_str(status).map_err(|_| anyhow!("Unknown project status '{status}'"))
    }

    fn from_postgresdb_model(model: &ProjectPostgresModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            user_id: *model.user_id(),
            name: model.name().to_owned(),
            description: model.description().to_owned(),
            banner_image: model.banner_image().to_owned(),
            logo_url: model.logo_url().to_owned(),
            preview_images: model.preview_images().to_vec(),
            categories: model.categories().to_vec(),
            blockchain: model.blockchain().to_owned(),
            project_stage: model.project_stage().to_owned(),
            website: model.website().clone(),
            discord: model.discord().clone(),
            twitter: model.twitter().clone(),
            status: Self::parse_status(model.status())?,
            rejected_reason: model.rejected_reason().clone(),
        })
    }

    fn to_postgresdb_model(&self) -> ProjectPostgresModel {
        ProjectPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.user_id,
            &self.name,
            &self.description,
            &self.banner_image,
            &self.logo_url,
            &self.preview_images,
            &self.categories,
            &self.blockchain,
            &self.project_stage,
            &self.website,
            &self.discord,
            &self.twitter,
            self.status.as_ref(),
            &self.rejected_reason,
        )
    }

    fn from_sqlitedb_model(model: &ProjectSqliteModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            user_id: *model.user_id(),
            name: model.name().to_owned(),
            description: model.description().to_owned(),
            banner_image: model.banner_image().to_owned(),
            logo_url: model.logo_url().to_owned(),
            preview_images: model.preview_images().0.clone(),
            categories: model.categories().0.clone(),
            blockchain: model.blockchain().to_owned(),
            project_stage: model.project_stage().to_owned(),
            website: model.website().clone(),
            discord: model.discord().clone(),
            twitter: model.twitter().clone(),
            status: Self::parse_status(model.status())?,
            rejected_reason: model.rejected_reason().clone(),
        })
    }

    fn to_sqlitedb_model(&self) -> ProjectSqliteModel {
        ProjectSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.user_id,
            &self.name,
            &self.description,
            &self.banner_image,
            &self.logo_url,
            &self.preview_images,
            &self.categories,
            &self.blockchain,
            &self.project_stage,
            &self.website,
            &self.discord,
            &self.twitter,
            self.status.as_ref(),
            &self.rejected_reason,
        )
    }
}

fn normalize_link(link: Option<String>) -> Option<String> {
    link.map(|link| link.trim().to_owned())
        .filter(|link| !link.is_empty())
}

/// Keeps the first occurrence of every category, in insertion order.
fn dedup_categories(categories: Vec<String>) -> Vec<String> {
    let mut deduped: Vec<String> = Vec::with_capacity(categories.len());
    for category in categories {
        let category = category.trim();
        if !category.is_empty() && !deduped.iter().any(|c| c == category) {
            deduped.push(category.to_owned());
        }
    }
    deduped
}
