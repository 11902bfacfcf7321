use chrono::{DateTime, Utc};
use ks_dao::project::{ProjectChanges, ProjectDao, ProjectFields, ProjectStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
pub struct InsertOneProjectReqJson {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    banner_image: String,
    #[serde(default)]
    logo_url: String,
    #[serde(default)]
    preview_images: Vec<String>,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    blockchain: String,
    #[serde(default)]
    project_stage: String,
    website: Option<String>,
    discord: Option<String>,
    twitter: Option<String>,
}

impl InsertOneProjectReqJson {
    pub fn into_fields(self) -> ProjectFields {
        ProjectFields {
            name: self.name,
            description: self.description,
            banner_image: self.banner_image,
            logo_url: self.logo_url,
            preview_images: self.preview_images,
            categories: self.categories,
            blockchain: self.blockchain,
            project_stage: self.project_stage,
            website: self.website,
            discord: self.discord,
            twitter: self.twitter,
        }
    }
}

#[derive(Deserialize)]
pub struct ProjectReqPath {
    project_id: Uuid,
}

impl ProjectReqPath {
    pub fn project_id(&self) -> &Uuid {
        &self.project_id
    }
}

#[derive(Deserialize)]
pub struct UpdateOneProjectReqJson {
    name: Option<String>,
    description: Option<String>,
    banner_image: Option<String>,
    logo_url: Option<String>,
    preview_images: Option<Vec<String>>,
    categories: Option<Vec<String>>,
    blockchain: Option<String>,
    project_stage: Option<String>,
    website: Option<String>,
    discord: Option<String>,
    twitter: Option<String>,
}

impl UpdateOneProjectReqJson {
    pub fn into_changes(self) -> ProjectChanges {
        ProjectChanges {
            name: self.name,
            description: self.description,
            banner_image: self.banner_image,
            logo_url: self.logo_url,
            preview_images: self.preview_images,
            categories: self.categories,
            blockchain: self.blockchain,
            project_stage: self.project_stage,
            website: self.website,
            discord: self.discord,
            twitter: self.twitter,
        }
    }
}

#[derive(Deserialize)]
pub struct RejectOneProjectReqJson {
    #[serde(default)]
    reason: String,
}

impl RejectOneProjectReqJson {
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[derive(Serialize)]
pub struct ProjectResJson {
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

impl ProjectResJson {
    pub fn new(project: &ProjectDao) -> Self {
        Self {
            id: *project.id(),
            created_at: *project.created_at(),
            updated_at: *project.updated_at(),
            user_id: *project.user_id(),
            name: project.name().to_owned(),
            description: project.description().to_owned(),
            banner_image: project.banner_image().to_owned(),
            logo_url: project.logo_url().to_owned(),
            preview_images: project.preview_images().to_vec(),
            categories: project.categories().to_vec(),
            blockchain: project.blockchain().to_owned(),
            project_stage: project.project_stage().to_owned(),
            website: project.website().clone(),
            discord: project.discord().clone(),
            twitter: project.twitter().clone(),
            status: *project.status(),
            rejected_reason: project.rejected_reason().clone(),
        }
    }
}

#[derive(Serialize)]
pub struct ProjectIDResJson {
    id: Uuid,
}

impl ProjectIDResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}
