use sqlx::{
    prelude::FromRow,
    types::{
        chrono::{DateTime, Utc},
        Json,
    },
};
use uuid::Uuid;

/// SQLite has no array type, list columns are stored as JSON text.
#[derive(FromRow)]
pub struct ProjectModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: Uuid,
    name: String,
    description: String,
    banner_image: String,
    logo_url: String,
    preview_images: Json<Vec<String>>,
    categories: Json<Vec<String>>,
    blockchain: String,
    project_stage: String,
    website: Option<String>,
    discord: Option<String>,
    twitter: Option<String>,
    status: String,
    rejected_reason: Option<String>,
}

impl ProjectModel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        user_id: &Uuid,
        name: &str,
        description: &str,
        banner_image: &str,
        logo_url: &str,
        preview_images: &[String],
        categories: &[String],
        blockchain: &str,
        project_stage: &str,
        website: &Option<String>,
        discord: &Option<String>,
        twitter: &Option<String>,
        status: &str,
        rejected_reason: &Option<String>,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            user_id: *user_id,
            name: name.to_owned(),
            description: description.to_owned(),
            banner_image: banner_image.to_owned(),
            logo_url: logo_url.to_owned(),
            preview_images: Json(preview_images.to_vec()),
            categories: Json(categories.to_vec()),
            blockchain: blockchain.to_owned(),
            project_stage: project_stage.to_owned(),
            website: website.clone(),
            discord: discord.clone(),
            twitter: twitter.clone(),
            status: status.to_owned(),
            rejected_reason: rejected_reason.clone(),
        }
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

    pub fn preview_images(&self) -> &Json<Vec<String>> {
        &self.preview_images
    }

    pub fn categories(&self) -> &Json<Vec<String>> {
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

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn rejected_reason(&self) -> &Option<String> {
        &self.rejected_reason
    }
}
