use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct RegisterReqJson {
    #[validate(email)]
    email: String,
    #[validate(length(min = 8))]
    password: String,
}

impl RegisterReqJson {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Serialize)]
pub struct RegisterResJson {
    id: Uuid,
}

impl RegisterResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}

#[derive(Deserialize, Validate)]
pub struct PasswordBasedReqJson {
    #[validate(email)]
    email: String,
    password: String,
}

impl PasswordBasedReqJson {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Serialize)]
pub struct AuthTokenResJson {
    token: String,
}

impl AuthTokenResJson {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }
}
