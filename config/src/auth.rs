use serde::Deserialize;

#[derive(Deserialize)]
pub struct AuthConfig {
    user_registration: bool,
    admin: Option<AuthAdminConfig>,
}

impl AuthConfig {
    pub fn user_registration(&self) -> &bool {
        &self.user_registration
    }

    pub fn admin(&self) -> &Option<AuthAdminConfig> {
        &self.admin
    }
}

/// Account promoted to admin at startup, created when missing.
#[derive(Deserialize)]
pub struct AuthAdminConfig {
    email: String,
    password: String,
}

impl AuthAdminConfig {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}
