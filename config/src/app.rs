use serde::Deserialize;

#[derive(Deserialize)]
pub struct AppConfig {
    mode: AppConfigMode,
    deployment_url: Option<String>,
    branch_url: Option<String>,
    auth_url: Option<String>,
    sign_in_url: Option<String>,
}

impl AppConfig {
    pub fn mode(&self) -> &AppConfigMode {
        &self.mode
    }

    pub fn deployment_url(&self) -> &Option<String> {
        &self.deployment_url
    }

    pub fn branch_url(&self) -> &Option<String> {
        &self.branch_url
    }

    pub fn auth_url(&self) -> &Option<String> {
        &self.auth_url
    }

    pub fn sign_in_url(&self) -> &Option<String> {
        &self.sign_in_url
    }
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum AppConfigMode {
    Development,
    Production,
}
