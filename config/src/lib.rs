use std::fs::File;

use anyhow::{bail, Result};
use serde::Deserialize;

use self::{
    api::ApiConfig, app::AppConfig, auth::AuthConfig, db::DbConfig,
    diagnostic::DiagnosticConfig, hash::HashConfig, log::LogConfig, token::TokenConfig,
};

pub mod api;
pub mod app;
pub mod auth;
pub mod db;
pub mod diagnostic;
pub mod hash;
pub mod log;
pub mod token;

#[derive(Deserialize)]
pub struct Config {
    app: AppConfig,
    log: LogConfig,
    hash: HashConfig,
    token: TokenConfig,
    auth: AuthConfig,
    db: DbConfig,
    api: ApiConfig,
    #[serde(default)]
    diagnostic: DiagnosticConfig,
}

impl Config {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn hash(&self) -> &HashConfig {
        &self.hash
    }

    pub fn token(&self) -> &TokenConfig {
        &self.token
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    pub fn diagnostic(&self) -> &DiagnosticConfig {
        &self.diagnostic
    }

    fn validate(self) -> Result<Self> {
        match (self.db.postgres().is_some(), self.db.sqlite().is_some()) {
            (true, true) => bail!("Only one database can be configured, found both postgres and sqlite"),
            (false, false) => bail!("No database configuration is specified"),
            _ => Ok(self),
        }
    }
}

pub fn from_path(path: &str) -> Result<Config> {
    let file = File::open(path)?;
    serde_yaml::from_reader::<_, Config>(file)?.validate()
}

pub fn from_str(yaml: &str) -> Result<Config> {
    serde_yaml::from_str::<Config>(yaml)?.validate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{app::AppConfigMode, hash::Argon2Algorithm};

    const SQLITE_CONFIG: &str = r#"
app:
  mode: development
  deployment_url: kiosk.example.com
  auth_url: https://kiosk.example.com/api/auth
log:
  display_level: true
  level_filter: info
hash:
  argon2:
    algorithm: Argon2id
    version: V0x13
    salt: c29tZXNhbHRzb21lc2FsdA
token:
  jwt:
    secret: not-so-secret
    expiry_duration: 3600
auth:
  user_registration: true
db:
  sqlite:
    path: kiosk.db
    max_connections: 4
api:
  rest:
    host: 127.0.0.1
    port: 8080
"#;

    #[test]
    fn parses_sqlite_config() {
        let config = from_str(SQLITE_CONFIG).unwrap();

        assert_eq!(config.app().mode(), &AppConfigMode::Development);
        assert_eq!(
            config.app().deployment_url().as_deref(),
            Some("kiosk.example.com")
        );
        assert!(config.app().branch_url().is_none());
        assert_eq!(config.hash().argon2().algorithm(), &Argon2Algorithm::Argon2id);
        assert_eq!(config.token().jwt().expiry_duration(), &3600);
        assert_eq!(config.api().rest().port(), &8080);
        assert!(config.auth().admin().is_none());
        assert_eq!(
            config.db().sqlite().as_ref().map(|db| db.path()),
            Some("kiosk.db")
        );
    }

    #[test]
    fn diagnostic_is_disabled_when_omitted() {
        let config = from_str(SQLITE_CONFIG).unwrap();

        assert!(!config.diagnostic().enabled());
    }

    #[test]
    fn rejects_missing_database() {
        let yaml = SQLITE_CONFIG.replace(
            "db:\n  sqlite:\n    path: kiosk.db\n    max_connections: 4\n",
            "db: {}\n",
        );

        assert!(from_str(&yaml).is_err());
    }

    #[test]
    fn rejects_unknown_argon2_algorithm() {
        let yaml = SQLITE_CONFIG.replace("Argon2id", "Argon2x");

        assert!(from_str(&yaml).is_err());
    }
}
