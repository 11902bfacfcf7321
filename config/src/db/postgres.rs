use serde::Deserialize;

#[derive(Deserialize)]
pub struct DbPostgresConfig {
    user: String,
    password: String,
    host: String,
    port: u16,
    db_name: String,
    max_connections: u32,
}

impl DbPostgresConfig {
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> &u16 {
        &self.port
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn max_connections(&self) -> &u32 {
        &self.max_connections
    }

    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.db_name
        )
    }
}
