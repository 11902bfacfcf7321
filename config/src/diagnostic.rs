use serde::Deserialize;

#[derive(Deserialize, Default)]
pub struct DiagnosticConfig {
    #[serde(default)]
    enabled: bool,
}

impl DiagnosticConfig {
    pub fn enabled(&self) -> &bool {
        &self.enabled
    }
}
