use serde::Serialize;

use crate::context::ApiRestDiagnosticCtx;

#[derive(Serialize)]
pub struct EnvResJson {
    deployment_url: Option<String>,
    branch_url: Option<String>,
    auth_url: Option<String>,
    sign_in_url: Option<String>,
}

impl EnvResJson {
    pub fn new(diagnostic: &ApiRestDiagnosticCtx) -> Self {
        Self {
            deployment_url: diagnostic.deployment_url().clone(),
            branch_url: diagnostic.branch_url().clone(),
            auth_url: diagnostic.auth_url().clone(),
            sign_in_url: diagnostic.sign_in_url().clone(),
        }
    }
}
