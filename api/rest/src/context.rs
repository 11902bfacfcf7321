use std::sync::Arc;

use ks_dao::Db;
use ks_hash_argon2::argon2::Argon2Hash;
use ks_token_jwt::token::JwtToken;

pub struct ApiRestCtx {
    hash: ApiRestHashCtx,
    token: ApiRestTokenCtx,
    dao: ApiRestDaoCtx,
    diagnostic: ApiRestDiagnosticCtx,
    user_registration: bool,
}

impl ApiRestCtx {
    pub fn new(
        hash: ApiRestHashCtx,
        token: ApiRestTokenCtx,
        dao: ApiRestDaoCtx,
        diagnostic: ApiRestDiagnosticCtx,
        user_registration: bool,
    ) -> Self {
        Self {
            hash,
            token,
            dao,
            diagnostic,
            user_registration,
        }
    }

    pub fn hash(&self) -> &ApiRestHashCtx {
        &self.hash
    }

    pub fn token(&self) -> &ApiRestTokenCtx {
        &self.token
    }

    pub fn dao(&self) -> &ApiRestDaoCtx {
        &self.dao
    }

    pub fn diagnostic(&self) -> &ApiRestDiagnosticCtx {
        &self.diagnostic
    }

    pub fn user_registration(&self) -> &bool {
        &self.user_registration
    }
}

pub struct ApiRestHashCtx {
    argon2: Argon2Hash,
}

impl ApiRestHashCtx {
    pub fn new(argon2: Argon2Hash) -> Self {
        Self { argon2 }
    }

    pub fn argon2(&self) -> &Argon2Hash {
        &self.argon2
    }
}

pub struct ApiRestTokenCtx {
    jwt: JwtToken,
}

impl ApiRestTokenCtx {
    pub fn new(jwt: JwtToken) -> Self {
        Self { jwt }
    }

    pub fn jwt(&self) -> &JwtToken {
        &self.jwt
    }
}

pub struct ApiRestDaoCtx {
    db: Arc<Db>,
}

impl ApiRestDaoCtx {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}

/// Deployment details echoed by the environment endpoint. Nothing is served
/// unless `enabled` is set.
#[derive(Default)]
pub struct ApiRestDiagnosticCtx {
    enabled: bool,
    deployment_url: Option<String>,
    branch_url: Option<String>,
    auth_url: Option<String>,
    sign_in_url: Option<String>,
}

impl ApiRestDiagnosticCtx {
    pub fn new(
        enabled: bool,
        deployment_url: Option<String>,
        branch_url: Option<String>,
        auth_url: Option<String>,
        sign_in_url: Option<String>,
    ) -> Self {
        Self {
            enabled,
            deployment_url,
            branch_url,
            auth_url,
            sign_in_url,
        }
    }

    pub fn enabled(&self) -> &bool {
        &self.enabled
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
