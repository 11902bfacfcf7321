use serde::Deserialize;

#[derive(Deserialize)]
pub struct HashConfig {
    argon2: Argon2HashConfig,
}

impl HashConfig {
    pub fn argon2(&self) -> &Argon2HashConfig {
        &self.argon2
    }
}

#[derive(Deserialize)]
pub struct Argon2HashConfig {
    algorithm: Argon2Algorithm,
    version: Argon2Version,
    salt: String,
}

impl Argon2HashConfig {
    pub fn algorithm(&self) -> &Argon2Algorithm {
        &self.algorithm
    }

    pub fn version(&self) -> &Argon2Version {
        &self.version
    }

    /// B64-encoded salt, as accepted by `SaltString::from_b64`.
    pub fn salt(&self) -> &str {
        &self.salt
    }
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Argon2Algorithm {
    Argon2d,
    Argon2i,
    Argon2id,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Argon2Version {
    V0x10,
    V0x13,
}
