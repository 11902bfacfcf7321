use anyhow::{anyhow, Result};
use argon2::{
    password_hash::SaltString, Algorithm, Argon2, Params, PasswordHash, PasswordHasher,
    PasswordVerifier, Version,
};
use ks_config::hash::{Argon2Algorithm, Argon2Version};

pub struct Argon2Hash {
    argon2: Argon2<'static>,
    salt: SaltString,
}

impl Argon2Hash {
    pub fn new(algorithm: &Argon2Algorithm, version: &Argon2Version, salt: &str) -> Result<Self> {
        ks_log::info(Some("⚡"), "[Argon2Hash] Initializing component");

        let algorithm = match algorithm {
            Argon2Algorithm::Argon2d => Algorithm::Argon2d,
            Argon2Algorithm::Argon2i => Algorithm::Argon2i,
            Argon2Algorithm::Argon2id => Algorithm::Argon2id,
        };

        let version = match version {
            Argon2Version::V0x10 => Version::V0x10,
            Argon2Version::V0x13 => Version::V0x13,
        };

        Ok(Self {
            argon2: Argon2::new(algorithm, version, Params::DEFAULT),
            salt: SaltString::from_b64(salt).map_err(|err| anyhow!("Invalid argon2 salt: {err}"))?,
        })
    }

    /// PHC string of the hashed password, ready to be stored.
    pub fn hash_password(&self, password: &str) -> Result<String> {
        match self.argon2.hash_password(password.as_bytes(), &self.salt) {
            Ok(hash) => Ok(hash.to_string()),
            Err(err) => Err(anyhow!("Failed to hash password: {err}")),
        }
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<()> {
        let hash = PasswordHash::new(hash).map_err(|err| anyhow!("{err}"))?;
        self.argon2
            .verify_password(password.as_bytes(), &hash)
            .map_err(|_| anyhow!("Password doesn't match"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> Argon2Hash {
        Argon2Hash::new(
            &Argon2Algorithm::Argon2id,
            &Argon2Version::V0x13,
            "c29tZXNhbHRzb21lc2FsdA",
        )
        .unwrap()
    }

    #[test]
    fn verifies_its_own_hash() {
        let hasher = hasher();
        let hash = hasher.hash_password("hunter22").unwrap();

        assert!(hasher.verify_password("hunter22", &hash).is_ok());
        assert!(hasher.verify_password("hunter23", &hash).is_err());
    }

    #[test]
    fn rejects_invalid_salt() {
        assert!(
            Argon2Hash::new(&Argon2Algorithm::Argon2id, &Argon2Version::V0x13, "!").is_err()
        );
    }
}
