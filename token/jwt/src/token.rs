use std::time;

use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claim::Claim;

pub struct JwtToken {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry_duration: u64,
}

impl JwtToken {
    pub fn new(secret: &str, expiry_duration: &u64) -> Self {
        ks_log::info(Some("⚡"), "[JwtToken] Initializing component");

        let secret = secret.as_bytes();
        Self {
            header: Header::default(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::default(),
            expiry_duration: *expiry_duration,
        }
    }

    pub fn encode(&self, user_id: &Uuid) -> Result<String> {
        let expiration_time = now_secs()? + self.expiry_duration;

        Ok(encode(
            &self.header,
            &Claim::new(user_id, &expiration_time),
            &self.encoding_key,
        )?)
    }

    pub fn decode(&self, token: &str) -> Result<Claim> {
        Ok(decode::<Claim>(token, &self.decoding_key, &self.validation)?.claims)
    }

    /// True once less than half of the token lifetime is left.
    pub fn need_renew(&self, claim: &Claim) -> Result<bool> {
        Ok(claim.exp().saturating_sub(self.expiry_duration / 2) < now_secs()?)
    }

    pub fn renew(&self, claim: &Claim) -> Result<String> {
        self.encode(claim.id())
    }
}

fn now_secs() -> Result<u64> {
    Ok(time::SystemTime::now()
        .duration_since(time::UNIX_EPOCH)?
        .as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_what_it_encodes() {
        let jwt = JwtToken::new("secret", &3600);
        let user_id = Uuid::now_v7();

        let token = jwt.encode(&user_id).unwrap();
        let claim = jwt.decode(&token).unwrap();

        assert_eq!(claim.id(), &user_id);
        assert!(!jwt.need_renew(&claim).unwrap());
    }

    #[test]
    fn rejects_token_signed_with_another_secret() {
        let token = JwtToken::new("secret", &3600)
            .encode(&Uuid::now_v7())
            .unwrap();

        assert!(JwtToken::new("other", &3600).decode(&token).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(JwtToken::new("secret", &3600).decode("not-a-token").is_err());
    }

    #[test]
    fn renews_after_half_life() {
        let jwt = JwtToken::new("secret", &3600);
        let claim = Claim::new(&Uuid::now_v7(), &(now_secs().unwrap() + 60));

        assert!(jwt.need_renew(&claim).unwrap());
    }
}
