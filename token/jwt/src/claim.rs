use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session claim: the token only names the user, the role is always read
/// back from the store.
#[derive(Deserialize, Serialize, Debug)]
pub struct Claim {
    id: Uuid,
    exp: u64,
}

impl Claim {
    pub fn new(id: &Uuid, exp: &u64) -> Self {
        Self { id: *id, exp: *exp }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn exp(&self) -> &u64 {
        &self.exp
    }
}
