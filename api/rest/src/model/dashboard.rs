use serde::Deserialize;

#[derive(Deserialize)]
pub struct ProjectDetailReqQuery {
    from: Option<String>,
}

impl ProjectDetailReqQuery {
    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }
}

#[derive(Deserialize)]
pub struct AdminListReqQuery {
    status: Option<String>,
}

impl AdminListReqQuery {
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
