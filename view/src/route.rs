use serde::{Serialize, Serializer};
use uuid::Uuid;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    ProjectList,
    AdminList,
    EditProject(Uuid),
    ViewProject(Uuid),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::ProjectList => "/dashboard/project".to_owned(),
            Self::AdminList => "/dashboard/admin".to_owned(),
            Self::EditProject(id) => format!("/dashboard/project/edit/{id}"),
            Self::ViewProject(id) => format!("/dashboard/project/{id}"),
        }
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.path())
    }
}

/// Where the detail page was opened from, given by the `from` query hint.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Origin {
    Admin,
    Owner,
}

impl Origin {
    pub fn from_hint(from: Option<&str>) -> Self {
        match from {
            Some("admin") => Self::Admin,
            _ => Self::Owner,
        }
    }

    pub fn back(&self) -> Route {
        match self {
            Self::Admin => Route::AdminList,
            Self::Owner => Route::ProjectList,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        let id = Uuid::parse_str("0190c1a4-7c3e-7a53-9d5b-3f1d2a9b6e10").unwrap();

        assert_eq!(Route::Home.path(), "/");
        assert_eq!(
            Route::EditProject(id).path(),
            "/dashboard/project/edit/0190c1a4-7c3e-7a53-9d5b-3f1d2a9b6e10"
        );
        assert_eq!(
            Route::ViewProject(id).path(),
            "/dashboard/project/0190c1a4-7c3e-7a53-9d5b-3f1d2a9b6e10"
        );
    }

    #[test]
    fn only_admin_hint_returns_to_admin_list() {
        assert_eq!(Origin::from_hint(Some("admin")).back(), Route::AdminList);
        assert_eq!(Origin::from_hint(Some("Admin")).back(), Route::ProjectList);
        assert_eq!(Origin::from_hint(None).back(), Route::ProjectList);
    }
}
