use anyhow::Result;
use uuid::Uuid;

use crate::{
    project::{ProjectDao, ProjectScope},
    session::Session,
    Db,
};

/// Decision taken before touching the store.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FetchPlan {
    Lookup { id: Uuid, scope: ProjectScope },
    NotFound,
    RedirectHome,
}

/// Outcome of a page-level project fetch.
#[derive(Debug)]
pub enum ProjectFetch {
    Found(ProjectDao),
    NotFound,
    RedirectHome,
}

/// A malformed or missing id is not found, checked before the session. An
/// anonymous caller is sent home without a lookup.
pub fn plan_fetch(project_id: Option<&str>, session: Option<&Session>) -> FetchPlan {
    let id = match project_id.and_then(|id| Uuid::parse_str(id).ok()) {
        Some(id) => id,
        None => return FetchPlan::NotFound,
    };

    match session {
        Some(session) => FetchPlan::Lookup {
            id,
            scope: session.project_scope(),
        },
        None => FetchPlan::RedirectHome,
    }
}

pub async fn fetch_project(
    db: &Db,
    project_id: Option<&str>,
    session: Option<&Session>,
) -> Result<ProjectFetch> {
    match plan_fetch(project_id, session) {
        FetchPlan::Lookup { id, scope } => Ok(match ProjectDao::db_select(db, &id, &scope).await? {
            Some(project) => ProjectFetch::Found(project),
            None => ProjectFetch::NotFound,
        }),
        FetchPlan::NotFound => Ok(ProjectFetch::NotFound),
        FetchPlan::RedirectHome => Ok(ProjectFetch::RedirectHome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserRole;

    #[test]
    fn anonymous_caller_is_redirected_without_lookup() {
        let id = Uuid::now_v7().to_string();

        assert_eq!(plan_fetch(Some(&id), None), FetchPlan::RedirectHome);
    }

    #[test]
    fn malformed_id_is_not_found() {
        let session = Session::new(&Uuid::now_v7(), &UserRole::Admin);

        assert_eq!(plan_fetch(Some("not-a-uuid"), Some(&session)), FetchPlan::NotFound);
        assert_eq!(plan_fetch(None, Some(&session)), FetchPlan::NotFound);
        assert_eq!(plan_fetch(Some(""), None), FetchPlan::NotFound);
    }

    #[test]
    fn lookup_is_scoped_by_role() {
        let id = Uuid::now_v7();
        let user_id = Uuid::now_v7();

        assert_eq!(
            plan_fetch(
                Some(&id.to_string()),
                Some(&Session::new(&user_id, &UserRole::User))
            ),
            FetchPlan::Lookup {
                id,
                scope: ProjectScope::OwnedBy(user_id),
            }
        );
        assert_eq!(
            plan_fetch(
                Some(&id.to_string()),
                Some(&Session::new(&user_id, &UserRole::Admin))
            ),
            FetchPlan::Lookup {
                id,
                scope: ProjectScope::Any,
            }
        );
    }
}
