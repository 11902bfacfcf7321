use uuid::Uuid;

use crate::{
    project::ProjectScope,
    user::{UserDao, UserRole},
};

/// Identity of the caller for the current request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Session {
    user_id: Uuid,
    role: UserRole,
}

impl Session {
    pub fn new(user_id: &Uuid, role: &UserRole) -> Self {
        Self {
            user_id: *user_id,
            role: *role,
        }
    }

    pub fn from_user(user: &UserDao) -> Self {
        Self::new(user.id(), user.role())
    }

    pub fn user_id(&self) -> &Uuid {
        &self.user_id
    }

    pub fn role(&self) -> &UserRole {
        &self.role
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Projects this session may read or mutate. Only the admin role lifts
    /// the ownership restriction.
    pub fn project_scope(&self) -> ProjectScope {
        match self.role {
            UserRole::Admin => ProjectScope::Any,
            UserRole::User => ProjectScope::OwnedBy(self.user_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_scope_is_unrestricted() {
        let session = Session::new(&Uuid::now_v7(), &UserRole::Admin);

        assert_eq!(session.project_scope(), ProjectScope::Any);
        assert!(session.is_admin());
    }

    #[test]
    fn user_scope_is_own_projects() {
        let user_id = Uuid::now_v7();
        let session = Session::new(&user_id, &UserRole::User);

        assert_eq!(session.project_scope(), ProjectScope::OwnedBy(user_id));
        assert!(!session.is_admin());
    }
}
