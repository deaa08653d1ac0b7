//! Authenticated principals and the capabilities they hold.
//!
//! Capabilities are computed elsewhere (stored as codenames per user); the service layer
//! only asks whether a principal holds one.

use std::collections::HashSet;

use crate::server::error::auth::AuthError;

/// A named permission required by a protected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    AddDepartment,
    ChangeDepartment,
    DeleteDepartment,
    AddProject,
    ChangeProject,
    DeleteProject,
    AddEmployee,
    ChangeEmployee,
    DeleteEmployee,
}

impl Capability {
    pub const ALL: [Capability; 9] = [
        Capability::AddDepartment,
        Capability::ChangeDepartment,
        Capability::DeleteDepartment,
        Capability::AddProject,
        Capability::ChangeProject,
        Capability::DeleteProject,
        Capability::AddEmployee,
        Capability::ChangeEmployee,
        Capability::DeleteEmployee,
    ];

    /// Codename stored in the `user_permission` table.
    pub fn codename(self) -> &'static str {
        match self {
            Capability::AddDepartment => "add_department",
            Capability::ChangeDepartment => "change_department",
            Capability::DeleteDepartment => "delete_department",
            Capability::AddProject => "add_project",
            Capability::ChangeProject => "change_project",
            Capability::DeleteProject => "delete_project",
            Capability::AddEmployee => "add_employee",
            Capability::ChangeEmployee => "change_employee",
            Capability::DeleteEmployee => "delete_employee",
        }
    }

    pub fn from_codename(codename: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.codename() == codename)
    }
}

/// A user a bearer credential resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: i32,
    pub username: String,
    /// Superusers hold every capability regardless of their grants.
    pub is_superuser: bool,
    pub capabilities: HashSet<Capability>,
}

/// The identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq)]
pub enum Principal {
    User(AuthUser),
    /// Valid secret, but the principal id matched no user. Holds no capabilities.
    Anonymous,
}

impl Principal {
    /// Converts a user row and its permission rows at the repository boundary.
    ///
    /// Unknown codenames are ignored.
    pub fn from_entity(
        user: entity::user::Model,
        permissions: Vec<entity::user_permission::Model>,
    ) -> Self {
        let capabilities = permissions
            .iter()
            .filter_map(|p| Capability::from_codename(&p.codename))
            .collect();

        Principal::User(AuthUser {
            id: user.id,
            username: user.username,
            is_superuser: user.is_superuser,
            capabilities,
        })
    }

    pub fn user_id(&self) -> Option<i32> {
        match self {
            Principal::User(user) => Some(user.id),
            Principal::Anonymous => None,
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        match self {
            Principal::User(user) => user.is_superuser || user.capabilities.contains(&capability),
            Principal::Anonymous => false,
        }
    }

    /// Fails with `AuthError::Forbidden` on the first capability the principal lacks.
    pub fn require(&self, capabilities: &[Capability]) -> Result<(), AuthError> {
        for capability in capabilities {
            if !self.has(*capability) {
                return Err(AuthError::Forbidden {
                    principal: self
                        .user_id()
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "anonymous".to_string()),
                    capability: capability.codename(),
                });
            }
        }

        Ok(())
    }
}
