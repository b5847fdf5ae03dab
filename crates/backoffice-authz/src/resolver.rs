//! Authorization queries over an optional current role.
//!
//! # Purpose
//! Answers `can`, `has_role`, and `has_any_role` for whoever is signed in,
//! without knowing where that role came from.
//!
//! # Key invariants
//! - Every query is total: no role means `false`, never an error.
//! - `admin` is allowed any permission string, including ones outside the
//!   configured universe.
//! - Other roles are allowed exactly the members of their configured set;
//!   strings that do not parse as a [`Permission`] are denied.
//!
//! # Examples
//! ```rust
//! use backoffice_authz::{AccessResolver, Role, RolePermissionMap};
//!
//! let map = RolePermissionMap::default();
//! let anonymous = AccessResolver::new(&map, None);
//! assert!(!anonymous.can("dashboard.view"));
//!
//! let admin = AccessResolver::new(&map, Some(Role::Admin));
//! assert!(admin.can("cualquier.permiso"));
//! ```
use crate::{Permission, Role, RolePermissionMap};

#[derive(Debug, Clone, Copy)]
pub struct AccessResolver<'a> {
    map: &'a RolePermissionMap,
    role: Option<Role>,
}

impl<'a> AccessResolver<'a> {
    pub fn new(map: &'a RolePermissionMap, role: Option<Role>) -> Self {
        Self { map, role }
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn can(&self, permission: &str) -> bool {
        match self.role {
            None => false,
            Some(Role::Admin) => true,
            Some(role) => Permission::parse(permission)
                .is_ok_and(|permission| self.map.grants(role, &permission)),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.role.is_some_and(|current| roles.contains(&current))
    }
}
