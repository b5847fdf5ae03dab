//! Static role-to-permission configuration.
//!
//! # Purpose
//! Holds the fixed mapping from each [`Role`] to the set of [`Permission`]s it
//! grants. The map is built once and only read afterwards.
//!
//! # Key invariants
//! - `admin` holds every permission in [`Permission::all`].
//! - There is no grant/revoke API; the map is immutable once built.
//!
//! # Examples
//! ```rust
//! use backoffice_authz::{Permission, Role, RolePermissionMap};
//!
//! let map = RolePermissionMap::default();
//! let edit = Permission::parse("usuarios.edit").unwrap();
//! assert!(map.grants(Role::SupportAgent, &edit));
//! ```
use crate::{Action, Domain, Permission, Role};
use std::collections::{BTreeMap, BTreeSet};

type Grant = (Domain, &'static [Action]);

const COMPLIANCE_OFFICER: &[Grant] = &[
    (Domain::Dashboard, &[Action::View]),
    (Domain::Clientes, &[Action::View, Action::Export]),
    (Domain::Transacciones, &[Action::View, Action::Export]),
    (Domain::Alertas, &[Action::View, Action::Edit, Action::Approve]),
    (
        Domain::Cumplimiento,
        &[Action::View, Action::Edit, Action::Approve, Action::Export],
    ),
    (Domain::Reportes, &[Action::View, Action::Create, Action::Export]),
    (Domain::Auditoria, &[Action::View]),
];

const OPERATIONS_MANAGER: &[Grant] = &[
    (Domain::Dashboard, &[Action::View]),
    (Domain::Usuarios, &[Action::View]),
    (Domain::Clientes, &[Action::View, Action::Create, Action::Edit]),
    (
        Domain::Transacciones,
        &[Action::View, Action::Edit, Action::Approve, Action::Export],
    ),
    (Domain::Alertas, &[Action::View, Action::Edit]),
    (Domain::Productos, &[Action::View]),
    (Domain::Reportes, &[Action::View, Action::Export]),
];

const SUPPORT_AGENT: &[Grant] = &[
    (Domain::Dashboard, &[Action::View]),
    (Domain::Usuarios, &[Action::View, Action::Edit]),
    (Domain::Clientes, &[Action::View, Action::Edit]),
    (Domain::Transacciones, &[Action::View]),
    (Domain::Alertas, &[Action::View]),
];

const PRODUCT_MANAGER: &[Grant] = &[
    (Domain::Dashboard, &[Action::View]),
    (
        Domain::Productos,
        &[Action::View, Action::Create, Action::Edit, Action::Delete],
    ),
    (Domain::Clientes, &[Action::View]),
    (Domain::Reportes, &[Action::View, Action::Create, Action::Export]),
];

const RISK_ANALYST: &[Grant] = &[
    (Domain::Dashboard, &[Action::View]),
    (
        Domain::Riesgos,
        &[Action::View, Action::Edit, Action::Approve, Action::Export],
    ),
    (Domain::Alertas, &[Action::View, Action::Edit]),
    (Domain::Transacciones, &[Action::View, Action::Export]),
    (Domain::Clientes, &[Action::View]),
    (Domain::Reportes, &[Action::View, Action::Export]),
];

const AUDITOR: &[Grant] = &[
    (Domain::Dashboard, &[Action::View]),
    (Domain::Usuarios, &[Action::View]),
    (Domain::Clientes, &[Action::View]),
    (Domain::Transacciones, &[Action::View, Action::Export]),
    (Domain::Alertas, &[Action::View]),
    (Domain::Cumplimiento, &[Action::View, Action::Export]),
    (Domain::Riesgos, &[Action::View]),
    (Domain::Reportes, &[Action::View, Action::Export]),
    (Domain::Auditoria, &[Action::View, Action::Export]),
    (Domain::Configuracion, &[Action::View]),
];

/// Immutable role → permission-set lookup.
#[derive(Debug, Clone)]
pub struct RolePermissionMap {
    grants: BTreeMap<Role, BTreeSet<Permission>>,
}

impl RolePermissionMap {
    /// Build the dashboard's role configuration.
    ///
    /// Pairs outside a domain's configured actions are skipped.
    pub fn dashboard() -> Self {
        let mut grants = BTreeMap::new();
        grants.insert(Role::Admin, Permission::all().collect());
        for (role, table) in [
            (Role::ComplianceOfficer, COMPLIANCE_OFFICER),
            (Role::OperationsManager, OPERATIONS_MANAGER),
            (Role::SupportAgent, SUPPORT_AGENT),
            (Role::ProductManager, PRODUCT_MANAGER),
            (Role::RiskAnalyst, RISK_ANALYST),
            (Role::Auditor, AUDITOR),
        ] {
            grants.insert(role, expand(table));
        }
        Self { grants }
    }

    /// Permission set configured for `role`, in sorted order.
    pub fn permissions_for(&self, role: Role) -> impl Iterator<Item = &Permission> {
        self.grants.get(&role).into_iter().flatten()
    }

    pub fn grants(&self, role: Role, permission: &Permission) -> bool {
        self.grants
            .get(&role)
            .is_some_and(|set| set.contains(permission))
    }

    /// Roles whose configured set contains `permission`.
    pub fn roles_granting(&self, permission: &Permission) -> Vec<Role> {
        self.grants
            .iter()
            .filter(|(_, set)| set.contains(permission))
            .map(|(role, _)| *role)
            .collect()
    }
}

impl Default for RolePermissionMap {
    fn default() -> Self {
        Self::dashboard()
    }
}

fn expand(table: &[Grant]) -> BTreeSet<Permission> {
    table
        .iter()
        .flat_map(|(domain, actions)| {
            actions
                .iter()
                .filter_map(move |action| Permission::new(*domain, *action).ok())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: [(Role, &[Grant]); 6] = [
        (Role::ComplianceOfficer, COMPLIANCE_OFFICER),
        (Role::OperationsManager, OPERATIONS_MANAGER),
        (Role::SupportAgent, SUPPORT_AGENT),
        (Role::ProductManager, PRODUCT_MANAGER),
        (Role::RiskAnalyst, RISK_ANALYST),
        (Role::Auditor, AUDITOR),
    ];

    #[test]
    fn grant_tables_only_use_configured_actions() {
        for (role, table) in TABLES {
            for (domain, actions) in table {
                for action in *actions {
                    assert!(
                        domain.supports(*action),
                        "{role} grants unsupported {domain}.{action}"
                    );
                }
            }
        }
    }

    #[test]
    fn admin_holds_the_full_universe() {
        let map = RolePermissionMap::dashboard();
        let admin: BTreeSet<_> = map.permissions_for(Role::Admin).copied().collect();
        let universe: BTreeSet<_> = Permission::all().collect();
        assert_eq!(admin, universe);
    }

    #[test]
    fn every_role_is_configured() {
        let map = RolePermissionMap::dashboard();
        for role in Role::ALL {
            assert!(
                map.permissions_for(role).next().is_some(),
                "{role} has no permissions"
            );
        }
    }

    #[test]
    fn support_agent_edits_but_never_deletes_users() {
        let map = RolePermissionMap::dashboard();
        let edit = Permission::parse("usuarios.edit").expect("parse");
        let delete = Permission::parse("usuarios.delete").expect("parse");
        assert!(map.grants(Role::SupportAgent, &edit));
        assert!(!map.grants(Role::SupportAgent, &delete));
    }

    #[test]
    fn roles_granting_lists_holders() {
        let map = RolePermissionMap::dashboard();
        let approve = Permission::parse("cumplimiento.approve").expect("parse");
        assert_eq!(
            map.roles_granting(&approve),
            vec![Role::Admin, Role::ComplianceOfficer]
        );
    }
}
