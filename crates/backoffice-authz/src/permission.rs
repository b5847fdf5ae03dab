//! Permission primitives for the backoffice dashboard.
//!
//! # Purpose
//! Defines the closed sets of permission domains and actions, and the
//! validated `domain.action` permission value built from them.
//!
//! # How it fits
//! The role map stores sets of [`Permission`] values; authorization queries
//! arrive as raw strings and are parsed here before membership checks.
//!
//! # Key invariants
//! - Permission strings are exactly `domain.action` with a single dot.
//! - Each domain declares which actions it supports; anything else is rejected.
//!
//! # Examples
//! ```rust
//! use backoffice_authz::{Action, Domain, Permission};
//!
//! let permission: Permission = "usuarios.edit".parse().expect("valid permission");
//! assert_eq!(permission, Permission::new(Domain::Usuarios, Action::Edit).unwrap());
//! assert_eq!(permission.to_string(), "usuarios.edit");
//! ```
//!
//! # Common pitfalls
//! - Domain names are the Spanish section names used by the dashboard
//!   (`usuarios`, not `users`).
use crate::{AuthzError, AuthzResult};
use serde::{Deserialize, Serialize};

/// Dashboard section a permission applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Dashboard,
    Usuarios,
    Clientes,
    Transacciones,
    Alertas,
    Cumplimiento,
    Riesgos,
    Productos,
    Reportes,
    Auditoria,
    Configuracion,
}

impl Domain {
    pub const ALL: [Domain; 11] = [
        Domain::Dashboard,
        Domain::Usuarios,
        Domain::Clientes,
        Domain::Transacciones,
        Domain::Alertas,
        Domain::Cumplimiento,
        Domain::Riesgos,
        Domain::Productos,
        Domain::Reportes,
        Domain::Auditoria,
        Domain::Configuracion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Dashboard => "dashboard",
            Domain::Usuarios => "usuarios",
            Domain::Clientes => "clientes",
            Domain::Transacciones => "transacciones",
            Domain::Alertas => "alertas",
            Domain::Cumplimiento => "cumplimiento",
            Domain::Riesgos => "riesgos",
            Domain::Productos => "productos",
            Domain::Reportes => "reportes",
            Domain::Auditoria => "auditoria",
            Domain::Configuracion => "configuracion",
        }
    }

    /// Actions this domain defines.
    ///
    /// # Returns
    /// - The configured action list; the permission universe is the union of
    ///   `domain.action` over every domain and its actions.
    pub fn actions(self) -> &'static [Action] {
        use Action::*;
        match self {
            Domain::Dashboard => &[View],
            Domain::Usuarios => &[View, Create, Edit, Delete],
            Domain::Clientes => &[View, Create, Edit, Delete, Export],
            Domain::Transacciones => &[View, Edit, Approve, Export],
            Domain::Alertas => &[View, Edit, Approve],
            Domain::Cumplimiento => &[View, Edit, Approve, Export],
            Domain::Riesgos => &[View, Edit, Approve, Export],
            Domain::Productos => &[View, Create, Edit, Delete],
            Domain::Reportes => &[View, Create, Export],
            Domain::Auditoria => &[View, Export],
            Domain::Configuracion => &[View, Edit],
        }
    }

    pub fn supports(self, action: Action) -> bool {
        self.actions().contains(&action)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Domain::ALL
            .into_iter()
            .find(|domain| domain.as_str() == value)
            .ok_or_else(|| AuthzError::UnknownDomain(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Approve,
    Export,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
            Action::Approve => "approve",
            Action::Export => "export",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "view" => Ok(Action::View),
            "create" => Ok(Action::Create),
            "edit" => Ok(Action::Edit),
            "delete" => Ok(Action::Delete),
            "approve" => Ok(Action::Approve),
            "export" => Ok(Action::Export),
            _ => Err(AuthzError::UnknownAction(value.to_string())),
        }
    }
}

/// A validated `domain.action` permission.
///
/// # Invariants
/// - `action` is one of `domain.actions()`; [`Permission::new`] and parsing
///   both enforce this.
///
/// # Example
/// ```rust
/// use backoffice_authz::{Action, Domain, Permission};
///
/// assert!(Permission::new(Domain::Auditoria, Action::Delete).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permission {
    domain: Domain,
    action: Action,
}

impl Permission {
    /// Build a permission, rejecting actions the domain does not define.
    ///
    /// # Errors
    /// - [`AuthzError::UnsupportedAction`] if `domain` has no such action.
    pub fn new(domain: Domain, action: Action) -> AuthzResult<Self> {
        if !domain.supports(action) {
            return Err(AuthzError::UnsupportedAction {
                domain: domain.as_str().to_string(),
                action: action.as_str().to_string(),
            });
        }
        Ok(Self { domain, action })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Every permission defined by the domain configuration, in domain order.
    pub fn all() -> impl Iterator<Item = Permission> {
        Domain::ALL.into_iter().flat_map(|domain| {
            domain
                .actions()
                .iter()
                .map(move |&action| Permission { domain, action })
        })
    }

    /// Parse a permission string.
    ///
    /// # Errors
    /// - [`AuthzError::InvalidPermission`] if the string is not `domain.action`.
    /// - [`AuthzError::UnknownDomain`] / [`AuthzError::UnknownAction`] for
    ///   names outside the closed sets.
    /// - [`AuthzError::UnsupportedAction`] if the pair is not configured.
    pub fn parse(value: &str) -> AuthzResult<Self> {
        value.parse()
    }
}

impl std::str::FromStr for Permission {
    type Err = AuthzError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (domain, action) = value
            .split_once('.')
            .ok_or_else(|| AuthzError::InvalidPermission(value.to_string()))?;
        if action.contains('.') {
            return Err(AuthzError::InvalidPermission(value.to_string()));
        }
        Self::new(domain.parse()?, action.parse()?)
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.domain, self.action)
    }
}

impl TryFrom<String> for Permission {
    type Error = AuthzError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Permission> for String {
    fn from(value: Permission) -> Self {
        value.to_string()
    }
}
