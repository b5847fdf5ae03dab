//! Role-based authorization primitives for the bank backoffice dashboard.
//!
//! # Purpose
//! Centralizes the closed role, domain, and action sets, the validated
//! permission type, the static role map, and the resolver that answers
//! authorization queries.
//!
//! # How it fits
//! The session crate tracks who is signed in and hands the current role to
//! [`AccessResolver`]; nothing in this crate knows about sessions or storage.
//!
//! # Key invariants
//! - Permission strings follow the `domain.action` pattern.
//! - The `admin` role is granted every configured permission, and the resolver
//!   allows it any permission string.
//! - The role map is immutable once built.
//!
//! # Examples
//! ```rust
//! use backoffice_authz::{AccessResolver, Role, RolePermissionMap};
//!
//! let map = RolePermissionMap::default();
//! let support = AccessResolver::new(&map, Some(Role::SupportAgent));
//! assert!(support.can("usuarios.edit"));
//! assert!(!support.can("usuarios.delete"));
//! ```
//!
//! # Common pitfalls
//! - Checking `role == Role::Admin` by hand instead of going through the
//!   resolver skips the unknown-permission handling.

mod errors;
mod permission;
mod resolver;
mod role;
mod role_map;

pub use errors::{AuthzError, AuthzResult};
pub use permission::{Action, Domain, Permission};
pub use resolver::AccessResolver;
pub use role::Role;
pub use role_map::RolePermissionMap;
