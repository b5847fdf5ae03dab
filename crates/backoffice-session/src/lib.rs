//! Session lifecycle for the bank backoffice dashboard.
//!
//! # Purpose
//! Tracks the single signed-in principal, persists it through a
//! [`DurableStorage`](backoffice_storage::DurableStorage) slot, and exposes
//! role-based authorization queries over it.
//!
//! # How it fits
//! The dashboard builds one [`SessionStore`] at startup, calls
//! [`SessionStore::restore`] once, then routes login/logout and every
//! permission check through it. Role resolution itself lives in
//! `backoffice-authz`.
//!
//! # Important configuration
//! - `BACKOFFICE_STORAGE_KEY`, `BACKOFFICE_LOGIN_DELAY_MS`,
//!   `BACKOFFICE_STORAGE_DIR`, and an optional YAML file named by
//!   `BACKOFFICE_CONFIG`; see [`SessionConfig`].
//!
//! # Examples
//! ```rust
//! use backoffice_session::{NoDelay, SessionConfig, SessionStore};
//! use backoffice_storage::MemoryStorage;
//! use std::sync::Arc;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = SessionStore::new(Arc::new(MemoryStorage::new()), &SessionConfig::default())
//!     .with_delay(Arc::new(NoDelay));
//! store.login("soporte@bancoademi.com", "demo123").await.expect("login");
//! assert!(store.can("usuarios.edit"));
//! assert!(!store.can("usuarios.delete"));
//! # });
//! ```
pub mod config;
pub mod credentials;
pub mod delay;
pub mod errors;
pub mod principal;
pub mod store;

pub use config::SessionConfig;
pub use credentials::{Credential, CredentialTable};
pub use delay::{Delay, NoDelay, TokioDelay};
pub use errors::{AuthError, AuthResult};
pub use principal::{Principal, UserStatus};
pub use store::SessionStore;
