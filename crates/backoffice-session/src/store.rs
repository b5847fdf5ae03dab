//! Session store: the single current principal and its durable copy.
//!
//! # Purpose
//! Owns the login/logout/restore lifecycle and answers authorization queries
//! for whoever is currently signed in.
//!
//! # Durability and consistency
//! - Every mutation runs under one async guard and writes storage before the
//!   in-memory slot, so readers never see a login that storage does not hold.
//! - Reads (`current`, `can`, ...) only take the short synchronous slot lock.
//! - Two logins in flight are not serialized against each other before the
//!   simulated delay; whichever persists last wins.
//!
//! # Failure handling
//! - Wrong credentials leave all state untouched.
//! - A persisted value that does not decode is removed and treated as absent.
//! - A storage read error on restore keeps whatever is already in memory.
//! - Logout always succeeds; storage errors there are only logged.
use crate::credentials::CredentialTable;
use crate::delay::{Delay, TokioDelay};
use crate::principal::Principal;
use crate::{AuthError, AuthResult, SessionConfig};
use anyhow::Context;
use backoffice_authz::{AccessResolver, Role, RolePermissionMap};
use backoffice_storage::DurableStorage;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub struct SessionStore {
    storage: Arc<dyn DurableStorage>,
    delay: Arc<dyn Delay>,
    credentials: Arc<CredentialTable>,
    role_map: Arc<RolePermissionMap>,
    storage_key: String,
    login_delay: Duration,
    /// Currently signed-in principal, if any.
    current: RwLock<Option<Principal>>,
    /// Serializes storage + slot updates.
    mutation: Mutex<()>,
}

impl SessionStore {
    /// Build a store over `storage` with the demo credentials, the dashboard
    /// role map, and real wall-clock login latency.
    ///
    /// The store starts signed out; call [`restore`](Self::restore) to pick
    /// up a persisted session.
    pub fn new(storage: Arc<dyn DurableStorage>, config: &SessionConfig) -> Self {
        Self {
            storage,
            delay: Arc::new(TokioDelay),
            credentials: Arc::new(CredentialTable::demo()),
            role_map: Arc::new(RolePermissionMap::dashboard()),
            storage_key: config.storage_key.clone(),
            login_delay: config.login_delay(),
            current: RwLock::new(None),
            mutation: Mutex::new(()),
        }
    }

    pub fn with_delay(mut self, delay: Arc<dyn Delay>) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_credentials(mut self, credentials: CredentialTable) -> Self {
        self.credentials = Arc::new(credentials);
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Authenticate against the credential table and start a session.
    ///
    /// # Errors
    /// - [`AuthError::InvalidCredentials`] when no entry matches exactly.
    /// - [`AuthError::LoginFailure`] when the principal cannot be persisted;
    ///   the previous session, if any, stays current.
    pub async fn login(&self, email: &str, password: &str) -> AuthResult<Principal> {
        self.delay.wait(self.login_delay).await;

        let Some(principal) = self.credentials.authenticate(email, password).cloned() else {
            warn!(email, "login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        };
        let encoded = principal
            .to_storage_json()
            .context("encode principal for storage")?;

        let _guard = self.mutation.lock().await;
        self.storage
            .set(&self.storage_key, &encoded)
            .await
            .context("persist session")?;
        *self.current.write() = Some(principal.clone());

        info!(email, role = %principal.role, "login succeeded");
        Ok(principal)
    }

    /// End the session and forget the persisted principal.
    pub async fn logout(&self) {
        let _guard = self.mutation.lock().await;
        if let Err(err) = self.storage.remove(&self.storage_key).await {
            warn!(
                error = %err,
                key = %self.storage_key,
                "failed to clear persisted session; it may be restored on next start"
            );
        }
        if let Some(previous) = self.current.write().take() {
            info!(email = %previous.email, "logged out");
        }
    }

    /// Rehydrate the session from storage, typically once at startup.
    ///
    /// Returns the restored principal, or `None` when nothing valid was
    /// stored. Corrupt values are removed and never reported as errors.
    /// When storage cannot be read, the current principal is left untouched
    /// and returned.
    pub async fn restore(&self) -> Option<Principal> {
        let _guard = self.mutation.lock().await;
        let restored = match self.storage.get(&self.storage_key).await {
            Ok(Some(raw)) => match Principal::from_storage_json(&raw) {
                Ok(principal) => Some(principal),
                Err(err) => {
                    warn!(error = %err, "discarding corrupt persisted session");
                    if let Err(err) = self.storage.remove(&self.storage_key).await {
                        warn!(error = %err, "failed to clear corrupt session");
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                // Nothing was learned about storage; keep memory as it is.
                warn!(error = %err, "failed to read persisted session");
                return self.current();
            }
        };
        *self.current.write() = restored.clone();
        debug!(restored = restored.is_some(), "session restore finished");
        restored
    }

    pub fn current(&self) -> Option<Principal> {
        self.current.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.read().is_some()
    }

    /// Resolver bound to the role signed in right now.
    pub fn access(&self) -> AccessResolver<'_> {
        let role = self.current.read().as_ref().map(|principal| principal.role);
        AccessResolver::new(&self.role_map, role)
    }

    pub fn can(&self, permission: &str) -> bool {
        self.access().can(permission)
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.access().has_role(role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.access().has_any_role(roles)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("storage_key", &self.storage_key)
            .field("login_delay", &self.login_delay)
            .field("current", &*self.current.read())
            .finish_non_exhaustive()
    }
}
