//! # Purpose
//! Walk the backoffice session lifecycle end to end against file-backed
//! storage: rejected login, role-scoped access, restart rehydration, logout,
//! and recovery from a corrupt persisted session.
//!
//! # High-level flow
//! 1. Restore whatever a previous run left behind, then start signed out.
//! 2. Reject a wrong password and confirm nothing was persisted.
//! 3. Sign in as the support agent and check scoped permissions.
//! 4. Sign in as admin and check unconditional access.
//! 5. Open a second store over the same directory and restore the admin.
//! 6. Log out and confirm a restore finds nothing.
//! 7. Plant a corrupt value and confirm restore clears it.
//! 8. Print how many permissions each role holds.
//!
//! # Configuration
//! Uses `SessionConfig::from_env_or_yaml`, so `BACKOFFICE_STORAGE_DIR` and
//! `BACKOFFICE_LOGIN_DELAY_MS` control where state lives and how long login
//! takes. `RUST_LOG` controls log verbosity.
mod observability;

use anyhow::{Context, Result, bail, ensure};
use backoffice_authz::{Permission, Role, RolePermissionMap};
use backoffice_session::{AuthError, SessionConfig, SessionStore};
use backoffice_storage::{DurableStorage, FileStorage};
use std::sync::Arc;

const ADMIN_EMAIL: &str = "admin@bancoademi.com";
const ADMIN_PASSWORD: &str = "admin123";
const SUPPORT_EMAIL: &str = "soporte@bancoademi.com";
const SUPPORT_PASSWORD: &str = "demo123";

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_observability();
    let config = SessionConfig::from_env_or_yaml().context("load session config")?;
    run_demo(&config).await
}

async fn run_demo(config: &SessionConfig) -> Result<()> {
    println!("== Backoffice Demo: Session & RBAC Walkthrough ==");

    let storage = Arc::new(
        FileStorage::open(&config.storage_dir)
            .await
            .with_context(|| format!("open storage dir {}", config.storage_dir.display()))?,
    );
    let store = SessionStore::new(storage.clone(), config);

    let leftover = store.restore().await;
    store.logout().await;
    println!(
        "STEP 1 startup restore: PASS (previous session: {})",
        leftover
            .as_ref()
            .map(|principal| principal.email.as_str())
            .unwrap_or("none")
    );

    match store.login(ADMIN_EMAIL, "wrongpass").await {
        Err(AuthError::InvalidCredentials) => {}
        Err(err) => bail!("unexpected login error: {err}"),
        Ok(principal) => bail!("wrong password accepted for {}", principal.email),
    }
    ensure!(
        storage.get(config.storage_key.as_str()).await?.is_none(),
        "rejected login persisted a session"
    );
    ensure!(!store.can("dashboard.view"), "anonymous access allowed");
    println!("STEP 2 wrong password rejected: PASS");

    let support = store
        .login(SUPPORT_EMAIL, SUPPORT_PASSWORD)
        .await
        .context("support login")?;
    ensure!(support.role == Role::SupportAgent, "unexpected role {}", support.role);
    ensure!(store.can("usuarios.edit"), "support agent cannot edit users");
    ensure!(!store.can("usuarios.delete"), "support agent can delete users");
    println!(
        "STEP 3 support agent scoped: PASS ({} / {})",
        support.name,
        support.role.display_name()
    );

    let admin = store
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .context("admin login")?;
    ensure!(store.has_role(Role::Admin), "admin role not current");
    ensure!(store.can("cualquier.permiso"), "admin denied unknown permission");
    println!("STEP 4 admin unrestricted: PASS");

    let restarted = SessionStore::new(storage.clone(), config);
    let restored = restarted.restore().await.context("restore after restart")?;
    ensure!(restored == admin, "restored principal differs from login");
    println!("STEP 5 restart restore: PASS ({})", restored.email);

    restarted.logout().await;
    ensure!(
        restarted.restore().await.is_none(),
        "session survived logout"
    );
    println!("STEP 6 logout clears session: PASS");

    storage
        .set(&config.storage_key, "{\"id\":\"1\",\"role\":")
        .await
        .context("plant corrupt session")?;
    ensure!(
        restarted.restore().await.is_none(),
        "corrupt session restored"
    );
    ensure!(
        storage.get(&config.storage_key).await?.is_none(),
        "corrupt session left in storage"
    );
    println!("STEP 7 corrupt session discarded: PASS");

    let map = RolePermissionMap::dashboard();
    let universe = Permission::all().count();
    for role in Role::ALL {
        println!(
            "  {:<20} {:>2}/{universe} permissions",
            role.as_str(),
            map.permissions_for(role).count()
        );
    }
    println!("STEP 8 role summary: PASS");

    Ok(())
}
