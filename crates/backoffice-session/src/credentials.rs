//! Fixed credential table checked by login.
use crate::principal::{Principal, UserStatus};
use backoffice_authz::Role;
use chrono::{DateTime, Utc};

pub const DEMO_ADMIN_PASSWORD: &str = "admin123";
pub const DEMO_PASSWORD: &str = "demo123";

/// One login entry: the secret pair plus the principal it unlocks.
#[derive(Clone)]
pub struct Credential {
    pub email: String,
    password: String,
    pub principal: Principal,
}

impl Credential {
    pub fn new(password: impl Into<String>, principal: Principal) -> Self {
        Self {
            email: principal.email.clone(),
            password: password.into(),
            principal,
        }
    }

    fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("principal", &self.principal)
            .finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CredentialTable {
    entries: Vec<Credential>,
}

impl CredentialTable {
    pub fn new(entries: Vec<Credential>) -> Self {
        Self { entries }
    }

    /// The seeded backoffice accounts, one per role.
    pub fn demo() -> Self {
        let created = at(1_704_103_200);
        let last_login = Some(at(1_718_013_600));
        let account = |id: &str, email: &str, name: &str, role: Role, department: &str| Principal {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            department: department.to_string(),
            status: UserStatus::Active,
            permissions: Vec::new(),
            created_at: created,
            updated_at: created,
            last_login,
        };

        Self::new(vec![
            Credential::new(
                DEMO_ADMIN_PASSWORD,
                account(
                    "1",
                    "admin@bancoademi.com",
                    "María González",
                    Role::Admin,
                    "Tecnología",
                ),
            ),
            Credential::new(
                DEMO_PASSWORD,
                account(
                    "2",
                    "cumplimiento@bancoademi.com",
                    "Laura Martínez",
                    Role::ComplianceOfficer,
                    "Cumplimiento",
                ),
            ),
            Credential::new(
                DEMO_PASSWORD,
                account(
                    "3",
                    "operaciones@bancoademi.com",
                    "Jorge Ramírez",
                    Role::OperationsManager,
                    "Operaciones",
                ),
            ),
            Credential::new(
                DEMO_PASSWORD,
                account(
                    "4",
                    "soporte@bancoademi.com",
                    "Ana Torres",
                    Role::SupportAgent,
                    "Atención al Cliente",
                ),
            ),
            Credential::new(
                DEMO_PASSWORD,
                account(
                    "5",
                    "producto@bancoademi.com",
                    "Diego Fernández",
                    Role::ProductManager,
                    "Productos",
                ),
            ),
            Credential::new(
                DEMO_PASSWORD,
                account(
                    "6",
                    "riesgos@bancoademi.com",
                    "Sofía Herrera",
                    Role::RiskAnalyst,
                    "Riesgos",
                ),
            ),
            Credential::new(
                DEMO_PASSWORD,
                account(
                    "7",
                    "auditoria@bancoademi.com",
                    "Andrés Castillo",
                    Role::Auditor,
                    "Auditoría Interna",
                ),
            ),
        ])
    }

    /// Exact, case-sensitive match on both email and password.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&Principal> {
        self.entries
            .iter()
            .find(|entry| entry.matches(email, password))
            .map(|entry| &entry.principal)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_table_covers_every_role_once() {
        let table = CredentialTable::demo();
        assert_eq!(table.len(), Role::ALL.len());
        for role in Role::ALL {
            let count = table
                .entries
                .iter()
                .filter(|entry| entry.principal.role == role)
                .count();
            assert_eq!(count, 1, "{role}");
        }
    }

    #[test]
    fn authenticate_requires_exact_match() {
        let table = CredentialTable::demo();
        let admin = table
            .authenticate("admin@bancoademi.com", "admin123")
            .expect("admin");
        assert_eq!(admin.role, Role::Admin);

        assert!(table.authenticate("admin@bancoademi.com", "wrongpass").is_none());
        assert!(table.authenticate("Admin@bancoademi.com", "admin123").is_none());
        assert!(table.authenticate("admin@bancoademi.com ", "admin123").is_none());
        assert!(table.authenticate("admin@bancoademi.com", "ADMIN123").is_none());
        assert!(table.authenticate("", "").is_none());
    }

    #[test]
    fn debug_output_redacts_password() {
        let table = CredentialTable::demo();
        let rendered = format!("{table:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("admin123"));
        assert!(!rendered.contains("demo123"));
    }

    #[test]
    fn empty_table_rejects_everything() {
        let table = CredentialTable::default();
        assert!(table.is_empty());
        assert!(table.authenticate("admin@bancoademi.com", "admin123").is_none());
    }
}
