//! Signed-in user model and its persisted JSON form.
//!
//! # Purpose
//! Describes the principal kept in the session and how it is encoded under
//! the storage key.
//!
//! # Key invariants
//! - The encoded form uses camelCase field names and never carries a password;
//!   any unknown field (a `password` included) makes the stored value invalid.
//! - `permissions` is kept for format compatibility only. Authorization always
//!   goes through the role map.
use crate::{AuthError, AuthResult};
use backoffice_authz::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    Blocked,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
            UserStatus::Blocked => "blocked",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Principal {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub department: String,
    pub status: UserStatus,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl Principal {
    /// Encode for the durable storage slot.
    pub fn to_storage_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode a persisted value.
    ///
    /// # Errors
    /// - [`AuthError::CorruptSession`] for anything that is not exactly a
    ///   principal object.
    pub fn from_storage_json(raw: &str) -> AuthResult<Self> {
        serde_json::from_str(raw).map_err(AuthError::CorruptSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Principal {
        let created = DateTime::from_timestamp(1_704_067_200, 0).expect("timestamp");
        Principal {
            id: "4".to_string(),
            email: "soporte@bancoademi.com".to_string(),
            name: "Ana Torres".to_string(),
            role: Role::SupportAgent,
            department: "Atención al Cliente".to_string(),
            status: UserStatus::Active,
            permissions: Vec::new(),
            created_at: created,
            updated_at: created,
            last_login: None,
        }
    }

    #[test]
    fn encoded_form_uses_camel_case_fields() {
        let json = sample().to_storage_json().expect("encode");
        let value: serde_json::Value = serde_json::from_str(&json).expect("json");
        for field in [
            "id",
            "email",
            "name",
            "role",
            "department",
            "status",
            "permissions",
            "createdAt",
            "updatedAt",
            "lastLogin",
        ] {
            assert!(value.get(field).is_some(), "missing {field}");
        }
        assert_eq!(value["role"], "support_agent");
        assert_eq!(value["status"], "active");
        assert!(value.get("password").is_none());
    }

    #[test]
    fn storage_round_trip_is_lossless() {
        let mut principal = sample();
        principal.last_login = DateTime::from_timestamp(1_717_000_000, 0);
        let json = principal.to_storage_json().expect("encode");
        let decoded = Principal::from_storage_json(&json).expect("decode");
        assert_eq!(decoded, principal);
    }

    #[test]
    fn password_field_marks_value_corrupt() {
        let mut value = serde_json::to_value(sample()).expect("value");
        value["password"] = serde_json::json!("demo123");
        let err = Principal::from_storage_json(&value.to_string()).expect_err("corrupt");
        assert!(matches!(err, AuthError::CorruptSession(_)));
    }

    #[test]
    fn shape_mismatches_are_corrupt() {
        let mut wrong_role = serde_json::to_value(sample()).expect("value");
        wrong_role["role"] = serde_json::json!("superuser");
        for raw in [
            "not json".to_string(),
            "null".to_string(),
            "{}".to_string(),
            "[]".to_string(),
            wrong_role.to_string(),
        ] {
            assert!(
                matches!(
                    Principal::from_storage_json(&raw),
                    Err(AuthError::CorruptSession(_))
                ),
                "{raw}"
            );
        }
    }

    #[test]
    fn missing_permissions_defaults_to_empty() {
        let mut value = serde_json::to_value(sample()).expect("value");
        value.as_object_mut().expect("object").remove("permissions");
        let decoded = Principal::from_storage_json(&value.to_string()).expect("decode");
        assert!(decoded.permissions.is_empty());
    }
}
