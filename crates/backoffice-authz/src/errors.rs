use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
    #[error("invalid permission: {0}")]
    InvalidPermission(String),
    #[error("unknown domain: {0}")]
    UnknownDomain(String),
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("action {action} is not defined for domain {domain}")]
    UnsupportedAction { domain: String, action: String },
    #[error("invalid role: {0}")]
    InvalidRole(String),
}

pub type AuthzResult<T> = Result<T, AuthzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_variants() {
        let errors = vec![
            AuthzError::InvalidPermission("bad".to_string()),
            AuthzError::UnknownDomain("bad".to_string()),
            AuthzError::UnknownAction("bad".to_string()),
            AuthzError::UnsupportedAction {
                domain: "auditoria".to_string(),
                action: "delete".to_string(),
            },
            AuthzError::InvalidRole("root".to_string()),
        ];

        for error in errors {
            let rendered = error.to_string();
            assert!(!rendered.is_empty());
        }
    }

    #[test]
    fn unsupported_action_names_both_parts() {
        let err = AuthzError::UnsupportedAction {
            domain: "auditoria".to_string(),
            action: "delete".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "action delete is not defined for domain auditoria"
        );
    }
}
