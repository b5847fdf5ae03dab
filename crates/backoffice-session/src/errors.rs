use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("corrupt persisted session: {0}")]
    CorruptSession(#[source] serde_json::Error),
    #[error("login failed: {0}")]
    LoginFailure(#[from] anyhow::Error),
}

impl AuthError {
    /// Message shown on the login screen.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "Credenciales inválidas",
            AuthError::CorruptSession(_) => {
                "La sesión guardada no es válida. Inicie sesión nuevamente."
            }
            AuthError::LoginFailure(_) => "Error al iniciar sesión. Intente nuevamente.",
        }
    }

    /// Whether retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AuthError::LoginFailure(_))
    }
}

pub type AuthResult<T> = Result<T, AuthError>;
