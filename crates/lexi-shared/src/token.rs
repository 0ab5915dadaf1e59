use secrecy::{ExposeSecret, SecretString};

/// Bearer token handed out by the backend on login or registration
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(transparent)]
pub struct AuthToken(SecretString);

impl AuthToken {
    /// Returns `None` for blank values so that an empty credential is never
    /// sent in place of a missing one
    pub fn new(value: String) -> Option<Self> {
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value.into()))
        }
    }
}

impl ExposeSecret<str> for AuthToken {
    fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}
