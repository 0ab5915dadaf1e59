use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;

#[derive(Clone)]
pub struct ChangePasswordReqArgs {
    pub current_password: SecretString,
    pub new_password: SecretString,
}

#[derive(Debug, serde::Serialize, Clone, PartialEq, Eq)]
pub struct SearchReqArgs {
    pub query: String,
}

impl Debug for ChangePasswordReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangePasswordReqArgs")
            .field(
                "has_current_password",
                &!self.current_password.expose_secret().is_empty(),
            )
            .field(
                "has_new_password",
                &!self.new_password.expose_secret().is_empty(),
            )
            .finish()
    }
}
