//! This module stores the expected format of the arguments for the requests.
//! Arguments for endpoints that need no token live at the top level and
//! those that need a logged in user live in [`api`]. Password carrying types
//! are not serializable on purpose, the client builds their bodies explicitly

use crate::{
    organization::OrganizationName,
    uac::{Email, FullName},
};
use anyhow::{bail, Context};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::fmt::Debug;

pub mod api;

#[derive(Clone)]
pub struct LoginReqArgs {
    pub email: String,
    pub password: SecretString,
}

/// Registration also creates the first organization of the user on the server
#[derive(Clone)]
pub struct RegisterReqArgs {
    pub full_name: FullName,
    pub email: Email,
    pub password: SecretString,
    pub organization_name: OrganizationName,
}

#[derive(Debug, serde::Serialize, Clone)]
pub struct PasswordResetRequestReqArgs {
    pub email: Email,
}

#[derive(Clone)]
pub struct ResetPasswordReqArgs {
    pub reset_token: SecretString,
    pub new_password: SecretString,
}

/// Flat key-value pairs destined for a URL query string
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl LoginReqArgs {
    pub fn new<S: Into<String>>(email: S, password: SecretString) -> Self {
        Self {
            email: email.into(),
            password,
        }
    }

    pub fn email(mut self, email: String) -> Self {
        self.email = email;
        self
    }

    pub fn password(mut self, password: SecretString) -> Self {
        self.password = password;
        self
    }
}

impl Debug for LoginReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginReqArgs")
            .field("email", &self.email)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .finish()
    }
}

impl Debug for RegisterReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterReqArgs")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .field("organization_name", &self.organization_name)
            .finish()
    }
}

impl Debug for ResetPasswordReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetPasswordReqArgs")
            .field("has_reset_token", &!self.reset_token.expose_secret().is_empty())
            .field("has_new_password", &!self.new_password.expose_secret().is_empty())
            .finish()
    }
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Flattens a struct into pairs. Fields that serialize to `null` are
    /// skipped and nested values are rejected
    pub fn from_serializable<T: serde::Serialize>(params: &T) -> anyhow::Result<Self> {
        let value = serde_json::to_value(params).context("failed to convert query parameters")?;
        let Value::Object(map) = value else {
            bail!("query parameters must serialize to a map but got: {value}");
        };
        let mut pairs = Vec::with_capacity(map.len());
        for (key, value) in map {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    bail!("query parameter {key:?} is not a flat value")
                }
            };
            pairs.push((key, value));
        }
        Ok(Self(pairs))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }
}
