//! Raw user input as entered into the auth and organization forms.
//!
//! Each form checks every field before anything is sent to the server and
//! either produces the request arguments or reports all failing fields at once

use secrecy::{ExposeSecret, SecretString};

use crate::{
    const_config::validation::VALIDATION_MIN_PASSWORD_LENGTH,
    organization::{OrganizationDraft, OrganizationName},
    req_args::{
        LoginReqArgs, PasswordResetRequestReqArgs, RegisterReqArgs, ResetPasswordReqArgs,
    },
    uac::{Email, FullName},
};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

pub type FormResult<T> = Result<T, Vec<FieldError>>;

#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug, Default, Clone)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    pub organization_name: String,
    pub terms_accepted: bool,
}

#[derive(Debug, Default, Clone)]
pub struct NewOrganizationForm {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Default, Clone)]
pub struct ForgotPasswordForm {
    pub email: String,
}

#[derive(Debug, Default, Clone)]
pub struct ResetPasswordForm {
    pub reset_token: SecretString,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl FieldError {
    pub fn new<S: Into<String>>(field: &'static str, message: S) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Collects field failures while the converted values are gathered
#[derive(Debug, Default)]
struct Checker(Vec<FieldError>);

impl Checker {
    fn check<T, E>(&mut self, field: &'static str, value: Result<T, E>, message: &str) -> Option<T> {
        match value {
            Ok(value) => Some(value),
            Err(_) => {
                self.fail(field, message);
                None
            }
        }
    }

    fn fail(&mut self, field: &'static str, message: &str) {
        self.0.push(FieldError::new(field, message));
    }

    fn password(&mut self, field: &'static str, password: &SecretString) {
        if password.expose_secret().chars().count() < VALIDATION_MIN_PASSWORD_LENGTH {
            self.fail(
                field,
                &format!("Password must be at least {VALIDATION_MIN_PASSWORD_LENGTH} characters"),
            );
        }
    }

    fn passwords_match(&mut self, password: &SecretString, confirm: &SecretString) {
        if password.expose_secret() != confirm.expose_secret() {
            self.fail("confirm_password", "Passwords don't match");
        }
    }

    fn finish<T>(self, value: Option<T>) -> FormResult<T> {
        match value {
            Some(value) if self.0.is_empty() => Ok(value),
            _ => Err(self.0),
        }
    }
}

const EMAIL_MSG: &str = "Please enter a valid email address";

impl LoginForm {
    pub fn validate(&self) -> FormResult<LoginReqArgs> {
        let mut checker = Checker::default();
        let email = self.email.trim();
        if email.is_empty() {
            checker.fail("email", EMAIL_MSG);
        }
        if self.password.expose_secret().is_empty() {
            checker.fail("password", "Password is required");
        }
        checker.finish(Some(LoginReqArgs::new(email, self.password.clone())))
    }
}

impl RegisterForm {
    pub fn validate(&self) -> FormResult<RegisterReqArgs> {
        let mut checker = Checker::default();
        let full_name = checker.check(
            "full_name",
            FullName::try_from(self.full_name.clone()),
            "Full name is required",
        );
        let email = checker.check("email", Email::try_from(self.email.as_str()), EMAIL_MSG);
        checker.password("password", &self.password);
        checker.passwords_match(&self.password, &self.confirm_password);
        let organization_name = checker.check(
            "organization_name",
            OrganizationName::try_from(self.organization_name.clone()),
            "Organization name is required",
        );
        if !self.terms_accepted {
            checker.fail("terms", "You must accept the terms and conditions");
        }
        let args = match (full_name, email, organization_name) {
            (Some(full_name), Some(email), Some(organization_name)) => Some(RegisterReqArgs {
                full_name,
                email,
                password: self.password.clone(),
                organization_name,
            }),
            _ => None,
        };
        checker.finish(args)
    }
}

impl NewOrganizationForm {
    pub fn validate(&self) -> FormResult<OrganizationDraft> {
        let mut checker = Checker::default();
        let name = checker.check(
            "name",
            OrganizationName::try_from(self.name.clone()),
            "Organization name is required",
        );
        let description = self.description.trim();
        let description = (!description.is_empty()).then(|| description.to_string());
        checker.finish(name.map(|name| OrganizationDraft { name, description }))
    }
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> FormResult<PasswordResetRequestReqArgs> {
        let mut checker = Checker::default();
        let email = checker.check("email", Email::try_from(self.email.as_str()), EMAIL_MSG);
        checker.finish(email.map(|email| PasswordResetRequestReqArgs { email }))
    }
}

impl ResetPasswordForm {
    pub fn validate(&self) -> FormResult<ResetPasswordReqArgs> {
        let mut checker = Checker::default();
        if self.reset_token.expose_secret().trim().is_empty() {
            checker.fail("reset_token", "Reset link is invalid or has expired");
        }
        checker.password("password", &self.password);
        checker.passwords_match(&self.password, &self.confirm_password);
        checker.finish(Some(ResetPasswordReqArgs {
            reset_token: self.reset_token.clone(),
            new_password: self.password.clone(),
        }))
    }
}
