use lexi_client_core::AppStore;
use lexi_shared::{
    const_config::validation::VALIDATION_MIN_PASSWORD_LENGTH,
    forms::{FieldError, ForgotPasswordForm, LoginForm, RegisterForm, ResetPasswordForm},
    req_args::api::ChangePasswordReqArgs,
};
use secrecy::{ExposeSecret as _, SecretString};
use tracing::warn;

use super::{finish, invalid_input, no_cb, require_user};
use crate::{
    cli::{LoginArgs, PasswordCommand, RegisterArgs},
    prompt,
};

pub async fn login(store: &AppStore, args: LoginArgs) -> anyhow::Result<()> {
    let form = LoginForm {
        email: args.email,
        password: prompt::secret_or_prompt(args.password, "Password")?,
    };
    let req_args = form.validate().map_err(invalid_input)?;
    let user = finish(store.session.login(req_args, no_cb)).await?;
    println!("Logged in as {}", user.display_name());
    Ok(())
}

pub async fn register(store: &AppStore, args: RegisterArgs) -> anyhow::Result<()> {
    let (password, confirm_password) = match args.password {
        Some(password) => {
            let password = SecretString::from(password);
            (password.clone(), password)
        }
        None => (
            prompt::secret("Password")?,
            prompt::secret("Confirm password")?,
        ),
    };
    let form = RegisterForm {
        full_name: args.full_name,
        email: args.email,
        password,
        confirm_password,
        organization_name: args.organization_name,
        terms_accepted: args.accept_terms,
    };
    let req_args = form.validate().map_err(invalid_input)?;
    let user = finish(store.session.register(req_args, no_cb)).await?;
    println!("Registered and logged in as {}", user.display_name());
    Ok(())
}

pub async fn logout(store: &AppStore) -> anyhow::Result<()> {
    let outcome = finish(store.session.logout(no_cb)).await;
    if let Err(err) = outcome {
        warn!(?err, "server did not confirm logout");
        eprintln!("Server did not confirm the logout: {err}");
    }
    println!("Logged out");
    Ok(())
}

pub async fn whoami(store: &AppStore) -> anyhow::Result<()> {
    let user = require_user(store).await?;
    println!("{} <{}>", user.display_name(), user.email);
    Ok(())
}

pub async fn password(store: &AppStore, command: PasswordCommand) -> anyhow::Result<()> {
    let message = match command {
        PasswordCommand::Change => {
            require_user(store).await?;
            let args = change_password_args(
                prompt::secret("Current password")?,
                prompt::secret("New password")?,
                prompt::secret("Confirm new password")?,
            )
            .map_err(invalid_input)?;
            finish(store.client.change_password(&args, no_cb)).await?
        }
        PasswordCommand::Forgot { email } => {
            let args = ForgotPasswordForm { email }
                .validate()
                .map_err(invalid_input)?;
            finish(store.client.request_password_reset(&args, no_cb)).await?
        }
        PasswordCommand::Reset { reset_token } => {
            let form = ResetPasswordForm {
                reset_token: reset_token.into(),
                password: prompt::secret("New password")?,
                confirm_password: prompt::secret("Confirm new password")?,
            };
            let args = form.validate().map_err(invalid_input)?;
            finish(store.client.reset_password(args, no_cb)).await?
        }
    };
    println!("{}", message.message.as_deref().unwrap_or("Done"));
    Ok(())
}

fn change_password_args(
    current_password: SecretString,
    new_password: SecretString,
    confirm_password: SecretString,
) -> Result<ChangePasswordReqArgs, Vec<FieldError>> {
    let mut errors = Vec::new();
    if current_password.expose_secret().is_empty() {
        errors.push(FieldError::new(
            "current_password",
            "Current password is required",
        ));
    }
    if new_password.expose_secret().chars().count() < VALIDATION_MIN_PASSWORD_LENGTH {
        errors.push(FieldError::new(
            "new_password",
            format!("Password must be at least {VALIDATION_MIN_PASSWORD_LENGTH} characters"),
        ));
    }
    if new_password.expose_secret() != confirm_password.expose_secret() {
        errors.push(FieldError::new("confirm_password", "Passwords don't match"));
    }
    if errors.is_empty() {
        Ok(ChangePasswordReqArgs {
            current_password,
            new_password,
        })
    } else {
        Err(errors)
    }
}
