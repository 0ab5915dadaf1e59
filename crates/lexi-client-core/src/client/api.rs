use futures::channel::oneshot;
use lexi_shared::{
    const_config::path::{
        PATH_AUTH_CHANGE_PASSWORD, PATH_AUTH_LOGIN, PATH_AUTH_LOGOUT, PATH_AUTH_ME,
        PATH_AUTH_REGISTER, PATH_AUTH_RESET_PASSWORD, PATH_AUTH_RESET_PASSWORD_REQUEST,
    },
    req_args::{
        api::ChangePasswordReqArgs, LoginReqArgs, PasswordResetRequestReqArgs, RegisterReqArgs,
        ResetPasswordReqArgs,
    },
    responses::{AuthResponse, MessageResponse, UserResponse},
    uac::User,
};
use secrecy::ExposeSecret as _;

use crate::{
    client::{Payload, UiCallBack},
    Client,
};

mod ai;
mod billing;
mod documents;
mod organizations;

pub use documents::DocumentUpload;

impl Client {
    /// Does not store the returned token, see [`crate::Session::login`]
    #[tracing::instrument(skip(ui_notify))]
    pub fn login<F: UiCallBack>(
        &self,
        args: LoginReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<AuthResponse>> {
        let args = serde_json::json!({
            "email": args.email,
            "password": args.password.expose_secret(),
        });
        self.send_request_expect_json(PATH_AUTH_LOGIN.route(), Payload::Json(args), ui_notify)
    }

    /// The server also creates the first organization of the new user
    #[tracing::instrument(skip(ui_notify))]
    pub fn register<F: UiCallBack>(
        &self,
        args: RegisterReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<AuthResponse>> {
        let args = serde_json::json!({
            "full_name": args.full_name,
            "email": args.email,
            "password": args.password.expose_secret(),
            "organization_name": args.organization_name,
        });
        self.send_request_expect_json(PATH_AUTH_REGISTER.route(), Payload::Json(args), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn current_user<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<User>> {
        self.send_request_expect_json_map(
            PATH_AUTH_ME.route(),
            Payload::Empty,
            |body: UserResponse| body.user,
            ui_notify,
        )
    }

    /// Only tells the server. Local credentials are cleared by
    /// [`crate::Session::logout`]
    #[tracing::instrument(skip(ui_notify))]
    pub fn logout<F: UiCallBack>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_AUTH_LOGOUT.route(), Payload::Empty, ui_notify)
    }

    #[tracing::instrument(skip(args, ui_notify))]
    pub fn change_password<F: UiCallBack>(
        &self,
        args: &ChangePasswordReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<MessageResponse>> {
        let args = serde_json::json!({
            "current_password": args.current_password.expose_secret(),
            "new_password": args.new_password.expose_secret(),
        });
        self.send_request_expect_json(
            PATH_AUTH_CHANGE_PASSWORD.route(),
            Payload::Json(args),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn request_password_reset<F: UiCallBack>(
        &self,
        args: &PasswordResetRequestReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<MessageResponse>> {
        let args = serde_json::json!({ "email": args.email });
        self.send_request_expect_json(
            PATH_AUTH_RESET_PASSWORD_REQUEST.route(),
            Payload::Json(args),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(args, ui_notify))]
    pub fn reset_password<F: UiCallBack>(
        &self,
        args: ResetPasswordReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<MessageResponse>> {
        let args = serde_json::json!({
            "reset_token": args.reset_token.expose_secret(),
            "new_password": args.new_password.expose_secret(),
        });
        self.send_request_expect_json(
            PATH_AUTH_RESET_PASSWORD.route(),
            Payload::Json(args),
            ui_notify,
        )
    }
}
