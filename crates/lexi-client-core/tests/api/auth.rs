use crate::helpers::{error_body, no_cb, spawn_app, spawn_app_with_token};
use lexi_shared::req_args::{
    api::ChangePasswordReqArgs, PasswordResetRequestReqArgs, ResetPasswordReqArgs,
};
use secrecy::ExposeSecret as _;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn login_sends_credentials_and_returns_token() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path(app.api_path("/auth/login")))
        .and(body_json(json!({
            "email": app.test_user.email,
            "password": app.test_user.password,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Login successful",
            "user": app.test_user.as_json(),
            "access_token": "jwt-123",
        })))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let outcome = app
        .core_client
        .login(app.test_user.login_args(), no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(outcome.access_token.expose_secret(), "jwt-123");
    assert_eq!(outcome.user.email, app.test_user.email);
    // Persisting the token is up to the session
    assert_eq!(app.stored_token(), None);
}

#[tokio::test]
async fn login_failure_invalid_credentials() {
    // Arrange
    let app = spawn_app().await;
    app.mount_json("POST", "/auth/login", 401, error_body("Invalid credentials"))
        .await;

    // Act
    let outcome = app
        .core_client
        .login(app.test_user.login_args(), no_cb)
        .await
        .unwrap();

    // Assert
    assert_eq!(outcome.unwrap_err().to_string(), "Invalid credentials");
}

#[tokio::test]
async fn register_sends_all_fields() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path(app.api_path("/auth/register")))
        .and(body_json(json!({
            "full_name": app.test_user.full_name,
            "email": app.test_user.email,
            "password": app.test_user.password,
            "organization_name": "Acme Legal",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "User registered successfully",
            "user": app.test_user.as_json(),
            "access_token": "jwt-new",
        })))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let outcome = app
        .core_client
        .register(app.test_user.register_args("Acme Legal"), no_cb)
        .await
        .unwrap();

    // Assert
    assert_eq!(outcome.unwrap().access_token.expose_secret(), "jwt-new");
}

#[tokio::test]
async fn register_failure_email_taken() {
    // Arrange
    let app = spawn_app().await;
    app.mount_json(
        "POST",
        "/auth/register",
        409,
        error_body("Email already registered"),
    )
    .await;

    // Act
    let outcome = app
        .core_client
        .register(app.test_user.register_args("Acme Legal"), no_cb)
        .await
        .unwrap();

    // Assert
    assert_eq!(outcome.unwrap_err().to_string(), "Email already registered");
}

#[tokio::test]
async fn current_user_unwraps_envelope() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_current_user().await;

    // Act
    let user = app
        .core_client
        .current_user(no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(user.id, app.test_user.id.into());
    assert_eq!(user.full_name, app.test_user.full_name);
}

#[tokio::test]
async fn change_password_sends_both_passwords() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    Mock::given(method("POST"))
        .and(path(app.api_path("/auth/change-password")))
        .and(header("authorization", "Bearer abc"))
        .and(body_json(json!({
            "current_password": "old-password",
            "new_password": "new-password",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Password changed successfully" })),
        )
        .expect(1)
        .mount(&app.mock_server)
        .await;
    let args = ChangePasswordReqArgs {
        current_password: "old-password".to_string().into(),
        new_password: "new-password".to_string().into(),
    };

    // Act
    let outcome = app
        .core_client
        .change_password(&args, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(
        outcome.message.as_deref(),
        Some("Password changed successfully")
    );
}

#[tokio::test]
async fn password_reset_flow() {
    // Arrange
    let app = spawn_app().await;
    Mock::given(method("POST"))
        .and(path(app.api_path("/auth/reset-password-request")))
        .and(body_json(json!({ "email": app.test_user.email })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "If your email is registered, you will receive a password reset link"
        })))
        .expect(1)
        .mount(&app.mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(app.api_path("/auth/reset-password")))
        .and(body_json(json!({
            "reset_token": "reset-xyz",
            "new_password": "brand-new-password",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Password has been reset successfully" })),
        )
        .expect(1)
        .mount(&app.mock_server)
        .await;
    let request_args = PasswordResetRequestReqArgs {
        email: app.test_user.email.as_str().try_into().unwrap(),
    };
    let reset_args = ResetPasswordReqArgs {
        reset_token: "reset-xyz".to_string().into(),
        new_password: "brand-new-password".to_string().into(),
    };

    // Act
    let requested = app
        .core_client
        .request_password_reset(&request_args, no_cb)
        .await
        .unwrap();
    let reset = app
        .core_client
        .reset_password(reset_args, no_cb)
        .await
        .unwrap();

    // Assert
    assert!(requested.is_ok());
    assert_eq!(
        reset.unwrap().message.as_deref(),
        Some("Password has been reset successfully")
    );
}

#[tokio::test]
async fn logout_only_contacts_server() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_logout(200).await;

    // Act
    let outcome = app.core_client.logout(no_cb).await.unwrap();

    // Assert
    assert!(outcome.is_ok());
    assert_eq!(app.stored_token().as_deref(), Some("abc"));
}
