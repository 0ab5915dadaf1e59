use lexi_client_core::Session;
use serde_json::json;
use std::time::Duration;

pub use lexi_test_helper::{
    document_json, no_cb, organization_json, spawn_app, spawn_app_with_token, wait_until, TestApp,
};

/// Long enough that a second request is sure to overtake the first
pub const SLOW_RESPONSE: Duration = Duration::from_millis(300);

/// Logs in through a new session and returns it
pub async fn logged_in_session(app: &TestApp, token: &str) -> Session {
    app.mount_login_success(token).await;
    let session = Session::new(app.core_client.clone());
    session
        .login(app.test_user.login_args(), no_cb)
        .await
        .unwrap()
        .unwrap();
    session
}

pub fn error_body(message: &str) -> serde_json::Value {
    json!({ "error": message })
}
