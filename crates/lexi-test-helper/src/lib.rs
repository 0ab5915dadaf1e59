//! Stands in for the LexiAI backend during integration tests.
//!
//! Each [`TestApp`] gets its own [`MockServer`] and in memory storage so tests
//! can run in parallel. Set `TEST_LOG` to write traces to a file

#![warn(unused_crate_dependencies)]

use lexi_client_core::{storage::MemoryStorage, Client};
use lexi_shared::{
    const_config::storage::{STORAGE_KEY_CURRENT_ORGANIZATION, STORAGE_KEY_TOKEN},
    req_args::{LoginReqArgs, RegisterReqArgs},
    telemetry::{self, get_subscriber, init_subscriber},
};
use serde_json::{json, Value};
use std::fmt::Debug;
use std::ops::Deref;
use std::sync::{Arc, LazyLock};
use std::time::{Duration, Instant};
use uuid::Uuid;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

pub use wiremock;

const WAIT_TIMEOUT: Duration = Duration::from_secs(2);

/// Prefix every mocked route is served under, mirrors the real `/api`
pub const API_PREFIX: &str = "/api";

// Ensure that the `tracing` stack is only initialised once
pub static TRACING: LazyLock<String> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let log_file_name = format!("client_tests{}", Uuid::new_v4());
        let (file, path) = telemetry::create_trace_file(&log_file_name).unwrap();
        let subscriber = get_subscriber(subscriber_name, default_filter_level, file);
        init_subscriber(subscriber).unwrap();
        format!("Traces for tests being written to: {path:?}")
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).unwrap();
        "Traces set to std::io::sink".to_string()
    }
});

pub struct TestApp {
    pub mock_server: MockServer,
    pub storage: Arc<MemoryStorage>,
    pub core_client: Client,
    pub test_user: TestUser,
}

impl Debug for TestApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestApp")
            .field("address", &self.mock_server.uri())
            .field("test_user", &self.test_user)
            .finish()
    }
}

/// Empty function for use when a call back isn't needed
pub fn no_cb() {}

/// Starts a backend with nothing mounted and a client with empty storage
pub async fn spawn_app() -> TestApp {
    start_tracing();
    let mock_server = MockServer::start().await;
    let storage = Arc::new(MemoryStorage::default());
    let core_client = Client::new(
        format!("{}{API_PREFIX}", mock_server.uri()),
        storage.clone(),
    );
    TestApp {
        mock_server,
        storage,
        core_client,
        test_user: TestUser::generate(),
    }
}

/// Same as [`spawn_app`] but as if a previous run had logged in
pub async fn spawn_app_with_token(token: &str) -> TestApp {
    let app = spawn_app().await;
    app.set_stored(STORAGE_KEY_TOKEN, token);
    app
}

/// Polls `condition` until it holds. Panics after a couple of seconds
pub async fn wait_until<F: Fn() -> bool>(condition: F) {
    let start = Instant::now();
    while !condition() {
        assert!(
            start.elapsed() < WAIT_TIMEOUT,
            "timed out after {WAIT_TIMEOUT:?} waiting for condition"
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

fn start_tracing() {
    // Accessing TRACING also forces the LazyLock to initialize
    let logging_msg = TRACING.deref();
    println!("{logging_msg}");
}

impl TestApp {
    pub fn api_path(&self, relative: &str) -> String {
        format!("{API_PREFIX}{relative}")
    }

    pub fn set_stored(&self, key: &str, value: &str) {
        use lexi_client_core::storage::Storage as _;
        self.storage.set(key, value).unwrap();
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        use lexi_client_core::storage::Storage as _;
        self.storage.get(key).unwrap()
    }

    pub fn stored_token(&self) -> Option<String> {
        self.stored(STORAGE_KEY_TOKEN)
    }

    pub fn stored_organization(&self) -> Option<String> {
        self.stored(STORAGE_KEY_CURRENT_ORGANIZATION)
    }

    /// Responds to `method relative_path` with `status` and a JSON body
    pub async fn mount_json(
        &self,
        method_name: &str,
        relative_path: &str,
        status: u16,
        body: Value,
    ) {
        Mock::given(method(method_name))
            .and(path(self.api_path(relative_path)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn mount_login_success(&self, token: &str) {
        self.mount_json(
            "POST",
            "/auth/login",
            200,
            json!({
                "message": "Login successful",
                "user": self.test_user.as_json(),
                "access_token": token,
            }),
        )
        .await;
    }

    pub async fn mount_current_user(&self) {
        self.mount_json(
            "GET",
            "/auth/me",
            200,
            json!({ "user": self.test_user.as_json() }),
        )
        .await;
    }

    pub async fn mount_logout(&self, status: u16) {
        self.mount_json(
            "POST",
            "/auth/logout",
            status,
            json!({ "message": "Logout successful" }),
        )
        .await;
    }

    pub async fn mount_organizations(&self, ids: &[u64]) {
        let organizations: Vec<Value> = ids.iter().map(|id| organization_json(*id)).collect();
        self.mount_json(
            "GET",
            "/organizations",
            200,
            json!({ "organizations": organizations }),
        )
        .await;
    }

    pub async fn received_requests(&self) -> Vec<Request> {
        self.mock_server
            .received_requests()
            .await
            .expect("request recording is enabled by default")
    }

    /// Waits until the backend has seen `count` requests
    pub async fn wait_for_requests(&self, count: usize) {
        let start = Instant::now();
        while self.received_requests().await.len() < count {
            assert!(
                start.elapsed() < WAIT_TIMEOUT,
                "timed out after {WAIT_TIMEOUT:?} waiting for {count} requests"
            );
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}

pub fn organization_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("Organization {id}"),
        "description": null,
        "created_at": "2024-01-15T10:30:00",
        "updated_at": "2024-01-15T10:30:00",
    })
}

pub fn document_json(id: u64, organization_id: u64) -> Value {
    json!({
        "id": id,
        "organization_id": organization_id,
        "uploaded_by_user_id": 1,
        "title": format!("Document {id}"),
        "description": "Master services agreement",
        "file_type": "pdf",
        "file_size": 2048,
        "status": "completed",
        "processing_error": null,
        "created_at": "2024-01-15T10:30:00",
        "updated_at": "2024-01-15T10:30:00",
    })
}

#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: u64,
    pub email: String,
    pub full_name: String,
    pub password: String,
}

impl TestUser {
    pub fn generate() -> Self {
        let unique = &Uuid::new_v4().simple().to_string()[..12];
        Self {
            id: 1,
            email: format!("user-{unique}@example.com"),
            full_name: "Test User".to_string(),
            password: Uuid::new_v4().to_string(),
        }
    }

    pub fn login_args(&self) -> LoginReqArgs {
        LoginReqArgs::new(self.email.clone(), self.password.clone().into())
    }

    pub fn register_args(&self, organization_name: &str) -> RegisterReqArgs {
        RegisterReqArgs {
            full_name: self.full_name.clone().try_into().unwrap(),
            email: self.email.as_str().try_into().unwrap(),
            password: self.password.clone().into(),
            organization_name: organization_name.try_into().unwrap(),
        }
    }

    pub fn as_json(&self) -> Value {
        json!({
            "id": self.id,
            "email": self.email,
            "full_name": self.full_name,
            "avatar_url": null,
        })
    }
}
