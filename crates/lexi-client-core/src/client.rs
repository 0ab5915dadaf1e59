use anyhow::Context;
use closure_traits::{ChannelCallBack, ChannelCallBackOutput};
use futures::channel::oneshot;
use lexi_shared::{
    const_config::{
        client::CLIENT_DEFAULT_API_BASE_URL, path::Route, storage::STORAGE_KEY_TOKEN,
    },
    errors::ApiError,
    req_args::QueryParams,
    token::AuthToken,
};
use secrecy::ExposeSecret as _;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use crate::{
    configuration::ClientSettings,
    storage::{FileStorage, MemoryStorage, SharedStorage},
};

pub mod api;

#[derive(Debug, Clone)]
pub struct Client {
    api_client: reqwest::Client,
    storage: SharedStorage,
    inner: Arc<Mutex<ClientInner>>,
}

#[derive(Debug)]
struct ClientInner {
    base_url: String,
}

/// What gets attached to a request besides the credentials
#[derive(Debug)]
pub enum Payload {
    Empty,
    /// Appended to the URL as the query string
    Query(QueryParams),
    /// Sent as the body with `Content-Type: application/json`
    Json(serde_json::Value),
    /// Sent as a multipart body, the boundary is set by the transport
    Form(reqwest::multipart::Form),
}

impl Default for Client {
    fn default() -> Self {
        Self::new(
            CLIENT_DEFAULT_API_BASE_URL.to_string(),
            Arc::new(MemoryStorage::default()),
        )
    }
}

impl ClientInner {
    #[tracing::instrument]
    fn new(base_url: String) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }
}

impl Client {
    #[tracing::instrument(name = "NEW CLIENT-CORE", skip(storage))]
    pub fn new(base_url: String, storage: SharedStorage) -> Self {
        Self {
            api_client: reqwest::Client::new(),
            storage,
            inner: Arc::new(Mutex::new(ClientInner::new(base_url))),
        }
    }

    /// Uses file backed storage at the configured location
    pub fn from_settings(settings: &ClientSettings) -> anyhow::Result<Self> {
        let storage = FileStorage::open(&settings.storage_path)?;
        Ok(Self::new(settings.api_base_url.clone(), Arc::new(storage)))
    }

    pub fn storage(&self) -> &SharedStorage {
        &self.storage
    }

    pub fn base_url(&self) -> String {
        self.inner.lock().expect("mutex poisoned").base_url.clone()
    }

    pub fn set_base_url(&self, base_url: String) {
        self.inner.lock().expect("mutex poisoned").base_url = normalize_base_url(base_url);
    }

    /// The persisted credential, read fresh on every call. Blank values count
    /// as no credential
    pub fn token(&self) -> Option<AuthToken> {
        match self.storage.get(STORAGE_KEY_TOKEN) {
            Ok(value) => value.and_then(AuthToken::new),
            Err(err) => {
                warn!(?err, "failed to read token from storage");
                None
            }
        }
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub(crate) fn store_token(&self, token: &AuthToken) -> anyhow::Result<()> {
        self.storage
            .set(STORAGE_KEY_TOKEN, token.expose_secret())
            .context("failed to persist token")
    }

    pub(crate) fn clear_token(&self) {
        lexi_shared::log_err_as_warn!(self.storage.remove(STORAGE_KEY_TOKEN));
    }

    #[tracing::instrument(skip(payload, on_done))]
    // WARNING: Must skip payload as it may contain sensitive info and "safe"
    // versions would usually already be logged by the caller
    fn initiate_request<F, O>(&self, route: Route, payload: Payload, on_done: F)
    where
        F: ChannelCallBack<O>,
        O: ChannelCallBackOutput,
    {
        // Built before spawning so the credential in use is the one present now
        let request = self.build_request(route, payload);
        tokio::spawn(async move {
            on_done(request.send().await).await;
        });
    }

    fn build_request(&self, route: Route, payload: Payload) -> reqwest::RequestBuilder {
        let mut request = self
            .api_client
            .request(route.method, self.path_to_url(&route.path));
        if let Some(token) = self.token() {
            request = request.bearer_auth(token.expose_secret());
        }
        match payload {
            Payload::Empty => request,
            Payload::Query(params) if params.is_empty() => request,
            Payload::Query(params) => request.query(params.pairs()),
            Payload::Json(body) => request.json(&body),
            Payload::Form(form) => request.multipart(form),
        }
    }

    fn send_request_expect_json<F, U>(
        &self,
        route: Route,
        payload: Payload,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        self.send_request_expect_json_map(route, payload, |body: U| body, ui_notify)
    }

    /// Parses the body as `U` then hands the caller what `map` extracts from
    /// it. Used to unwrap the envelopes the backend puts around its payloads
    fn send_request_expect_json_map<F, U, V, M>(
        &self,
        route: Route,
        payload: Payload,
        map: M,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<V>>
    where
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
        V: Send + 'static,
        M: 'static + Send + FnOnce(U) -> V,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_json_body::<U>(resp).await.map(map);
            deliver(tx, msg);
            ui_notify();
        };
        self.initiate_request(route, payload, on_done);
        rx
    }

    fn send_request_expect_empty<F>(
        &self,
        route: Route,
        payload: Payload,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_empty(resp).await;
            deliver(tx, msg);
            ui_notify();
        };
        self.initiate_request(route, payload, on_done);
        rx
    }

    /// Hands back the response as received. The status code is not checked
    fn send_request_raw<F>(
        &self,
        route: Route,
        payload: Payload,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<reqwest::Response>>
    where
        F: UiCallBack,
    {
        let (tx, rx) = oneshot::channel();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = extract_response(resp).map(|(response, _)| response);
            deliver(tx, msg);
            ui_notify();
        };
        self.initiate_request(route, payload, on_done);
        rx
    }

    #[tracing::instrument(ret)]
    fn path_to_url(&self, path: &str) -> String {
        format!(
            "{}{path}",
            &self.inner.lock().expect("failed to unlock client mutex").base_url
        )
    }
}

fn normalize_base_url(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

/// For results known before any request is sent
pub(crate) fn respond_now<F, T>(msg: anyhow::Result<T>, ui_notify: F) -> oneshot::Receiver<anyhow::Result<T>>
where
    F: UiCallBack,
{
    let (tx, rx) = oneshot::channel();
    deliver(tx, msg);
    ui_notify();
    rx
}

pub(crate) fn deliver<T>(tx: oneshot::Sender<T>, msg: T) {
    if tx.send(msg).is_err() {
        info!("receiver dropped before the response was delivered");
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_empty(response: reqwest::Result<reqwest::Response>) -> anyhow::Result<()> {
    let (response, status) = extract_response(response)?;
    if status.is_success() {
        Ok(())
    } else {
        Err(handle_error(response).await)
    }
}

#[tracing::instrument(ret, err(Debug))]
async fn process_json_body<T>(response: reqwest::Result<reqwest::Response>) -> anyhow::Result<T>
where
    T: Debug + serde::de::DeserializeOwned,
{
    let (response, status) = extract_response(response)?;
    if status.is_success() {
        Ok(response
            .json()
            .await
            .context("failed to parse result as json")?)
    } else {
        Err(handle_error(response).await)
    }
}

/// Converts a failure response into an [`ApiError`]. Never fails itself, if
/// the body has no usable message the status text is used instead
#[tracing::instrument(ret)]
async fn handle_error(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    debug_assert!(
        !status.is_success(),
        "this is supposed to be an error, right? Status code is: {status}"
    );
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            warn!(?err, "failed to get response body");
            String::new()
        }
    };
    let message = error_message_from_body(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string())
    });
    ApiError::new(status.as_u16(), message).into()
}

/// Extracts `error` from a body shaped like `{"error": "..."}`
fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}

/// Provides a way to standardize the error message
#[tracing::instrument(ret, err(Debug))]
fn extract_response(
    response: reqwest::Result<reqwest::Response>,
) -> anyhow::Result<(reqwest::Response, reqwest::StatusCode)> {
    if response.is_err() {
        info!("Response is err: {:#?}", response);
    }
    let response = response.context("failed to send request")?;
    let status = response.status();
    Ok((response, status))
}

pub trait UiCallBack: 'static + Send + FnOnce() {}
impl<T> UiCallBack for T where T: 'static + Send + FnOnce() {}

pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> + Send + 'static {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> + Send + 'static {}
}
