//! Tracks who is logged in.
//!
//! A [`Session`] starts in [`SessionState::Loading`] and settles on
//! [`SessionState::Authenticated`] or [`SessionState::Anonymous`] once
//! [`Session::boot`] has checked the persisted token. Every transition is
//! published on a [`watch`] channel so dependents such as
//! [`crate::OrganizationStore`] can follow along

use anyhow::Context as _;
use futures::channel::oneshot;
use lexi_shared::{
    const_config::storage::STORAGE_KEY_CURRENT_ORGANIZATION,
    req_args::{LoginReqArgs, RegisterReqArgs},
    responses::AuthResponse,
    token::AuthToken,
    uac::User,
};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::{
    cancellation::{await_response, RequestSlot},
    client::{deliver, respond_now, UiCallBack},
    Client,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The persisted token has not been checked yet
    #[default]
    Loading,
    Authenticated(Arc<User>),
    Anonymous,
}

#[derive(Debug, Clone)]
pub struct Session {
    client: Client,
    inner: Arc<Mutex<SessionInner>>,
    state_tx: Arc<watch::Sender<SessionState>>,
}

#[derive(Debug, Default)]
struct SessionInner {
    error: Option<String>,
    is_booted: bool,
    in_flight: RequestSlot,
}

impl SessionState {
    pub fn user(&self) -> Option<&Arc<User>> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Loading | SessionState::Anonymous => None,
        }
    }

    /// Returns `true` if the session state is [`Authenticated`].
    ///
    /// [`Authenticated`]: SessionState::Authenticated
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(..))
    }

    /// Returns `true` if the session state is [`Loading`].
    ///
    /// [`Loading`]: SessionState::Loading
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl Session {
    pub fn new(client: Client) -> Self {
        let (state_tx, _) = watch::channel(SessionState::default());
        Self {
            client,
            inner: Default::default(),
            state_tx: Arc::new(state_tx),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    pub fn user(&self) -> Option<Arc<User>> {
        self.state().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state().is_loading()
    }

    /// Message of the last failed boot, login or registration
    pub fn error(&self) -> Option<String> {
        self.inner.lock().expect("mutex poisoned").error.clone()
    }

    /// Starts with the current state then sees every later transition
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    /// Resolves the initial state from the persisted token.
    ///
    /// Without a token no request is made. Only the first call does any work,
    /// later calls get the current state
    #[tracing::instrument(skip(ui_notify))]
    pub fn boot<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<SessionState>> {
        let token = {
            let mut guard = self.inner.lock().expect("mutex poisoned");
            if guard.is_booted {
                drop(guard);
                return respond_now(Ok(self.state()), ui_notify);
            }
            guard.is_booted = true;
            if !self.client.has_token() {
                info!("no token found, starting anonymous");
                self.transition(SessionState::Anonymous);
                drop(guard);
                return respond_now(Ok(SessionState::Anonymous), ui_notify);
            }
            guard.in_flight.begin()
        };

        let rx = self.client.current_user(|| {});
        let (tx, result_rx) = oneshot::channel();
        let session = self.clone();
        tokio::spawn(async move {
            let Some(response) = await_response(&token, rx).await else {
                return;
            };
            if let Err(err) = &response {
                // The token is kept, it may still be valid once the server is reachable
                warn!(?err, "failed to restore session");
            }
            let Some(outcome) =
                session.apply(&token, response.map(|user| (user, None)), false)
            else {
                return;
            };
            deliver(
                tx,
                Ok(outcome.map_or(SessionState::Anonymous, SessionState::Authenticated)),
            );
            ui_notify();
        });
        result_rx
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn login<F: UiCallBack>(
        &self,
        args: LoginReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Arc<User>>> {
        let token = self.begin_request();
        let rx = self.client.login(args, || {});
        self.absorb_auth_response(token, rx, ui_notify)
    }

    /// Same as [`Self::login`] but creates the account (and its first
    /// organization) first
    #[tracing::instrument(skip(ui_notify))]
    pub fn register<F: UiCallBack>(
        &self,
        args: RegisterReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Arc<User>>> {
        let token = self.begin_request();
        let rx = self.client.register(args, || {});
        self.absorb_auth_response(token, rx, ui_notify)
    }

    /// Tells the server then drops all local credentials. The session ends up
    /// anonymous even if the server could not be reached, the receiver only
    /// reports how the request went
    #[tracing::instrument(skip(ui_notify))]
    pub fn logout<F: UiCallBack>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<()>> {
        // Request is built here so it still carries the token cleared below
        let rx = self.client.logout(|| {});
        self.clear_local_state();

        let (tx, result_rx) = oneshot::channel();
        tokio::spawn(async move {
            let msg = rx
                .await
                .context("logout request dropped before completing")
                .and_then(|x| x);
            if let Err(err) = &msg {
                warn!(?err, "logout request failed, local session cleared anyway");
            }
            deliver(tx, msg);
            ui_notify();
        });
        result_rx
    }

    fn clear_local_state(&self) {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        guard.in_flight.cancel();
        guard.error = None;
        self.client.clear_token();
        lexi_shared::log_err_as_warn!(self
            .client
            .storage()
            .remove(STORAGE_KEY_CURRENT_ORGANIZATION));
        self.transition(SessionState::Anonymous);
    }

    fn begin_request(&self) -> CancellationToken {
        self.inner.lock().expect("mutex poisoned").in_flight.begin()
    }

    fn absorb_auth_response<F: UiCallBack>(
        &self,
        token: CancellationToken,
        rx: oneshot::Receiver<anyhow::Result<AuthResponse>>,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Arc<User>>> {
        let (tx, result_rx) = oneshot::channel();
        let session = self.clone();
        tokio::spawn(async move {
            let Some(response) = await_response(&token, rx).await else {
                return;
            };
            let response = response.map(|response| (response.user, Some(response.access_token)));
            let Some(outcome) = session.apply(&token, response, true) else {
                return;
            };
            deliver(tx, outcome);
            ui_notify();
        });
        result_rx
    }

    /// Records the outcome of a request unless it was superseded in the
    /// meantime (returns `None` in that case). A token that came with the user
    /// is persisted before the state changes. With `forget_token_on_failure`
    /// a failure also drops the persisted token so no request made while
    /// anonymous carries credentials
    fn apply(
        &self,
        token: &CancellationToken,
        outcome: anyhow::Result<(User, Option<AuthToken>)>,
        forget_token_on_failure: bool,
    ) -> Option<anyhow::Result<Arc<User>>> {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        if token.is_cancelled() {
            return None;
        }
        let outcome = outcome.and_then(|(user, auth_token)| {
            if let Some(auth_token) = auth_token {
                self.client.store_token(&auth_token)?;
            }
            Ok(Arc::new(user))
        });
        let new_state = match &outcome {
            Ok(user) => {
                guard.error = None;
                SessionState::Authenticated(Arc::clone(user))
            }
            Err(err) => {
                guard.error = Some(err.to_string());
                if forget_token_on_failure {
                    self.client.clear_token();
                }
                SessionState::Anonymous
            }
        };
        self.transition(new_state);
        Some(outcome)
    }

    /// Callers hold the lock on `inner` so that a superseded request can not
    /// publish after a newer one
    fn transition(&self, new_state: SessionState) {
        info!(?new_state, "session state changed");
        self.state_tx.send_replace(new_state);
    }
}
