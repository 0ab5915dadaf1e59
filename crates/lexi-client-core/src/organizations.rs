use anyhow::Context as _;
use futures::channel::oneshot;
use lexi_shared::{
    const_config::storage::STORAGE_KEY_CURRENT_ORGANIZATION,
    id::DbId,
    organization::{Organization, OrganizationDraft},
};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::{
    cancellation::{await_response, RequestSlot},
    client::{deliver, UiCallBack},
    Client, Session, SessionState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationState {
    pub organizations: Vec<Organization>,
    /// Always a member of `organizations` after a successful fetch or create
    pub current: Option<Organization>,
    pub loading: bool,
    pub error: Option<String>,
}

/// The organizations of the logged in user and which one is being worked in
#[derive(Debug, Clone)]
pub struct OrganizationStore {
    client: Client,
    inner: Arc<Mutex<OrganizationStoreInner>>,
}

#[derive(Debug)]
struct OrganizationStoreInner {
    state: OrganizationState,
    in_flight: RequestSlot,
    /// True until the list has been loaded (or cleared) and while a fetch is
    /// outstanding
    is_fetching: bool,
    creates_pending: usize,
    /// Cancelled when the state is cleared so creations started before then
    /// are not applied afterwards
    scope: CancellationToken,
}

impl Default for OrganizationStoreInner {
    fn default() -> Self {
        Self {
            state: OrganizationState::default(),
            in_flight: RequestSlot::default(),
            is_fetching: true,
            creates_pending: 0,
            scope: CancellationToken::new(),
        }
    }
}

impl OrganizationStoreInner {
    fn update_loading(&mut self) {
        self.state.loading = self.is_fetching || self.creates_pending > 0;
    }
}

impl Default for OrganizationState {
    fn default() -> Self {
        Self {
            organizations: Vec::new(),
            current: None,
            loading: true,
            error: None,
        }
    }
}

impl OrganizationState {
    fn cleared() -> Self {
        Self {
            loading: false,
            ..Default::default()
        }
    }
}

impl OrganizationStore {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            inner: Default::default(),
        }
    }

    pub fn state(&self) -> OrganizationState {
        self.inner.lock().expect("mutex poisoned").state.clone()
    }

    pub fn organizations(&self) -> Vec<Organization> {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .state
            .organizations
            .clone()
    }

    pub fn current(&self) -> Option<Organization> {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .state
            .current
            .clone()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().expect("mutex poisoned").state.loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner
            .lock()
            .expect("mutex poisoned")
            .state
            .error
            .clone()
    }

    /// Brings the store in line with the session.
    ///
    /// Authenticated starts a fetch and returns its receiver. Anonymous clears
    /// everything and cancels any fetch. Loading leaves the store untouched
    #[tracing::instrument(skip(ui_notify))]
    pub fn sync_with_session<F: UiCallBack>(
        &self,
        session_state: &SessionState,
        ui_notify: F,
    ) -> Option<oneshot::Receiver<anyhow::Result<Vec<Organization>>>> {
        match session_state {
            SessionState::Loading => None,
            SessionState::Authenticated(_) => Some(self.fetch(ui_notify)),
            SessionState::Anonymous => {
                self.clear();
                ui_notify();
                None
            }
        }
    }

    /// Applies [`Self::sync_with_session`] on every session transition until
    /// the session is dropped
    pub fn follow_session<N>(
        &self,
        session: &Session,
        ui_notify: N,
    ) -> tokio::task::JoinHandle<()>
    where
        N: 'static + Send + Clone + Fn(),
    {
        let mut rx = session.subscribe();
        let store = self.clone();
        tokio::spawn(async move {
            loop {
                let session_state = rx.borrow_and_update().clone();
                // Fetch results are applied to the store even if nobody waits on them
                let _ = store.sync_with_session(&session_state, ui_notify.clone());
                if rx.changed().await.is_err() {
                    debug!("session dropped, no longer following");
                    break;
                }
            }
        })
    }

    /// Replaces the list with what the server has. A newer fetch or clearing
    /// the store discards the result of an older fetch
    #[tracing::instrument(skip(ui_notify))]
    pub fn fetch<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Organization>>> {
        let token = {
            let mut guard = self.inner.lock().expect("mutex poisoned");
            guard.is_fetching = true;
            guard.update_loading();
            guard.state.error = None;
            guard.in_flight.begin()
        };
        let rx = self.client.get_organizations(|| {});
        let (tx, result_rx) = oneshot::channel();
        let store = self.clone();
        tokio::spawn(async move {
            let Some(response) = await_response(&token, rx).await else {
                return;
            };
            let Some(outcome) = store.apply_fetch(&token, response) else {
                return;
            };
            deliver(tx, outcome);
            ui_notify();
        });
        result_rx
    }

    fn apply_fetch(
        &self,
        token: &CancellationToken,
        response: anyhow::Result<Vec<Organization>>,
    ) -> Option<anyhow::Result<Vec<Organization>>> {
        let persisted = self.persisted_selection();
        let mut guard = self.inner.lock().expect("mutex poisoned");
        if token.is_cancelled() {
            debug!("organization fetch superseded");
            return None;
        }
        guard.is_fetching = false;
        guard.update_loading();
        Some(match response {
            Ok(organizations) => {
                guard.state.current = select_current(&organizations, persisted);
                guard.state.organizations = organizations.clone();
                Ok(organizations)
            }
            Err(err) => {
                // Previously loaded organizations stay usable
                guard.state.error = Some(err.to_string());
                Err(err)
            }
        })
    }

    /// Adds the new organization to the list. It only becomes the current one
    /// if none was selected
    #[tracing::instrument(skip(ui_notify))]
    pub fn create_organization<F: UiCallBack>(
        &self,
        args: &OrganizationDraft,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Organization>> {
        let scope = {
            let mut guard = self.inner.lock().expect("mutex poisoned");
            guard.creates_pending += 1;
            guard.update_loading();
            guard.state.error = None;
            guard.scope.clone()
        };
        let rx = self.client.create_organization(args, || {});
        let (tx, result_rx) = oneshot::channel();
        let store = self.clone();
        tokio::spawn(async move {
            let Some(response) = await_response(&scope, rx).await else {
                return;
            };
            let Some(outcome) = store.apply_created(&scope, response) else {
                return;
            };
            deliver(tx, outcome);
            ui_notify();
        });
        result_rx
    }

    fn apply_created(
        &self,
        scope: &CancellationToken,
        response: anyhow::Result<Organization>,
    ) -> Option<anyhow::Result<Organization>> {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        if scope.is_cancelled() {
            debug!("store cleared while creating organization");
            return None;
        }
        guard.creates_pending = guard.creates_pending.saturating_sub(1);
        guard.update_loading();
        Some(match response {
            Ok(organization) => {
                guard.state.organizations.push(organization.clone());
                if guard.state.current.is_none() {
                    guard.state.current = Some(organization.clone());
                }
                Ok(organization)
            }
            Err(err) => {
                guard.state.error = Some(err.to_string());
                Err(err)
            }
        })
    }

    /// Selects and persists `id`. Returns `false` without changing anything
    /// if `id` is not one of the loaded organizations
    #[tracing::instrument]
    pub fn switch_organization(&self, id: DbId) -> bool {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        let Some(organization) = guard
            .state
            .organizations
            .iter()
            .find(|org| org.id == id)
            .cloned()
        else {
            debug!("organization not loaded, ignoring switch");
            return false;
        };
        guard.state.current = Some(organization);
        drop(guard);
        lexi_shared::log_err_as_warn!(self
            .client
            .storage()
            .set(STORAGE_KEY_CURRENT_ORGANIZATION, &id.to_string())
            .context("failed to persist selected organization"));
        true
    }

    fn clear(&self) {
        let mut guard = self.inner.lock().expect("mutex poisoned");
        guard.in_flight.cancel();
        guard.scope.cancel();
        guard.scope = CancellationToken::new();
        guard.is_fetching = false;
        guard.creates_pending = 0;
        guard.state = OrganizationState::cleared();
    }

    /// Ids that are not numeric are treated as no selection
    fn persisted_selection(&self) -> Option<DbId> {
        match self.client.storage().get(STORAGE_KEY_CURRENT_ORGANIZATION) {
            Ok(value) => value.and_then(|value| value.parse().ok()),
            Err(err) => {
                warn!(?err, "failed to read selected organization");
                None
            }
        }
    }
}

/// The persisted organization if it is in the list, otherwise the first one
pub fn select_current(
    organizations: &[Organization],
    persisted: Option<DbId>,
) -> Option<Organization> {
    persisted
        .and_then(|id| organizations.iter().find(|org| org.id == id))
        .or_else(|| organizations.first())
        .cloned()
}
