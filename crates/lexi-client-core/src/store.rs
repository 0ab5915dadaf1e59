use crate::{configuration::ClientSettings, Client, OrganizationStore, Session};

/// Everything a front end needs, wired to the same client and storage.
///
/// Cheap to clone, all clones share state
#[derive(Debug, Clone)]
pub struct AppStore {
    pub client: Client,
    pub session: Session,
    pub organizations: OrganizationStore,
}

impl AppStore {
    pub fn new(client: Client) -> Self {
        Self {
            session: Session::new(client.clone()),
            organizations: OrganizationStore::new(client.clone()),
            client,
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> anyhow::Result<Self> {
        Ok(Self::new(Client::from_settings(settings)?))
    }

    /// Keeps the organizations in step with the session then resolves the
    /// session from the persisted token
    pub fn start<N>(&self, ui_notify: N) -> tokio::task::JoinHandle<()>
    where
        N: 'static + Send + Clone + Fn(),
    {
        let handle = self
            .organizations
            .follow_session(&self.session, ui_notify.clone());
        // The outcome is observed through the session
        let _ = self.session.boot(ui_notify);
        handle
    }
}
