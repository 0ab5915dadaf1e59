//! One handler per subcommand. Each builds on the shared [`AppStore`] so the
//! token and selected organization persist between runs

use anyhow::Context as _;
use futures::channel::oneshot;
use lexi_client_core::{configuration, AppStore, SessionState};
use lexi_shared::{
    errors::{NoOrganizationSelectedError, NotLoggedInError},
    forms::FieldError,
    id::DbId,
    uac::User,
};
use std::sync::Arc;
use tracing::info;

use crate::cli::{Cli, Command};

mod ai;
mod auth;
mod billing;
mod documents;
mod organizations;

#[tracing::instrument(skip(cli))]
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = configuration::get_configuration_from(&cli.config)
        .with_context(|| format!("failed to load configuration from {:?}", cli.config))?;
    if let Some(api_base_url) = cli.api_base_url {
        settings.api_base_url = api_base_url;
    }
    info!(?settings, command = ?cli.command);
    let store = AppStore::from_settings(&settings)?;

    match cli.command {
        Command::Login(args) => auth::login(&store, args).await,
        Command::Register(args) => auth::register(&store, args).await,
        Command::Logout => auth::logout(&store).await,
        Command::Whoami => auth::whoami(&store).await,
        Command::Password(command) => auth::password(&store, command).await,
        Command::Organizations(command) => organizations::run(&store, command).await,
        Command::Documents(command) => documents::run(&store, command).await,
        Command::Ai(command) => ai::run(&store, command).await,
        Command::Billing(command) => billing::run(&store, command).await,
    }
}

/// Empty function for use when a call back isn't needed
fn no_cb() {}

/// Waits for a request started through the core
async fn finish<T>(rx: oneshot::Receiver<anyhow::Result<T>>) -> anyhow::Result<T> {
    rx.await
        .context("request was superseded before it completed")?
}

/// Fails early instead of letting the server reject a request without
/// credentials
fn require_token(store: &AppStore) -> anyhow::Result<()> {
    if store.client.has_token() {
        Ok(())
    } else {
        Err(NotLoggedInError.into())
    }
}

/// Restores the session from the stored token
async fn require_user(store: &AppStore) -> anyhow::Result<Arc<User>> {
    match finish(store.session.boot(no_cb)).await? {
        SessionState::Authenticated(user) => Ok(user),
        SessionState::Loading | SessionState::Anonymous => match store.session.error() {
            Some(reason) => Err(anyhow::anyhow!(reason).context(NotLoggedInError)),
            None => Err(NotLoggedInError.into()),
        },
    }
}

/// `explicit` if given, otherwise the persisted selection (or the first
/// organization if nothing valid was persisted)
async fn organization_id(store: &AppStore, explicit: Option<DbId>) -> anyhow::Result<DbId> {
    require_token(store)?;
    if let Some(id) = explicit {
        return Ok(id);
    }
    finish(store.organizations.fetch(no_cb)).await?;
    store
        .organizations
        .current()
        .map(|organization| organization.id)
        .ok_or_else(|| NoOrganizationSelectedError.into())
}

/// Joins every failing field into one error
fn invalid_input(errors: Vec<FieldError>) -> anyhow::Error {
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow::anyhow!("invalid input: {}", messages.join("; "))
}
