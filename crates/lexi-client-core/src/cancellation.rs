use anyhow::Context as _;
use futures::channel::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Tracks the request currently allowed to update a state container.
///
/// Starting a new request cancels the previous one so that only the latest
/// response is applied
#[derive(Debug, Default)]
pub struct RequestSlot {
    current: Option<CancellationToken>,
}

impl RequestSlot {
    /// Cancels whatever was in flight and returns the token of the new request
    #[instrument]
    pub fn begin(&mut self) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.current.replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    #[instrument]
    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }
}

/// Waits for the response unless the request gets superseded first.
///
/// Returns `None` if `token` was cancelled. A sender dropped without
/// responding is reported as an error
pub(crate) async fn await_response<T>(
    token: &CancellationToken,
    rx: oneshot::Receiver<anyhow::Result<T>>,
) -> Option<anyhow::Result<T>> {
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!("request superseded, discarding its response");
            None
        }
        response = rx => Some(response.context("request dropped before completing").and_then(|x| x)),
    }
}
