//! Remote model availability as an injected dependency.
//!
//! The recommender never consults global state to decide whether the remote
//! model is reachable. It asks the [`Availability`] it was built with:
//!
//! - [`StaticAvailability`]: a fixed answer, for tests and offline use
//! - [`ProbedAvailability`]: runs one health probe in the background and
//!   publishes the outcome through a watch channel
//!
//! Neither ever blocks a recommendation; while a probe is in flight the
//! status reads [`ServiceStatus::Checking`].

use tokio::sync::watch;
use tracing::debug;

use crate::providers::RemoteModelClient;
use crate::types::ServiceStatus;

/// Source of the remote model's current status.
pub trait Availability: Send + Sync {
    fn status(&self) -> ServiceStatus;
}

/// Availability with a fixed answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAvailability(pub ServiceStatus);

impl Availability for StaticAvailability {
    fn status(&self) -> ServiceStatus {
        self.0
    }
}

/// Availability fed by a background health probe.
#[derive(Debug, Clone)]
pub struct ProbedAvailability {
    rx: watch::Receiver<ServiceStatus>,
}

impl ProbedAvailability {
    /// Start probing `client` on the current tokio runtime.
    ///
    /// Returns immediately with status [`ServiceStatus::Checking`]; the
    /// status flips to `Connected` or `Fallback` once the probe finishes.
    /// Must be called from within a tokio runtime.
    pub fn spawn(client: RemoteModelClient) -> Self {
        let (tx, rx) = watch::channel(ServiceStatus::Checking);
        tokio::spawn(async move {
            let status = client.probe().await;
            debug!(%status, "availability probe finished");
            // Every receiver may already be gone; nobody is left to tell.
            let _ = tx.send(status);
        });
        Self { rx }
    }

    /// Wait for the probe to finish and return its outcome.
    ///
    /// If the probe task died without reporting, the remote model is
    /// treated as unavailable.
    pub async fn ready(&self) -> ServiceStatus {
        let mut rx = self.rx.clone();
        let status = match rx.wait_for(|status| *status != ServiceStatus::Checking).await {
            Ok(status) => *status,
            Err(_) => ServiceStatus::Fallback,
        };
        status
    }
}

impl Availability for ProbedAvailability {
    fn status(&self) -> ServiceStatus {
        *self.rx.borrow()
    }
}
