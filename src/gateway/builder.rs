//! Builder for configuring recommender instances

use std::sync::Arc;
use std::time::Duration;

use super::Recommender;
use crate::availability::{Availability, ProbedAvailability, StaticAvailability};
use crate::providers::remote::{DEFAULT_PREDICT_TIMEOUT, DEFAULT_PROBE_TIMEOUT};
use crate::providers::{PredictionProvider, RemoteModelClient, RuleTableProvider};
use crate::random::{RandomSource, SeededRandom, ThreadRandom};
use crate::types::ServiceStatus;
use crate::{DemeterError, Result};

/// Main entry point for creating recommender instances.
pub struct Demeter;

impl Demeter {
    /// Create a new builder for configuring the recommender.
    pub fn builder() -> RecommenderBuilder {
        RecommenderBuilder::new()
    }
}

/// Builder for configuring recommender instances.
///
/// With no options set, the recommender answers purely from the rule table
/// and reports the remote model as [`ServiceStatus::Fallback`].
pub struct RecommenderBuilder {
    remote_url: Option<String>,
    probe_timeout: Duration,
    predict_timeout: Duration,
    shadow: bool,
    seed: Option<u64>,
    random: Option<Box<dyn RandomSource>>,
    availability: Option<Arc<dyn Availability>>,
    shadow_provider: Option<Arc<dyn PredictionProvider>>,
}

impl RecommenderBuilder {
    pub fn new() -> Self {
        Self {
            remote_url: None,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            predict_timeout: DEFAULT_PREDICT_TIMEOUT,
            shadow: true,
            seed: None,
            random: None,
            availability: None,
            shadow_provider: None,
        }
    }

    /// Configure the remote prediction service.
    pub fn remote(mut self, base_url: impl Into<String>) -> Self {
        self.remote_url = Some(base_url.into());
        self
    }

    /// Set the remote health check timeout (default: 3 seconds).
    pub fn probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Set the remote predict timeout (default: 5 seconds).
    pub fn predict_timeout(mut self, timeout: Duration) -> Self {
        self.predict_timeout = timeout;
        self
    }

    /// Whether to send shadow predict requests to the remote service
    /// (default: true). The rule table answers either way.
    pub fn shadow(mut self, enabled: bool) -> Self {
        self.shadow = enabled;
        self
    }

    /// Use a custom shadow provider instead of the remote service client.
    pub fn shadow_provider(mut self, provider: Arc<dyn PredictionProvider>) -> Self {
        self.shadow_provider = Some(provider);
        self
    }

    /// Pin the default branch to a seeded generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draw the default branch from a custom source. Overrides [`seed`](Self::seed).
    pub fn random_source(mut self, random: Box<dyn RandomSource>) -> Self {
        self.random = Some(random);
        self
    }

    /// Inject the availability provider consulted before each shadow request.
    pub fn availability(mut self, availability: Arc<dyn Availability>) -> Self {
        self.availability = Some(availability);
        self
    }

    /// Build the recommender.
    ///
    /// Without an injected availability provider the remote model is
    /// treated as unreachable, so no shadow traffic is sent. Use
    /// [`build_probed`](Self::build_probed) to probe the configured remote.
    pub fn build(mut self) -> Result<Recommender> {
        let shadow = self.take_shadow()?;
        let availability = self
            .availability
            .take()
            .unwrap_or_else(|| Arc::new(StaticAvailability(ServiceStatus::Fallback)));
        Ok(Recommender::new(self.local_provider(), shadow, availability))
    }

    /// Build the recommender and start probing the configured remote in
    /// the background.
    ///
    /// Returns [`DemeterError::NotConfigured`] if no remote URL was set.
    /// Must be called from within a tokio runtime.
    pub fn build_probed(mut self) -> Result<(Recommender, ProbedAvailability)> {
        let client = self.remote_client()?.ok_or(DemeterError::NotConfigured)?;
        let probed = ProbedAvailability::spawn(client);
        self.availability = Some(Arc::new(probed.clone()));
        Ok((self.build()?, probed))
    }

    fn remote_client(&self) -> Result<Option<RemoteModelClient>> {
        self.remote_url
            .as_ref()
            .map(|url| {
                RemoteModelClient::new(url.clone()).map(|client| {
                    client
                        .probe_timeout(self.probe_timeout)
                        .predict_timeout(self.predict_timeout)
                })
            })
            .transpose()
    }

    fn take_shadow(&mut self) -> Result<Option<Arc<dyn PredictionProvider>>> {
        if !self.shadow {
            return Ok(None);
        }
        if let Some(provider) = self.shadow_provider.take() {
            return Ok(Some(provider));
        }
        Ok(self
            .remote_client()?
            .map(|client| Arc::new(client) as Arc<dyn PredictionProvider>))
    }

    fn local_provider(&mut self) -> RuleTableProvider {
        let random: Box<dyn RandomSource> = match (self.random.take(), self.seed) {
            (Some(random), _) => random,
            (None, Some(seed)) => Box::new(SeededRandom::new(seed)),
            (None, None) => Box::new(ThreadRandom),
        };
        RuleTableProvider::with_random(random)
    }
}

impl Default for RecommenderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
