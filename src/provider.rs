//! Analysis provider seam: remote backend + simulated fallback.
//!
//! Callers talk to one `AnalysisClient`; whether the result came from a
//! real inference backend or the synthesizer is invisible to them. The
//! remote path is selected by a reachability probe at call time: any
//! rejection or non-ok probe response means "backend unavailable" and the
//! simulator answers instead. Backend *errors* after a successful probe
//! are surfaced, not recovered.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::analysis::AnalysisResult;
use crate::config::EngineConfig;
use crate::engine::synthesize;
use crate::intake::FileDescriptor;

// ------------------------------------------------------------
// Public surface
// ------------------------------------------------------------

/// Trait object used by the API handlers and tests.
pub trait AnalysisClient: Send + Sync {
    /// Analyze an upload batch and return the complete result.
    fn analyze<'a>(
        &'a self,
        files: &'a [FileDescriptor],
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResult, ProviderError>> + Send + 'a>>;
    /// Provider name for diagnostics/metrics labels.
    fn provider_name(&self) -> &'static str;
}

/// Convenient alias used by callers.
pub type DynAnalysisClient = Arc<dyn AnalysisClient>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The backend answered but the analysis failed: non-2xx status,
    /// malformed body, or an explicit `success: false` payload.
    Backend {
        status: Option<u16>,
        message: String,
    },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Backend {
                status: Some(code),
                message,
            } => write!(f, "analysis backend error ({code}): {message}"),
            ProviderError::Backend {
                status: None,
                message,
            } => write!(f, "analysis backend error: {message}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Factory: build a client according to config.
///
/// * No backend URL ⇒ simulator only.
/// * Backend URL present ⇒ remote with probe-gated simulator fallback.
pub fn build_client_from_config(config: &EngineConfig) -> DynAnalysisClient {
    let delay = Duration::from_millis(config.simulated_delay_ms);
    match config.backend_url.as_deref() {
        Some(url) if !url.trim().is_empty() => Arc::new(FallbackClient::new(
            url,
            delay,
            Duration::from_millis(config.probe_timeout_ms),
        )),
        _ => Arc::new(SimulatedClient::new(delay)),
    }
}

// ------------------------------------------------------------
// Simulated provider
// ------------------------------------------------------------

/// Synthesizes results locally. The artificial delay mimics backend
/// processing so the dashboard's progress animation has time to play.
pub struct SimulatedClient {
    delay: Duration,
}

impl SimulatedClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No artificial latency; used by tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Run one synthesis for the given upload count.
    pub async fn run(&self, file_count: u32) -> AnalysisResult {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        synthesize(file_count)
    }
}

impl AnalysisClient for SimulatedClient {
    fn analyze<'a>(
        &'a self,
        files: &'a [FileDescriptor],
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResult, ProviderError>> + Send + 'a>> {
        Box::pin(async move { Ok(self.run(files.len() as u32).await) })
    }
    fn provider_name(&self) -> &'static str {
        "simulated"
    }
}

// ------------------------------------------------------------
// Remote provider
// ------------------------------------------------------------

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    files: &'a [FileDescriptor],
}

/// Talks to a real inference backend over HTTP.
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent("voice-bluff-analyzer/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client");
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn analyze_impl(&self, files: &[FileDescriptor]) -> Result<AnalysisResult, ProviderError> {
        let url = format!("{}/analyze_audio", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(&AnalyzeRequest { files })
            .send()
            .await
            .map_err(|e| ProviderError::Backend {
                status: None,
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Backend {
                status: Some(status.as_u16()),
                message: format!("backend returned {status}"),
            });
        }

        let body: serde_json::Value = resp.json().await.map_err(|e| ProviderError::Backend {
            status: Some(status.as_u16()),
            message: format!("malformed analysis body: {e}"),
        })?;

        // `success: false` responses carry an `error` string and must
        // bypass normal updates.
        if body.get("success").and_then(|v| v.as_bool()) == Some(false) {
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("analysis failed")
                .to_string();
            return Err(ProviderError::Backend {
                status: Some(status.as_u16()),
                message,
            });
        }

        serde_json::from_value(body).map_err(|e| ProviderError::Backend {
            status: Some(status.as_u16()),
            message: format!("malformed analysis body: {e}"),
        })
    }
}

impl AnalysisClient for RemoteClient {
    fn analyze<'a>(
        &'a self,
        files: &'a [FileDescriptor],
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResult, ProviderError>> + Send + 'a>> {
        Box::pin(self.analyze_impl(files))
    }
    fn provider_name(&self) -> &'static str {
        "remote"
    }
}

// ------------------------------------------------------------
// Reachability probe + fallback mux
// ------------------------------------------------------------

/// Check whether the backend answers its health endpoint. Any transport
/// error or non-ok status counts as unreachable.
pub async fn probe(http: &reqwest::Client, base_url: &str, timeout: Duration) -> bool {
    let url = format!("{}/health", base_url.trim_end_matches('/'));
    match http.get(&url).timeout(timeout).send().await {
        Ok(resp) => resp.status().is_success(),
        Err(_) => false,
    }
}

/// Remote-first client: probes before each call and hands unreachable
/// backends to the simulator. Backend failures after a successful probe
/// propagate to the caller.
pub struct FallbackClient {
    remote: RemoteClient,
    simulated: SimulatedClient,
    probe_timeout: Duration,
}

impl FallbackClient {
    pub fn new(base_url: impl Into<String>, simulated_delay: Duration, probe_timeout: Duration) -> Self {
        Self {
            remote: RemoteClient::new(base_url),
            simulated: SimulatedClient::new(simulated_delay),
            probe_timeout,
        }
    }

    async fn analyze_impl(&self, files: &[FileDescriptor]) -> Result<AnalysisResult, ProviderError> {
        if probe(&self.remote.http, &self.remote.base_url, self.probe_timeout).await {
            match self.remote.analyze_impl(files).await {
                Ok(result) => Ok(result),
                Err(err) => {
                    warn!(error = %err, "backend analysis failed");
                    Err(err)
                }
            }
        } else {
            info!(backend = %self.remote.base_url, "analysis backend unreachable, using simulator");
            Ok(self.simulated.run(files.len() as u32).await)
        }
    }
}

impl AnalysisClient for FallbackClient {
    fn analyze<'a>(
        &'a self,
        files: &'a [FileDescriptor],
    ) -> Pin<Box<dyn Future<Output = Result<AnalysisResult, ProviderError>> + Send + 'a>> {
        Box::pin(self.analyze_impl(files))
    }
    fn provider_name(&self) -> &'static str {
        "remote"
    }
}
