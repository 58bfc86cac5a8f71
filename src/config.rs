//! Engine configuration loaded from `config/analysis.json`.
//!
//! Reading or parsing failures fall back to defaults; environment
//! variables override the file so deployments can point at a real
//! backend without editing it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base URL of a real analysis backend. Absent means simulate.
    #[serde(default)]
    pub backend_url: Option<String>,
    /// How long the reachability probe may take before falling back.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// Artificial processing delay of the simulator (the dashboard shows
    /// a progress animation during this window).
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
    /// Profile tool endpoint for favorite-color resolution.
    #[serde(default)]
    pub profile_endpoint: Option<String>,
}

fn default_probe_timeout_ms() -> u64 {
    1_500
}

fn default_simulated_delay_ms() -> u64 {
    2_000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            probe_timeout_ms: default_probe_timeout_ms(),
            simulated_delay_ms: default_simulated_delay_ms(),
            profile_endpoint: None,
        }
    }
}

impl EngineConfig {
    /// Load from the default path, then apply env overrides.
    pub fn load() -> Self {
        Self::from_path("config/analysis.json")
    }

    /// Load from a specific path. If reading/parsing fails, returns
    /// `EngineConfig::default()` (plus env overrides).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let cfg = match fs::read_to_string(path) {
            Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        cfg.apply_env()
    }

    fn apply_env(mut self) -> Self {
        if let Ok(url) = std::env::var("ANALYSIS_BACKEND_URL") {
            self.backend_url = non_empty(url);
        }
        if let Ok(endpoint) = std::env::var("PROFILE_ENDPOINT") {
            self.profile_endpoint = non_empty(endpoint);
        }
        self
    }
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = EngineConfig::from_path("config/definitely-not-here.json");
        assert_eq!(cfg.probe_timeout_ms, 1_500);
        assert_eq!(cfg.simulated_delay_ms, 2_000);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: EngineConfig =
            serde_json::from_str(r#"{"backend_url": "http://localhost:5000"}"#).unwrap();
        assert_eq!(cfg.backend_url.as_deref(), Some("http://localhost:5000"));
        assert_eq!(cfg.probe_timeout_ms, 1_500);
    }
}
