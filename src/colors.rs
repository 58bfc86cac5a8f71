//! Favorite-color resolution for the player profile panel.
//!
//! The dashboard tints itself with the player's favorite color. Known
//! color names resolve through a fixed table; anything else is passed
//! through verbatim and treated as a CSS color by the presenter. A
//! missing or failed profile falls back to an anonymous player in white.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

pub const FALLBACK_NAME: &str = "Current Player";
pub const FALLBACK_COLOR: &str = "white";

/// The 16 CSS Level 1 color names.
static COLOR_TABLE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("aqua", "#00ffff"),
        ("black", "#000000"),
        ("blue", "#0000ff"),
        ("fuchsia", "#ff00ff"),
        ("gray", "#808080"),
        ("green", "#008000"),
        ("lime", "#00ff00"),
        ("maroon", "#800000"),
        ("navy", "#000080"),
        ("olive", "#808000"),
        ("purple", "#800080"),
        ("red", "#ff0000"),
        ("silver", "#c0c0c0"),
        ("teal", "#008080"),
        ("white", "#ffffff"),
        ("yellow", "#ffff00"),
    ])
});

/// Resolve a color name to hex; unknown names pass through verbatim.
pub fn color_hex(name: &str) -> String {
    let trimmed = name.trim();
    let key = trimmed.to_ascii_lowercase();
    match COLOR_TABLE.get(key.as_str()) {
        Some(hex) => (*hex).to_string(),
        None => trimmed.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub favorite_color: String,
}

impl Profile {
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_NAME.to_string(),
            favorite_color: FALLBACK_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    #[serde(default)]
    profile: Option<Profile>,
}

/// Fetch the stored profile from the tool endpoint. Any failure (network,
/// non-2xx, malformed body, missing profile) yields the fallback.
pub async fn fetch_profile(http: &reqwest::Client, endpoint: &str) -> Profile {
    let resp = match http.post(endpoint).json(&serde_json::json!({})).send().await {
        Ok(r) => r,
        Err(err) => {
            debug!(error = %err, "profile endpoint unreachable");
            return Profile::fallback();
        }
    };
    if !resp.status().is_success() {
        return Profile::fallback();
    }
    match resp.json::<ProfileEnvelope>().await {
        Ok(ProfileEnvelope { profile: Some(p) }) if !p.name.trim().is_empty() => p,
        _ => Profile::fallback(),
    }
}
