use anyhow::Context;
use serde::Deserialize;

fn default_base_url() -> String {
    "https://api.minimaxi.com".to_string()
}

/// Credentials and endpoints for the speech service. Loaded only by the
/// commands that talk to the network, so offline stages never require a key.
#[derive(Debug, Deserialize)]
pub struct Env {
    pub minimax_api_key: String,
    #[serde(default = "default_base_url")]
    pub minimax_base_url: String,
}

pub fn load() -> anyhow::Result<Env> {
    let _ = dotenvy::dotenv();
    envy::from_env().context("MINIMAX_API_KEY not set (environment or .env)")
}
