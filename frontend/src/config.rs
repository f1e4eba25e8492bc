use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
fn read_global_string(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global_string(_global: &str, _keys: &[&str]) -> Option<String> {
    None
}

fn snapshot_from_globals() -> Option<String> {
    // window.__STOREFRONT_ENV (env.js) wins over window.__STOREFRONT_CONFIG.
    read_global_string("__STOREFRONT_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_string("__STOREFRONT_CONFIG", &["api_base_url", "API_BASE_URL"]))
        .filter(|url| !url.trim().is_empty())
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let resp = reqwest::get(config_json_url())
        .await
        .context("requesting config.json")?;
    if !resp.status().is_success() {
        bail!("config.json returned {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("parsing config.json")
}

#[cfg(target_arch = "wasm32")]
fn config_json_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}/config.json", origin))
        .unwrap_or_else(|| "./config.json".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn config_json_url() -> String {
    "http://localhost/config.json".to_string()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(RuntimeConfig {
            api_base_url: Some(url),
        }) if !url.trim().is_empty() => return cache_base_url(&url),
        Ok(_) => log::debug!("config.json has no api_base_url, using default"),
        Err(err) => log::warn!("runtime config unavailable: {:#}", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL: {}", url);
}
