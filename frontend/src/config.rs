use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Option<Tz>> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    // Optional global objects injected by env.js / index.html, e.g.
    // window.__LEAVE_TRACKER_ENV = { API_BASE_URL: "...", TIME_ZONE: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let lookup = |upper: &str, lower: &str| {
        js_sys::Reflect::get(&obj, &upper.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| js_sys::Reflect::get(&obj, &lower.into()).ok())
            .and_then(|v| v.as_string())
    };
    Some(RuntimeConfig {
        api_base_url: lookup("API_BASE_URL", "api_base_url"),
        time_zone: lookup("TIME_ZONE", "time_zone"),
    })
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    let env = read_global("__LEAVE_TRACKER_ENV").unwrap_or_default();
    let cfg = read_global("__LEAVE_TRACKER_CONFIG").unwrap_or_default();
    let merged = merge(env, cfg);
    if merged == RuntimeConfig::default() {
        None
    } else {
        Some(merged)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Earlier sources win field by field.
fn merge(primary: RuntimeConfig, fallback: RuntimeConfig) -> RuntimeConfig {
    RuntimeConfig {
        api_base_url: primary.api_base_url.or(fallback.api_base_url),
        time_zone: primary.time_zone.or(fallback.time_zone),
    }
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn parse_time_zone(raw: Option<&str>) -> Option<Tz> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(err) => {
            log::warn!("ignoring invalid time zone {:?}: {}", raw, err);
            None
        }
    }
}

fn cache(cfg: &RuntimeConfig) -> String {
    let base = cfg
        .api_base_url
        .as_deref()
        .map(normalize_base_url)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let _ = API_BASE_URL.set(base);
    let _ = TIME_ZONE.set(parse_time_zone(cfg.time_zone.as_deref()));
    API_BASE_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let globals = snapshot_from_globals().unwrap_or_default();
    if globals.api_base_url.is_some() {
        return cache(&globals);
    }
    let fetched = fetch_runtime_config().await.unwrap_or_default();
    cache(&merge(globals, fetched))
}

/// Time zone pinned by runtime config, if any. `None` means the browser's
/// local date is used.
pub fn configured_time_zone() -> Option<Tz> {
    TIME_ZONE.get().copied().flatten()
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!(
        "runtime config initialized (api_base_url={}, time_zone={:?})",
        base,
        configured_time_zone()
    );
}
