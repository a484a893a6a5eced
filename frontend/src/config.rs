use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Storage slot holding the user's explicit choice.
pub const DARK_MODE_KEY: &str = "dark-mode";
/// Class toggled on `<html>` while dark mode is active.
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const PREFERS_COLOR_SCHEME: &str = "prefers-color-scheme: dark";

const WINDOW_CONFIG_KEY: &str = "__THEME_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub dark_class: String,
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DARK_MODE_KEY.to_string(),
            dark_class: DARK_MODE_CLASS.to_string(),
            media_query: PREFERS_COLOR_SCHEME.to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let cfg: ThemeConfig =
            serde_json::from_str(raw).context("theme config is not valid JSON")?;
        cfg.validated()
    }

    fn validated(self) -> anyhow::Result<Self> {
        if self.storage_key.trim().is_empty() {
            anyhow::bail!("theme config: storage_key must not be empty");
        }
        if self.dark_class.trim().is_empty() || self.dark_class.contains(char::is_whitespace) {
            anyhow::bail!("theme config: dark_class must be a single class token");
        }
        if self.media_query.trim().is_empty() {
            anyhow::bail!("theme config: media_query must not be empty");
        }
        Ok(self)
    }
}

static THEME_CONFIG: OnceLock<ThemeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn get_from_window_config() -> Option<String> {
    // Expect optional global object: window.__THEME_CONFIG = { storage_key: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &WINDOW_CONFIG_KEY.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok()?.as_string()
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_window_config() -> Option<String> {
    None
}

fn load() -> ThemeConfig {
    let Some(raw) = get_from_window_config() else {
        return ThemeConfig::default();
    };
    match ThemeConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("ignoring window.{WINDOW_CONFIG_KEY}: {err:#}");
            ThemeConfig::default()
        }
    }
}

/// Resolves the runtime config once; later calls are no-ops.
pub fn init() -> &'static ThemeConfig {
    THEME_CONFIG.get_or_init(load)
}

pub fn current() -> ThemeConfig {
    init().clone()
}
