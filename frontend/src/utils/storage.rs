#[cfg(target_arch = "wasm32")]
use crate::error::ThemeError;
use log::warn;

#[cfg(target_arch = "wasm32")]
use web_sys::{Storage, Window};

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, ThemeError> {
    web_sys::window().ok_or(ThemeError::NoWindow)
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<Storage, ThemeError> {
    window()?
        .local_storage()
        .map_err(|_| ThemeError::StorageUnavailable)?
        .ok_or(ThemeError::StorageUnavailable)
}

/// Encodes a preference the way it is kept in storage (a JSON boolean).
pub fn encode_bool(value: bool) -> String {
    value.to_string()
}

/// Decodes a stored preference. A missing key and anything that is not a
/// JSON boolean both read as `None`.
pub fn decode_bool(key: &str, raw: Option<&str>) -> Option<bool> {
    let raw = raw?;
    match serde_json::from_str::<bool>(raw.trim()) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("ignoring unreadable value {raw:?} stored under {key:?}: {err}");
            None
        }
    }
}
