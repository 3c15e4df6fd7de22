//! Browser `localStorage` access for visitor preferences.
//!
//! Only the web build has somewhere to persist to; elsewhere reads return `None`
//! and writes are dropped.

pub(crate) const THEME_KEY: &str = "formcraft.theme";
pub(crate) const LOCALE_KEY: &str = "formcraft.locale";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn load(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn save(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to persist {} to localStorage", key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn load(_key: &str) -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn save(_key: &str, _value: &str) {}
