// ============================================================================
// STORAGE - localStorage helpers (serde round-trip + raw access)
// ============================================================================

use serde::Serialize;
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("error serializing '{}': {}", key, e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| format!("error writing '{}' to localStorage", key))?;
    Ok(())
}

/// Raw read; deserialization is left to the caller so malformed data can be
/// handled as a policy decision rather than an error.
pub fn load_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn remove(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .remove_item(key)
        .map_err(|_| format!("error removing '{}' from localStorage", key))?;
    Ok(())
}
