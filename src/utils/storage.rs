use web_sys::{window, Storage};

use crate::utils::constants::STORAGE_KEY_TOKEN;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// The persisted bearer credential, if any.
pub fn load_token() -> Option<String> {
    get_local_storage()?.get_item(STORAGE_KEY_TOKEN).ok()?
}

pub fn save_token(token: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage unavailable")?;
    storage
        .set_item(STORAGE_KEY_TOKEN, token)
        .map_err(|_| "failed to write to localStorage".to_string())
}

/// Best effort.
pub fn remove_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(STORAGE_KEY_TOKEN);
    }
}
