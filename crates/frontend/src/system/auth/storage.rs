use web_sys::window;

const SESSION_ROLE_KEY: &str = "session_role";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the raw role code handed over by the identity provider
pub fn save_role(code: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(SESSION_ROLE_KEY, code);
    }
}

/// Raw role code of the stored session, not validated
pub fn get_role() -> Option<String> {
    get_local_storage()?.get_item(SESSION_ROLE_KEY).ok()?
}

pub fn clear_role() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_ROLE_KEY);
    }
}
