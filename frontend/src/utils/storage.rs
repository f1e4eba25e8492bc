#[cfg(target_arch = "wasm32")]
mod browser {
    use web_sys::{Storage, Window};

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn local_storage() -> Result<Storage, String> {
        window()?
            .local_storage()
            .map_err(|_| "No localStorage".to_string())?
            .ok_or_else(|| "No localStorage".to_string())
    }

    pub fn get_item(key: &str) -> Result<Option<String>, String> {
        local_storage()?
            .get_item(key)
            .map_err(|_| format!("Failed to read '{}'", key))
    }

    pub fn remove_item(key: &str) -> Result<(), String> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| format!("Failed to remove '{}'", key))
    }
}

// Host builds (SSR tests) have no browser storage.
#[cfg(not(target_arch = "wasm32"))]
mod browser {
    pub fn get_item(_key: &str) -> Result<Option<String>, String> {
        Err("No localStorage".to_string())
    }

    pub fn remove_item(_key: &str) -> Result<(), String> {
        Err("No localStorage".to_string())
    }
}

pub use browser::{get_item, remove_item};
