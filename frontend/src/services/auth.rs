//! Credential token storage. The token is opaque to the frontend: its
//! presence gates the private routes, nothing else is inspected.

use gloo::storage::{LocalStorage, Storage};

const TOKEN_KEY: &str = "villaparfum.token";

pub fn token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_KEY).ok()
}

pub fn store_token(token: &str) {
    if let Err(e) = LocalStorage::set(TOKEN_KEY, token.to_string()) {
        gloo::console::error!("Failed to persist token:", e.to_string());
    }
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}
