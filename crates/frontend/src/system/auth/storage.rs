use crate::shared::storage;

const TOKEN_KEY: &str = "token";

/// Save bearer token to localStorage
pub fn save_token(token: &str) {
    storage::set(TOKEN_KEY, token);
}

/// Get bearer token from localStorage
pub fn get_token() -> Option<String> {
    storage::get(TOKEN_KEY)
}

/// Clear the stored bearer token
pub fn clear_token() {
    storage::remove(TOKEN_KEY);
}
