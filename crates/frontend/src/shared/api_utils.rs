//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and list query
//! strings.

use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8080 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:8080" or "https://example.com:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Standard paging parameters accepted by every list endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

impl ListQuery {
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            search: None,
            page,
            page_size,
        }
    }

    pub fn with_search(search: &str, page: u32, page_size: u32) -> Self {
        let search = search.trim();
        Self {
            search: (!search.is_empty()).then(|| search.to_string()),
            page,
            page_size,
        }
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_shape() {
        assert_eq!(ListQuery::page(2, 50).to_query_string(), "page=2&pageSize=50");
        assert_eq!(
            ListQuery::with_search("west", 1, 20).to_query_string(),
            "search=west&page=1&pageSize=20"
        );
        assert_eq!(
            ListQuery::with_search("   ", 1, 20).to_query_string(),
            "page=1&pageSize=20"
        );
    }
}
