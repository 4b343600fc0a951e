//! Backend endpoint resolution.
//!
//! The API server listens on its own port next to whatever host serves the
//! WASM bundle, so URLs are derived from the current window location rather
//! than compiled in.

/// Port the backend listens on, independent of where the bundle is served.
const API_PORT: u16 = 3000;

fn base_from_parts(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Base URL for API requests, e.g. `http://localhost:3000`.
///
/// Returns an empty string outside a browser context.
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
    base_from_parts(&protocol, &hostname)
}

/// Full URL for an API path, e.g. `api_url("/items")`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_keeps_protocol_and_host() {
        assert_eq!(
            base_from_parts("https:", "admin.example.com"),
            "https://admin.example.com:3000"
        );
    }

    #[test]
    fn test_base_targets_the_backend_port() {
        assert_eq!(
            base_from_parts("http:", "localhost"),
            "http://localhost:3000"
        );
    }
}
