//! Endpoint configuration for the maintenance service.
//!
//! The base URL and default headers are composed once (see `App`) and
//! provided via context; field definitions and API modules hold only
//! relative paths.

/// Base URL plus default headers for every request to the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
        }
    }

    /// Derive the service root from the current window location. The
    /// treasury maintenance service listens on port 8085.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::new("");
        };
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        Self::new(format!(
            "{}//{}:8085/v1/services/treasury/area-account-maintenance",
            protocol, hostname
        ))
    }

    /// Full URL for a path relative to the service root.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let config = ApiConfig::new("http://localhost:8085/v1/svc/");
        assert_eq!(
            config.url("/getAllCompany"),
            "http://localhost:8085/v1/svc/getAllCompany"
        );
    }
}
