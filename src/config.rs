//! Configuration options for the roomshare client

use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "ROOMSHARE_API_URL";

/// Environment variable overriding the request timeout, in seconds
pub const REQUEST_TIMEOUT_ENV: &str = "ROOMSHARE_REQUEST_TIMEOUT_SECS";

/// Configuration options for the roomshare client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The request timeout; `None` leaves the HTTP client's default in place
    pub request_timeout: Option<Duration>,

    /// Value sent in the `X-Client-Info` header
    pub client_info: String,

    /// Collection path for listings
    pub listings_path: String,

    /// Path of the featured listings endpoint
    pub featured_path: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: None,
            client_info: format!("roomshare-rust/{}", env!("CARGO_PKG_VERSION")),
            listings_path: "listings".to_string(),
            featured_path: "featured".to_string(),
        }
    }
}

impl ClientOptions {
    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the client info header value
    pub fn with_client_info(mut self, value: &str) -> Self {
        self.client_info = value.to_string();
        self
    }

    /// Set the listings collection path
    pub fn with_listings_path(mut self, value: &str) -> Self {
        self.listings_path = value.trim_matches('/').to_string();
        self
    }

    /// Set the featured listings path
    pub fn with_featured_path(mut self, value: &str) -> Self {
        self.featured_path = value.trim_matches('/').to_string();
        self
    }
}

/// Validated API location plus client options
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub url: Url,
    pub options: ClientOptions,
}

impl ApiConfig {
    /// Creates a new configuration, validating the URL.
    pub fn new(url_str: &str, options: ClientOptions) -> Result<Self> {
        let url = Url::parse(url_str)?;
        if url.cannot_be_a_base() {
            return Err(Error::config(format!("{} cannot be used as a base URL", url_str)));
        }
        Ok(Self { url, options })
    }

    /// Reads the configuration from the environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let url_str = std::env::var(API_URL_ENV)
            .map_err(|_| Error::config(format!("{} environment variable not found", API_URL_ENV)))?;

        let mut options = ClientOptions::default();
        if let Ok(secs) = std::env::var(REQUEST_TIMEOUT_ENV) {
            let secs: u64 = secs.parse().map_err(|_| {
                Error::config(format!("{} must be a whole number of seconds", REQUEST_TIMEOUT_ENV))
            })?;
            options = options.with_request_timeout(Some(Duration::from_secs(secs)));
        }

        Self::new(&url_str, options)
    }
}
