//! Roomshare Rust Client Library
//!
//! A Rust client for the roommate listing marketplace API: browse, create,
//! edit and delete listings, and like them once per session.

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod gateway;
pub mod like_gate;
pub mod listing;
pub mod session;

use reqwest::Client;

use crate::cache::ListingCache;
use crate::config::{ApiConfig, ClientOptions};
use crate::error::Result;
use crate::gateway::HttpGateway;

/// The main entry point for the roomshare client
pub struct Roomshare {
    /// Validated API location and options
    pub config: ApiConfig,
    /// HTTP client shared by every gateway handed out
    pub http_client: Client,
}

impl Roomshare {
    /// Create a new client
    ///
    /// # Arguments
    ///
    /// * `api_url` - Base URL of the listings API
    ///
    /// # Example
    ///
    /// ```
    /// use roomshare::Roomshare;
    ///
    /// let roomshare = Roomshare::new("http://localhost:5000").unwrap();
    /// ```
    pub fn new(api_url: &str) -> Result<Self> {
        Self::new_with_options(api_url, ClientOptions::default())
    }

    /// Create a new client with custom options
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use roomshare::{Roomshare, config::ClientOptions};
    ///
    /// let options = ClientOptions::default().with_request_timeout(Some(Duration::from_secs(5)));
    /// let roomshare = Roomshare::new_with_options("http://localhost:5000", options).unwrap();
    /// ```
    pub fn new_with_options(api_url: &str, options: ClientOptions) -> Result<Self> {
        let config = ApiConfig::new(api_url, options)?;
        Ok(Self::from_config(config))
    }

    /// Create a client from configuration read from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(ApiConfig::from_env()?))
    }

    pub fn from_config(config: ApiConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    /// A gateway to the remote listing store
    pub fn gateway(&self) -> HttpGateway {
        HttpGateway::new(self.config.clone(), self.http_client.clone())
    }

    /// A fresh, empty cache for a new view and session
    ///
    /// # Example
    ///
    /// ```no_run
    /// use roomshare::Roomshare;
    ///
    /// # async fn run() -> roomshare::error::Result<()> {
    /// let roomshare = Roomshare::new("http://localhost:5000")?;
    /// let mut listings = roomshare.listings();
    /// listings.load().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn listings(&self) -> ListingCache<HttpGateway> {
        ListingCache::new(self.gateway())
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::Roomshare;
    pub use crate::cache::ListingCache;
    pub use crate::config::ClientOptions;
    pub use crate::error::Error;
    pub use crate::filter::select_owned;
    pub use crate::gateway::{HttpGateway, ListingGateway};
    pub use crate::like_gate::{LikeGate, LikeState};
    pub use crate::listing::{Availability, Lifestyle, Listing, ListingPayload, RoomType};
    pub use crate::session::User;
}
