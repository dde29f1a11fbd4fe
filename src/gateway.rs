//! Remote listing store access over HTTP/JSON
//!
//! Every call is a single attempt; failures are classified into the crate
//! [`Error`](crate::error::Error) taxonomy and nothing is retried. The gateway
//! never touches local state.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::{ApiConfig, ClientOptions};
use crate::error::{Error, Result};
use crate::fetch::{Fetch, FetchBuilder};
use crate::listing::{LikeRequest, Listing, ListingPayload, NewListing};

/// Operations offered by the remote listing store
#[async_trait]
pub trait ListingGateway: Send + Sync {
    /// `GET /listings`
    async fn fetch_all(&self) -> Result<Vec<Listing>>;

    /// `GET /featured`
    async fn fetch_featured(&self) -> Result<Vec<Listing>>;

    /// `GET /listings/{id}`
    async fn fetch_one(&self, id: &str) -> Result<Listing>;

    /// `POST /listings`; the store assigns the id and starts the like count at 0
    async fn create(&self, payload: &ListingPayload) -> Result<Listing>;

    /// `PUT /listings/{id}`
    async fn update(&self, id: &str, payload: &ListingPayload) -> Result<Listing>;

    /// `DELETE /listings/{id}`
    async fn delete(&self, id: &str) -> Result<()>;

    /// `PATCH /listings/{id}/like`
    async fn like(&self, id: &str, liker_email: &str) -> Result<Listing>;
}

/// Gateway talking to the store's REST API
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: Url,
    http_client: Client,
    options: ClientOptions,
}

impl HttpGateway {
    /// Create a gateway for a validated configuration
    pub fn new(config: ApiConfig, http_client: Client) -> Self {
        Self {
            base_url: config.url,
            http_client,
            options: config.options,
        }
    }

    /// Create a gateway from a raw base URL with default options
    pub fn from_url(base_url: &str) -> Result<Self> {
        let config = ApiConfig::new(base_url, ClientOptions::default())?;
        Ok(Self::new(config, Client::new()))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins a configured `/`-separated path and then `tail` onto the base URL.
    ///
    /// Only the configured path is split; each `tail` entry stays one segment.
    fn endpoint(&self, path: &str, tail: &[&str]) -> Result<String> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::config("API URL cannot be a base"))?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()))
            .extend(tail);
        Ok(url.to_string())
    }

    fn listing_url(&self, id: &str) -> Result<String> {
        if id.is_empty() {
            return Err(Error::validation("listing id must not be empty"));
        }
        self.endpoint(&self.options.listings_path, &[id])
    }

    fn prepare<'a>(&self, builder: FetchBuilder<'a>) -> FetchBuilder<'a> {
        builder
            .header("X-Client-Info", &self.options.client_info)
            .timeout(self.options.request_timeout)
    }
}

#[async_trait]
impl ListingGateway for HttpGateway {
    async fn fetch_all(&self) -> Result<Vec<Listing>> {
        let url = self.endpoint(&self.options.listings_path, &[])?;
        self.prepare(Fetch::get(&self.http_client, &url))
            .execute::<Vec<Listing>>()
            .await
    }

    async fn fetch_featured(&self) -> Result<Vec<Listing>> {
        let url = self.endpoint(&self.options.featured_path, &[])?;
        self.prepare(Fetch::get(&self.http_client, &url))
            .execute::<Vec<Listing>>()
            .await
    }

    async fn fetch_one(&self, id: &str) -> Result<Listing> {
        let url = self.listing_url(id)?;
        self.prepare(Fetch::get(&self.http_client, &url))
            .execute::<Listing>()
            .await
    }

    async fn create(&self, payload: &ListingPayload) -> Result<Listing> {
        payload.validate()?;
        let url = self.endpoint(&self.options.listings_path, &[])?;
        let body = NewListing { payload, like_count: 0 };
        self.prepare(Fetch::post(&self.http_client, &url))
            .json(&body)?
            .execute::<Listing>()
            .await
    }

    async fn update(&self, id: &str, payload: &ListingPayload) -> Result<Listing> {
        payload.validate()?;
        let url = self.listing_url(id)?;
        self.prepare(Fetch::put(&self.http_client, &url))
            .json(payload)?
            .execute::<Listing>()
            .await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.listing_url(id)?;
        self.prepare(Fetch::delete(&self.http_client, &url))
            .execute_empty()
            .await
    }

    async fn like(&self, id: &str, liker_email: &str) -> Result<Listing> {
        let url = format!("{}/like", self.listing_url(id)?);
        self.prepare(Fetch::patch(&self.http_client, &url))
            .json(&LikeRequest { liker_email })?
            .execute::<Listing>()
            .await
    }
}
