use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;
use url::Url;

use offerboard_core::model::Offer;

use crate::error::{FeedConfigError, OfferFeedError};

/// Endpoint the dashboard was originally pointed at.
const DEFAULT_FEED_URL: &str = "https://your-hostinger-api.com/offers";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where to fetch the offer feed from.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    pub endpoint: Url,
}

impl FeedConfig {
    /// Build a config for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns `FeedConfigError::InvalidUrl` if the endpoint does not
    /// parse as an absolute URL.
    pub fn new(endpoint: &str) -> Result<Self, FeedConfigError> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// Read `OFFERBOARD_FEED_URL`, falling back to the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns `FeedConfigError::InvalidUrl` if the override does not
    /// parse.
    pub fn from_env() -> Result<Self, FeedConfigError> {
        let endpoint =
            env::var("OFFERBOARD_FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.into());
        Self::new(&endpoint)
    }
}

/// A source of offers. The dashboard only ever asks for the full list.
#[async_trait]
pub trait OfferSource: Send + Sync {
    /// Fetch the current offer collection.
    ///
    /// # Errors
    ///
    /// Returns `OfferFeedError` when the feed cannot be reached, answers
    /// with a non-success status, or returns a payload that is not a JSON
    /// array of offers.
    async fn fetch_offers(&self) -> Result<Vec<Offer>, OfferFeedError>;
}

/// HTTP GET against the configured endpoint. No auth header, no paging,
/// no retry.
pub struct HttpOfferSource {
    client: Client,
    config: FeedConfig,
}

impl HttpOfferSource {
    #[must_use]
    pub fn new(config: FeedConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl OfferSource for HttpOfferSource {
    async fn fetch_offers(&self) -> Result<Vec<Offer>, OfferFeedError> {
        let response = self
            .client
            .get(self.config.endpoint.clone())
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "offer feed answered with an error status");
            return Err(OfferFeedError::HttpStatus(response.status()));
        }

        let offers: Vec<Offer> = response.json().await?;
        Ok(offers)
    }
}
