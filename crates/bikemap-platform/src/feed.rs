//! Remote bike-station availability feed
//!
//! One GET to a fixed endpoint returning the whole station list as a JSON
//! array. No pagination, no retry, no backoff.

use std::time::Duration;

use bikemap_core::prelude::*;
use bikemap_core::BikeStation;
use url::Url;

/// New Taipei City YouBike availability feed
pub const UBIKE_URL: &str =
    "https://data.ntpc.gov.tw/api/datasets/71CD1490-A2DF-4198-BEF1-318479775E8A/json/preview";

/// Default HTTP timeout for the feed request
pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of the live bike-station collection
#[trait_variant::make(StationFeed: Send)]
pub trait LocalStationFeed {
    /// Endpoint description for logs and the status bar
    fn endpoint(&self) -> &str;

    /// Fetch the complete station list
    async fn fetch_stations(&self) -> Result<Vec<BikeStation>>;
}

/// Feed client over HTTP using a reusable `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpStationFeed {
    http: reqwest::Client,
    url: Url,
}

impl HttpStationFeed {
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::feed(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, url })
    }

    /// Client for the default NTPC endpoint
    pub fn ntpc() -> Result<Self> {
        let url = Url::parse(UBIKE_URL).map_err(|e| Error::config(e.to_string()))?;
        Self::new(url, DEFAULT_FEED_TIMEOUT)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl StationFeed for HttpStationFeed {
    fn endpoint(&self) -> &str {
        self.url.as_str()
    }

    async fn fetch_stations(&self) -> Result<Vec<BikeStation>> {
        debug!("GET {}", self.url);

        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| Error::feed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Station feed responded with {}", status);
            return Err(Error::FeedStatus {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::feed(e.to_string()))?;

        let stations: Vec<BikeStation> =
            serde_json::from_slice(&bytes).map_err(|e| Error::feed_payload(e.to_string()))?;

        info!(
            stations = stations.len(),
            bytes = bytes.len(),
            "Station feed fetched"
        );

        Ok(stations)
    }
}
