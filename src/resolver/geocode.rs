//! Reverse geocoding over HTTP (Nominatim-compatible).
//!
//! Request: `GET <base>/reverse?format=json&lat=<lat>&lon=<lon>`.
//! The response must be JSON with a string `display_name`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::query::format_coordinate;
use super::Coordinates;

/// Public OpenStreetMap Nominatim instance.
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Sent by native builds; Nominatim rejects anonymous clients.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Human-readable address for a coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseGeocode {
    pub display_name: String,
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("reverse geocode request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("reverse geocode service returned HTTP {0}")]
    Status(u16),
    #[error("malformed reverse geocode response: {0}")]
    Malformed(String),
}

/// Turns coordinates into an address.
#[async_trait(?Send)]
pub trait ReverseGeocoder {
    async fn reverse(&self, coords: Coordinates) -> Result<ReverseGeocode, GeocodeError>;
}

/// Extract the address from a reverse geocode response body.
pub fn parse_reverse_response(body: &Value) -> Result<ReverseGeocode, GeocodeError> {
    if let Some(error) = body.get("error").and_then(|v| v.as_str()) {
        return Err(GeocodeError::Malformed(error.to_string()));
    }
    body.get("display_name")
        .and_then(|v| v.as_str())
        .map(|name| ReverseGeocode {
            display_name: name.to_string(),
        })
        .ok_or_else(|| GeocodeError::Malformed("missing display_name".to_string()))
}

/// HTTP client for a Nominatim-compatible `/reverse` endpoint.
#[derive(Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn reverse_url(&self, coords: Coordinates) -> String {
        format!(
            "{}/reverse?format=json&lat={}&lon={}",
            self.base_url,
            format_coordinate(coords.latitude),
            format_coordinate(coords.longitude)
        )
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new(DEFAULT_GEOCODER_URL)
    }
}

#[async_trait(?Send)]
impl ReverseGeocoder for NominatimClient {
    async fn reverse(&self, coords: Coordinates) -> Result<ReverseGeocode, GeocodeError> {
        let url = self.reverse_url(coords);
        debug!(lat = coords.latitude, lon = coords.longitude, "Reverse geocode request");

        // The browser owns the User-Agent header
        #[allow(unused_mut)]
        let mut request = self.client.get(&url);
        #[cfg(not(target_arch = "wasm32"))]
        {
            request = request.header(reqwest::header::USER_AGENT, USER_AGENT);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(GeocodeError::Status(response.status().as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GeocodeError::Malformed(e.to_string()))?;
        let result = parse_reverse_response(&body)?;

        debug!(display_name = %result.display_name, "Reverse geocode response");
        Ok(result)
    }
}
