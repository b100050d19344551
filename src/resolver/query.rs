//! Route view query parameters.
//!
//! The route view takes exactly four plain-string parameters. They are
//! encoded as `application/x-www-form-urlencoded`, so spaces become `+`
//! and commas become `%2C`.

use std::fmt;

use url::form_urlencoded;

use super::{Coordinates, ReverseGeocode};

/// Path of the route view.
pub const ROUTE_PATH: &str = "/route";

const ORIGIN_LAT: &str = "originLat";
const ORIGIN_LON: &str = "originLon";
const ORIGIN_NAME: &str = "originName";
const DESTINATION: &str = "destination";

/// Render a coordinate the way JavaScript's `Number#toString` does: plain
/// decimal in `[1e-6, 1e21)`, exponent form outside it, and `0` for `-0`.
pub fn format_coordinate(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }
    let exponent = format!("{:e}", value);
    match exponent.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exponent,
    }
}

/// Origin and destination handed to the route view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteQuery {
    pub origin_lat: String,
    pub origin_lon: String,
    pub origin_name: String,
    pub destination: String,
}

impl RouteQuery {
    /// Build the query from a resolved origin and the typed destination.
    pub fn new(coords: Coordinates, origin: &ReverseGeocode, destination: &str) -> Self {
        Self {
            origin_lat: format_coordinate(coords.latitude),
            origin_lon: format_coordinate(coords.longitude),
            origin_name: origin.display_name.clone(),
            destination: destination.to_string(),
        }
    }

    /// Encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(ORIGIN_LAT, &self.origin_lat)
            .append_pair(ORIGIN_LON, &self.origin_lon)
            .append_pair(ORIGIN_NAME, &self.origin_name)
            .append_pair(DESTINATION, &self.destination)
            .finish()
    }

    /// Full navigation target, e.g. `/route?originLat=...`.
    pub fn href(&self) -> String {
        format!("{}?{}", ROUTE_PATH, self.to_query_string())
    }

    /// Parse an encoded query string. Unknown keys are ignored and missing
    /// keys stay empty; a leading `?` is tolerated.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                ORIGIN_LAT => parsed.origin_lat = value.into_owned(),
                ORIGIN_LON => parsed.origin_lon = value.into_owned(),
                ORIGIN_NAME => parsed.origin_name = value.into_owned(),
                DESTINATION => parsed.destination = value.into_owned(),
                _ => {}
            }
        }
        parsed
    }

    /// True when every parameter the route view needs is present.
    pub fn is_complete(&self) -> bool {
        !self.origin_lat.is_empty()
            && !self.origin_lon.is_empty()
            && !self.destination.is_empty()
    }
}

// The router reads query segments through `From<&str>` and writes them back with `Display`.
impl From<&str> for RouteQuery {
    fn from(query: &str) -> Self {
        Self::parse(query)
    }
}

impl fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}
