//! Device geolocation.
//!
//! In the browser this wraps `navigator.geolocation.getCurrentPosition` in a
//! promise and awaits it. Outside the browser there is no device position,
//! so [`BrowserGeolocator`] reports [`GeolocationError::Unsupported`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A device position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Why a position could not be produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position unavailable: {0}")]
    Unavailable(String),
    #[error("timed out waiting for a position")]
    Timeout,
    #[error("geolocation is not supported on this platform")]
    Unsupported,
}

impl GeolocationError {
    /// Map a W3C `GeolocationPositionError.code` to an error.
    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        match code {
            1 => Self::PermissionDenied,
            3 => Self::Timeout,
            _ => Self::Unavailable(message.into()),
        }
    }
}

/// Source of the current device position.
#[async_trait(?Send)]
pub trait Geolocator {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Geolocation backed by the browser's `navigator.geolocation`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserGeolocator;

#[async_trait(?Send)]
impl Geolocator for BrowserGeolocator {
    #[cfg(target_arch = "wasm32")]
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        browser::current_position().await
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::Unsupported)
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use js_sys::{Promise, Reflect};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;

    use super::{Coordinates, GeolocationError};

    pub(super) async fn current_position() -> Result<Coordinates, GeolocationError> {
        let geolocation = web_sys::window()
            .ok_or(GeolocationError::Unsupported)?
            .navigator()
            .geolocation()
            .map_err(|_| GeolocationError::Unsupported)?;

        let mut registered = Ok(());
        let promise = Promise::new(&mut |resolve, reject| {
            registered = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject));
        });
        if registered.is_err() {
            return Err(GeolocationError::Unsupported);
        }

        match JsFuture::from(promise).await {
            Ok(position) => read_coordinates(&position),
            Err(err) => Err(read_error(&err)),
        }
    }

    fn number(target: &JsValue, key: &str) -> Option<f64> {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
    }

    fn read_coordinates(position: &JsValue) -> Result<Coordinates, GeolocationError> {
        let coords = Reflect::get(position, &JsValue::from_str("coords"))
            .map_err(|_| GeolocationError::Unavailable("position has no coords".into()))?;
        match (number(&coords, "latitude"), number(&coords, "longitude")) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(GeolocationError::Unavailable(
                "position coords are not numeric".into(),
            )),
        }
    }

    fn read_error(err: &JsValue) -> GeolocationError {
        let code = number(err, "code").unwrap_or(2.0) as u16;
        let message = Reflect::get(err, &JsValue::from_str("message"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        GeolocationError::from_code(code, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_follow_w3c_numbering() {
        assert_eq!(
            GeolocationError::from_code(1, "User denied Geolocation"),
            GeolocationError::PermissionDenied
        );
        assert_eq!(GeolocationError::from_code(3, ""), GeolocationError::Timeout);
        assert_eq!(
            GeolocationError::from_code(2, "no fix"),
            GeolocationError::Unavailable("no fix".to_string())
        );
    }

    #[test]
    fn test_browser_geolocator_is_unsupported_natively() {
        let result = tokio_test::block_on(BrowserGeolocator.current_position());
        assert_eq!(result, Err(GeolocationError::Unsupported));
    }
}
