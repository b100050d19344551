//! Client-side data access: settings from the server and JSON fetches.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::{DEFAULT_AUTH_BASE_PATH, DEFAULT_SIGN_IN_PROVIDER};
use crate::resolver::geocode::DEFAULT_GEOCODER_URL;
use crate::resolver::DEFAULT_MOBILE_BREAKPOINT;

/// Settings the browser needs, projected from the server configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    pub geocoder_url: String,
    pub auth_provider: String,
    pub auth_base_path: String,
    pub mobile_breakpoint: f64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            auth_provider: DEFAULT_SIGN_IN_PROVIDER.to_string(),
            auth_base_path: DEFAULT_AUTH_BASE_PATH.to_string(),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}

#[cfg(feature = "server")]
impl From<&crate::config::Config> for ClientSettings {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            geocoder_url: config.geocoder.base_url.clone(),
            auth_provider: config.auth.provider.clone(),
            auth_base_path: config.auth.base_path.clone(),
            mobile_breakpoint: config.layout.mobile_breakpoint,
        }
    }
}

#[server]
pub async fn client_settings() -> Result<ClientSettings, ServerFnError> {
    Ok(ClientSettings::from(crate::config::current()))
}

/// Error from [`fetch_json`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("fetch failed: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("invalid JSON: {0}")]
    Decode(String),
    #[error("fetch is only available in the browser")]
    Unavailable,
}

/// GET `path` from the page's origin (with cookies) and decode the JSON body.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{RequestCredentials, RequestInit, Response};

    let window = web_sys::window().ok_or(FetchError::Unavailable)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_credentials(RequestCredentials::SameOrigin);

    let response = JsFuture::from(window.fetch_with_str_and_init(path, &init))
        .await
        .map_err(|e| FetchError::Network(format!("{:?}", e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| FetchError::Network("not a Response".to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response
        .text()
        .map_err(|e| FetchError::Decode(format!("{:?}", e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| FetchError::Decode(format!("{:?}", e)))?
        .as_string()
        .unwrap_or_default();

    serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Server-side rendering has no browser session to fetch with.
#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_json<T: DeserializeOwned>(_path: &str) -> Result<T, FetchError> {
    Err(FetchError::Unavailable)
}
