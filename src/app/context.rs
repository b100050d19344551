//! Shared context provided at the app root.
//!
//! - `Signal<ClientSettings>`: server-provided settings, defaults until loaded
//! - [`AuthContext`]: the session signal plus the sign-in collaborator

use std::rc::Rc;

use dioxus::prelude::*;
use serde_json::Value;
use tracing::{debug, warn};

use crate::app::api::{client_settings, fetch_json, ClientSettings, FetchError};
use crate::auth::{session_path, AuthClient, AuthControl, RedirectAuthClient, Session};

/// Session state and sign-in, injected instead of looked up globally.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: Signal<Session>,
    client: Signal<Rc<dyn AuthClient>>,
    provider: Signal<String>,
}

impl AuthContext {
    pub fn new(client: Rc<dyn AuthClient>, provider: impl Into<String>, session: Session) -> Self {
        Self {
            session: Signal::new(session),
            client: Signal::new(client),
            provider: Signal::new(provider.into()),
        }
    }

    /// The control the navigation bar should show right now.
    pub fn control(&self) -> AuthControl {
        AuthControl::for_session(&self.session.read())
    }

    /// Start the provider's sign-in flow. Fire-and-forget.
    pub fn sign_in(&self) {
        let provider = self.provider.read().clone();
        self.client.read().sign_in(&provider);
    }

    fn configure(&mut self, settings: &ClientSettings) {
        self.client
            .set(Rc::new(RedirectAuthClient::new(settings.auth_base_path.clone())));
        self.provider.set(settings.auth_provider.clone());
    }
}

pub fn use_settings() -> Signal<ClientSettings> {
    use_context::<Signal<ClientSettings>>()
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Provide settings and auth context, then load both in the background.
pub fn use_app_providers() {
    let mut settings = use_context_provider(|| Signal::new(ClientSettings::default()));
    let mut auth = use_context_provider(|| {
        let defaults = ClientSettings::default();
        AuthContext::new(
            Rc::new(RedirectAuthClient::new(defaults.auth_base_path)),
            defaults.auth_provider,
            Session::loading(),
        )
    });

    let loaded = use_resource(|| async {
        match client_settings().await {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!(error = %e, "Client settings unavailable, using defaults");
                None
            }
        }
    });

    use_effect(move || {
        if let Some(Some(s)) = loaded.read().as_ref() {
            debug!(?s, "Client settings loaded");
            auth.configure(s);
            settings.set(s.clone());
        }
    });

    // Re-fetch the session whenever the auth base path changes
    let session = use_resource(move || {
        let path = session_path(&settings.read().auth_base_path);
        async move {
            match fetch_json::<Value>(&path).await {
                Ok(payload) => Session::from_payload(&payload),
                // Server render: leave it to the browser
                Err(FetchError::Unavailable) => Session::loading(),
                Err(e) => {
                    warn!(error = %e, path = %path, "Session fetch failed");
                    Session::unauthenticated()
                }
            }
        }
    });

    use_effect(move || {
        if let Some(s) = session.read().as_ref() {
            auth.session.set(s.clone());
        }
    });
}
