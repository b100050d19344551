//! Authentication session as seen by the UI.
//!
//! The session is owned by an external auth provider; this module only reads
//! it and derives which control the navigation bar shows. Signing in is a
//! fire-and-forget redirect to the provider.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

/// Provider used by the sign-in buttons.
pub const DEFAULT_SIGN_IN_PROVIDER: &str = "google";

/// Mount point of the auth provider's HTTP routes.
pub const DEFAULT_AUTH_BASE_PATH: &str = "/api/auth";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Authenticated,
    Unauthenticated,
    #[default]
    Loading,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub status: SessionStatus,
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn unauthenticated() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            user: None,
        }
    }

    pub fn authenticated(user: SessionUser) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            user: Some(user),
        }
    }

    /// Interpret the body of `<auth base>/session`.
    ///
    /// A `user` object means signed in; `{}` or `null` means signed out.
    pub fn from_payload(payload: &Value) -> Self {
        match payload.get("user") {
            Some(user) if user.is_object() => {
                match serde_json::from_value::<SessionUser>(user.clone()) {
                    Ok(user) => Self::authenticated(user),
                    Err(e) => {
                        warn!(error = %e, "Unreadable session user, treating as signed out");
                        Self::unauthenticated()
                    }
                }
            }
            _ => Self::unauthenticated(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}

/// The single auth control shown in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthControl {
    Avatar {
        image: String,
        alt: String,
        /// First character of the user's name, shown while the image loads.
        initial: String,
    },
    SignIn,
}

impl AuthControl {
    /// Avatar when authenticated, sign-in button otherwise (including while
    /// the session is still loading).
    pub fn for_session(session: &Session) -> Self {
        if !session.is_authenticated() {
            return Self::SignIn;
        }
        let user = session.user.clone().unwrap_or_default();
        let name = user.name.unwrap_or_default();
        Self::Avatar {
            image: user.image.unwrap_or_default(),
            initial: name.chars().next().map(String::from).unwrap_or_default(),
            alt: name,
        }
    }
}

/// URL that starts the provider's sign-in flow and returns to `callback_url`.
pub fn sign_in_url(base_path: &str, provider: &str, callback_url: &str) -> String {
    format!(
        "{}/signin/{}?callbackUrl={}",
        base_path.trim_end_matches('/'),
        urlencoding::encode(provider),
        urlencoding::encode(callback_url)
    )
}

/// Endpoint that returns the current session as JSON.
pub fn session_path(base_path: &str) -> String {
    format!("{}/session", base_path.trim_end_matches('/'))
}

/// External authentication collaborator.
pub trait AuthClient {
    /// Start signing in with `provider`. Fire-and-forget.
    fn sign_in(&self, provider: &str);
}

/// Signs in by sending the browser to the provider's sign-in route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectAuthClient {
    base_path: String,
}

impl RedirectAuthClient {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for RedirectAuthClient {
    fn default() -> Self {
        Self::new(DEFAULT_AUTH_BASE_PATH)
    }
}

impl AuthClient for RedirectAuthClient {
    fn sign_in(&self, provider: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let location = window.location();
                let callback = location.href().unwrap_or_else(|_| "/".to_string());
                let url = sign_in_url(&self.base_path, provider, &callback);
                info!(provider, "Redirecting to sign-in");
                if let Err(e) = location.set_href(&url) {
                    warn!(?e, "Sign-in redirect failed");
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            info!(
                provider,
                url = %sign_in_url(&self.base_path, provider, "/"),
                "Sign-in requested outside the browser, ignoring"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_from_payload() {
        let signed_in = Session::from_payload(&json!({
            "user": {"name": "Juan", "email": "juan@example.com", "image": "https://img/juan.png"},
            "expires": "2026-11-18T00:00:00.000Z"
        }));
        assert_eq!(signed_in.status, SessionStatus::Authenticated);
        assert_eq!(
            signed_in.user.unwrap().image.as_deref(),
            Some("https://img/juan.png")
        );

        assert_eq!(Session::from_payload(&json!({})), Session::unauthenticated());
        assert_eq!(Session::from_payload(&Value::Null), Session::unauthenticated());
        assert_eq!(
            Session::from_payload(&json!({"user": {"name": 7}})),
            Session::unauthenticated()
        );
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Unauthenticated).unwrap(),
            "\"unauthenticated\""
        );
        let status: SessionStatus = serde_json::from_str("\"loading\"").unwrap();
        assert_eq!(status, SessionStatus::Loading);
    }

    #[test]
    fn test_auth_control_toggles_with_status() {
        let user = SessionUser {
            name: Some("Maria".to_string()),
            image: Some("https://img/maria.png".to_string()),
        };
        let mut session = Session::authenticated(user);

        assert_eq!(
            AuthControl::for_session(&session),
            AuthControl::Avatar {
                image: "https://img/maria.png".to_string(),
                alt: "Maria".to_string(),
                initial: "M".to_string(),
            }
        );

        session.status = SessionStatus::Unauthenticated;
        assert_eq!(AuthControl::for_session(&session), AuthControl::SignIn);

        session.status = SessionStatus::Authenticated;
        assert!(matches!(
            AuthControl::for_session(&session),
            AuthControl::Avatar { .. }
        ));
    }

    #[test]
    fn test_loading_session_offers_sign_in() {
        assert_eq!(
            AuthControl::for_session(&Session::loading()),
            AuthControl::SignIn
        );
    }

    #[test]
    fn test_avatar_fallbacks_for_missing_profile() {
        let session = Session::authenticated(SessionUser::default());
        assert_eq!(
            AuthControl::for_session(&session),
            AuthControl::Avatar {
                image: String::new(),
                alt: String::new(),
                initial: String::new(),
            }
        );

        let accented = Session::authenticated(SessionUser {
            name: Some("Ñino".to_string()),
            image: None,
        });
        assert!(matches!(
            AuthControl::for_session(&accented),
            AuthControl::Avatar { initial, .. } if initial == "Ñ"
        ));
    }

    #[test]
    fn test_sign_in_url() {
        assert_eq!(
            sign_in_url("/api/auth/", "google", "http://localhost:8080/route?a=1"),
            "/api/auth/signin/google?callbackUrl=http%3A%2F%2Flocalhost%3A8080%2Froute%3Fa%3D1"
        );
        assert_eq!(session_path(DEFAULT_AUTH_BASE_PATH), "/api/auth/session");
        assert_eq!(session_path("/auth/"), "/auth/session");
    }
}
