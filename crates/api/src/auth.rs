//! Credential checking for the dashboard.
//!
//! Routes never compare passwords themselves. They depend on the
//! [`Authenticator`] stored in [`AppState`], either through the login handler
//! or through the [`Admin`] extractor that guards mutating routes:
//!
//! ```text
//! Authorization: Basic <base64(username:password)>
//!        ↓
//! Admin extractor → Credentials::from_basic_auth → Authenticator::authenticate
//!        ↓ ok                                              ↓ fail
//!     handler runs                                     401 Unauthorized
//! ```

use std::fmt;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use content_store::ContentStore;
use serde::Deserialize;
use subtle::ConstantTimeEq;

use crate::error::ApiError;
use crate::state::AppState;

/// A username/password pair presented by a client.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Decodes an `Authorization` header value of the form
    /// `Basic <base64(username:password)>`.
    ///
    /// The decoded text is split at the first colon, so passwords may contain
    /// colons. Returns `None` for any other scheme or malformed payload.
    pub fn from_basic_auth(header_value: &str) -> Option<Self> {
        let encoded = header_value.strip_prefix("Basic ")?;
        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some(Self::new(username, password))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Decides whether presented credentials grant dashboard access.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> bool;
}

/// Authenticates against one configured username/password pair.
///
/// With no password configured every attempt is rejected.
pub struct StaticCredentials {
    username: String,
    password: Option<String>,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, credentials: &Credentials) -> bool {
        let Some(password) = &self.password else {
            return false;
        };
        let username_ok = self
            .username
            .as_bytes()
            .ct_eq(credentials.username.as_bytes());
        let password_ok = password.as_bytes().ct_eq(credentials.password.as_bytes());
        (username_ok & password_ok).into()
    }
}

/// Extractor that requires valid Basic-Auth credentials.
///
/// Place it before any body extractor so unauthenticated requests are
/// rejected without reading the body.
#[derive(Debug, Clone)]
pub struct Admin {
    pub username: String,
}

impl<S: ContentStore> FromRequestParts<Arc<AppState<S>>> for Admin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState<S>>,
    ) -> Result<Self, Self::Rejection> {
        let credentials = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(Credentials::from_basic_auth);

        match credentials {
            Some(credentials) if state.authenticator.authenticate(&credentials) => Ok(Admin {
                username: credentials.username,
            }),
            Some(credentials) => {
                metrics::counter!("auth_failures_total").increment(1);
                tracing::warn!(username = %credentials.username, "rejected basic auth credentials");
                Err(ApiError::Unauthorized)
            }
            None => {
                metrics::counter!("auth_failures_total").increment(1);
                tracing::warn!("missing or malformed basic auth header");
                Err(ApiError::Unauthorized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    fn gate() -> StaticCredentials {
        StaticCredentials::new("nikma", Some("correct horse".to_string()))
    }

    #[test]
    fn decodes_basic_auth_header() {
        let creds = Credentials::from_basic_auth(&basic("nikma:correct horse")).unwrap();
        assert_eq!(creds.username, "nikma");
        assert_eq!(creds.password, "correct horse");
    }

    #[test]
    fn password_may_contain_colons() {
        let creds = Credentials::from_basic_auth(&basic("nikma:a:b:c")).unwrap();
        assert_eq!(creds.username, "nikma");
        assert_eq!(creds.password, "a:b:c");
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(Credentials::from_basic_auth("Bearer abc.def.ghi").is_none());
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(Credentials::from_basic_auth("Basic !!!not-base64!!!").is_none());
    }

    #[test]
    fn rejects_payload_without_colon() {
        assert!(Credentials::from_basic_auth(&basic("nikma")).is_none());
    }

    #[test]
    fn accepts_configured_pair() {
        assert!(gate().authenticate(&Credentials::new("nikma", "correct horse")));
    }

    #[test]
    fn rejects_wrong_password_or_username() {
        let gate = gate();
        assert!(!gate.authenticate(&Credentials::new("nikma", "wrong")));
        assert!(!gate.authenticate(&Credentials::new("admin", "correct horse")));
        assert!(!gate.authenticate(&Credentials::new("", "")));
    }

    #[test]
    fn rejects_everything_without_configured_password() {
        let gate = StaticCredentials::new("nikma", None);
        assert!(!gate.authenticate(&Credentials::new("nikma", "")));
        assert!(!gate.authenticate(&Credentials::new("nikma", "anything")));
    }

    #[test]
    fn debug_redacts_password() {
        let debug = format!("{:?}", Credentials::new("nikma", "correct horse"));
        assert!(!debug.contains("correct horse"));
    }
}
