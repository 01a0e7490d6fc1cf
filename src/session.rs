// SPDX-License-Identifier: MPL-2.0
//! Session credential lookup.
//!
//! The filter panel only asks whether a credential is present; it never
//! inspects the token itself.

/// Environment variable read by [`Session::from_env`].
pub const ENV_AUTH_TOKEN: &str = "ALBUM_LENS_AUTH_TOKEN";

/// Source of the current session credential.
pub trait Authentication {
    /// Returns the session token, if the user is authenticated.
    fn auth_token(&self) -> Option<&str>;

    fn is_authenticated(&self) -> bool {
        self.auth_token().is_some()
    }
}

/// Session holding an optional, non-empty auth token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// An unauthenticated session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session with `token`. Blank tokens count as no credential.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.trim().is_empty()).then_some(token),
        }
    }

    /// Reads the token from [`ENV_AUTH_TOKEN`].
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(ENV_AUTH_TOKEN)
            .map(Self::with_token)
            .unwrap_or_default()
    }
}

impl Authentication for Session {
    fn auth_token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
