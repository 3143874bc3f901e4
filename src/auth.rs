//! Bearer token supply for outgoing API requests.
//!
//! Every library request carries an `Authorization: Bearer <token>` header.
//! Obtaining and refreshing that token (OAuth flows, token caching) happens
//! outside this crate; the client only asks a [`TokenProvider`] for the
//! current token right before each request.

/// Supplies the bearer token attached to every API request.
///
/// Implementations that refresh tokens should hand out a token that is
/// valid at the time of the call. The client queries the provider once per
/// request and never stores the returned value.
pub trait TokenProvider: Send + Sync {
    /// Returns the access token for the next request.
    fn access_token(&self) -> String;
}

/// A fixed, pre-acquired access token.
///
/// Suitable for short-lived programs and tests where the token outlives
/// every request the client will make.
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> String {
        self.token.clone()
    }
}
