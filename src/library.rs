//! Client for the library endpoints of the Spotify Web API.
//!
//! The library is the authenticated user's collection of saved tracks and
//! saved albums. Both resource families expose the same three shapes of
//! operation (containment check, add, remove), plus a listing endpoint for
//! saved tracks, so the request building, execution, and error decoding are
//! factored into one internal routine parameterized by resource path and
//! HTTP verb.
//!
//! Every operation issues exactly one HTTP exchange. Rate limiting,
//! pagination beyond the first page, and chunking of large ID lists are the
//! caller's concern.

use std::sync::Arc;

use log::debug;
use reqwest::{Client, Method, StatusCode};
use tokio_util::sync::CancellationToken;

use crate::{
    auth::{StaticToken, TokenProvider},
    config::Config,
    error::{Error, ErrorEnvelope, Result},
    types::SavedTracksPage,
};

/// Saved-tracks resource path.
const TRACKS: &str = "/me/tracks";
/// Saved-albums resource path.
const ALBUMS: &str = "/me/albums";

/// Client for the current user's Spotify library.
///
/// Wraps an HTTP transport, an immutable [`Config`], and a token provider.
/// The client holds no mutable state between calls, so a single instance
/// can be shared and used concurrently; each operation allocates its own
/// request and response lifecycle.
#[derive(Clone)]
pub struct LibraryClient {
    http: Client,
    config: Config,
    token: Arc<dyn TokenProvider>,
}

impl LibraryClient {
    /// Creates a client from a configuration and a token provider.
    pub fn new(config: Config, token: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: Client::new(),
            config,
            token,
        }
    }

    /// Creates a client for the official API from a pre-acquired token.
    ///
    /// Configuration is read from the environment, so `SPOTIFY_API_URL`
    /// can still redirect the client at a different host.
    ///
    /// # Example
    ///
    /// ```
    /// let client = LibraryClient::with_token("BQC...");
    /// ```
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(Config::from_env(), Arc::new(StaticToken::new(token)))
    }

    /// Checks whether tracks are saved in the user's library.
    ///
    /// # Arguments
    ///
    /// * `cancel` - Cancellation token observed for the whole exchange
    /// * `ids` - One or more Spotify track IDs
    ///
    /// # Returns
    ///
    /// One boolean per input ID, in input order: `true` when the track is
    /// saved in the library.
    ///
    /// # Scopes
    ///
    /// Requires `user-library-read`.
    pub async fn user_has_tracks(
        &self,
        cancel: &CancellationToken,
        ids: &[&str],
    ) -> Result<Vec<bool>> {
        self.contains(cancel, TRACKS, ids).await
    }

    /// Saves tracks to the user's library.
    ///
    /// All requested IDs are submitted in one request; there is no partial
    /// success from the client's point of view. Saving an already-saved
    /// track is accepted by the API.
    ///
    /// # Scopes
    ///
    /// Requires `user-library-modify`.
    pub async fn add_tracks_to_library(
        &self,
        cancel: &CancellationToken,
        ids: &[&str],
    ) -> Result<()> {
        self.modify(cancel, Method::PUT, TRACKS, ids).await
    }

    /// Removes tracks from the user's library.
    ///
    /// The client tracks no prior state, so removing tracks that are not
    /// saved succeeds whenever the server accepts the request.
    ///
    /// # Scopes
    ///
    /// Requires `user-library-modify`.
    pub async fn remove_tracks_from_library(
        &self,
        cancel: &CancellationToken,
        ids: &[&str],
    ) -> Result<()> {
        self.modify(cancel, Method::DELETE, TRACKS, ids).await
    }

    /// Retrieves the first page of the user's saved tracks.
    ///
    /// Uses the server's default page size. The returned page preserves
    /// server order and carries the total number of saved tracks, which can
    /// exceed the number of items in the page. Fetching further pages is
    /// not supported by this client.
    ///
    /// # Scopes
    ///
    /// Requires `user-library-read`.
    pub async fn get_saved_tracks_from_library(
        &self,
        cancel: &CancellationToken,
    ) -> Result<SavedTracksPage> {
        let body = self.send(cancel, Method::GET, TRACKS, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Checks whether albums are saved in the user's library.
    ///
    /// Identical contract to [`LibraryClient::user_has_tracks`] against the
    /// saved-albums resource.
    pub async fn user_has_albums(
        &self,
        cancel: &CancellationToken,
        ids: &[&str],
    ) -> Result<Vec<bool>> {
        self.contains(cancel, ALBUMS, ids).await
    }

    /// Saves albums to the user's library.
    ///
    /// Identical contract to [`LibraryClient::add_tracks_to_library`]
    /// against the saved-albums resource.
    pub async fn add_albums_to_library(
        &self,
        cancel: &CancellationToken,
        ids: &[&str],
    ) -> Result<()> {
        self.modify(cancel, Method::PUT, ALBUMS, ids).await
    }

    /// Removes albums from the user's library.
    ///
    /// Identical contract to [`LibraryClient::remove_tracks_from_library`]
    /// against the saved-albums resource.
    pub async fn remove_albums_from_library(
        &self,
        cancel: &CancellationToken,
        ids: &[&str],
    ) -> Result<()> {
        self.modify(cancel, Method::DELETE, ALBUMS, ids).await
    }

    /// Containment check shared by both resource families.
    async fn contains(
        &self,
        cancel: &CancellationToken,
        resource: &str,
        ids: &[&str],
    ) -> Result<Vec<bool>> {
        let path = format!("{resource}/contains");
        let body = self.send(cancel, Method::GET, &path, Some(ids)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Add/remove shared by both resource families. Success bodies are empty.
    async fn modify(
        &self,
        cancel: &CancellationToken,
        method: Method,
        resource: &str,
        ids: &[&str],
    ) -> Result<()> {
        self.send(cancel, method, resource, Some(ids)).await?;
        Ok(())
    }

    /// Performs one HTTP exchange and returns the raw success body.
    ///
    /// Builds the URL from the configured base, the endpoint path, and the
    /// comma-joined `ids` query parameter, attaches the bearer token, and
    /// races both the request and the body read against `cancel`. Non-2xx
    /// responses are decoded into [`Error::Request`].
    async fn send(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        ids: Option<&[&str]>,
    ) -> Result<String> {
        let mut api_url = format!("{uri}{path}", uri = self.config.api_url());
        if let Some(ids) = ids {
            api_url.push_str(&format!("?ids={}", ids.join(",")));
        }

        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        debug!("{method} {api_url}");

        let request = self
            .http
            .request(method, &api_url)
            .bearer_auth(self.token.access_token());

        let response = tokio::select! {
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            response = request.send() => response?,
        };

        let status = response.status();
        let body = tokio::select! {
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            body = response.text() => body?,
        };

        if !status.is_success() {
            return Err(request_error(status, &body));
        }

        Ok(body)
    }
}

/// Maps a non-2xx response to [`Error::Request`].
///
/// Prefers status and message from the decoded error envelope; when the
/// body is not a valid envelope the HTTP status and its canonical reason
/// are used instead.
fn request_error(status: StatusCode, body: &str) -> Error {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => Error::Request {
            status: envelope.error.status,
            message: envelope.error.message,
        },
        Err(_) => Error::Request {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("unexpected response")
                .to_string(),
        },
    }
}
