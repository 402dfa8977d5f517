use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{config, error::Error, types::UserToken};

/// Scopes requested from the user during authorization: playback streaming,
/// profile/email read access, and playlist modification.
pub const SCOPES: [&str; 5] = [
    "streaming",
    "user-read-email",
    "user-read-private",
    "playlist-modify-public",
    "playlist-modify-private",
];

/// Builds the `Basic` authorization header for the Spotify identity endpoint
/// from a client ID/secret pair.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    format!(
        "Basic {}",
        STANDARD.encode(format!("{client_id}:{client_secret}"))
    )
}

/// Browser-redirect authorization flow for user-level access.
///
/// Constructs the authorization redirect URL and exchanges the authorization
/// code the browser brings back for an access/refresh token pair. The
/// resulting [`UserToken`] crosses the trust boundary to the caller; the
/// server keeps no copy.
#[derive(Debug, Clone)]
pub struct SpotifyAuth {
    client: Client,
    auth_url: String,
    token_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl SpotifyAuth {
    pub fn new(
        auth_url: String,
        token_url: String,
        client_id: String,
        client_secret: String,
        redirect_uri: String,
    ) -> Self {
        SpotifyAuth {
            client: Client::new(),
            auth_url,
            token_url,
            client_id,
            client_secret,
            redirect_uri,
        }
    }

    /// Builds a flow from the process environment.
    pub fn from_env() -> Self {
        Self::new(
            config::spotify_auth_url(),
            config::spotify_token_url(),
            config::spotify_client_id(),
            config::spotify_client_secret(),
            config::spotify_redirect_uri(),
        )
    }

    /// Constructs the authorization redirect URL for the browser-based
    /// authorization-code grant.
    ///
    /// Embeds the fixed scope set and the configured redirect URI. Performs
    /// no network call and cannot fail.
    pub fn authorize_url(&self) -> String {
        format!(
            "{auth_url}?response_type=code&client_id={client_id}&scope={scope}&redirect_uri={redirect_uri}",
            auth_url = self.auth_url,
            client_id = self.client_id,
            scope = SCOPES.join("%20"),
            redirect_uri = self.redirect_uri,
        )
    }

    /// Exchanges an authorization code for a user access/refresh token pair.
    ///
    /// Posts the code and redirect URI to the token endpoint with the Basic
    /// client-credentials header.
    ///
    /// # Errors
    ///
    /// Any non-success response or network error surfaces as
    /// [`Error::AuthExchange`]. The code is not retried: authorization codes
    /// are single-use and a replay would fail upstream regardless.
    pub async fn exchange_code(&self, code: &str) -> Result<UserToken, Error> {
        let response = self
            .client
            .post(&self.token_url)
            .header(
                "Authorization",
                basic_auth_header(&self.client_id, &self.client_secret),
            )
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", &self.redirect_uri),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(Error::AuthExchange)?;

        response.json::<UserToken>().await.map_err(Error::AuthExchange)
    }
}
