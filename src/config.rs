//! Configuration management for the vibe-to-playlist service.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file in the working directory. Secrets
//! (API keys, the Spotify client pair) must be provided and the process
//! refuses to start without them; endpoint URLs, the listen address, the
//! redirect URI and the model name carry sensible defaults and only need to
//! be set to point the service at a non-production upstream.

use std::env;

use dotenv;

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are not an error; in that case configuration comes from the
/// process environment alone. Returns an error only when a `.env` file exists
/// but cannot be parsed.
pub fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

/// Returns the address and port the HTTP server binds to.
///
/// Read from `SERVER_ADDRESS`, defaulting to `127.0.0.1:3000`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string())
}

/// Returns the Spotify API client ID.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI the browser client is sent back to.
///
/// Read from `SPOTIFY_REDIRECT_URI`, defaulting to the local frontend dev
/// server callback. Must match the redirect URI registered in the Spotify
/// application settings.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI").unwrap_or_else(|_| "http://127.0.0.1:5173/callback".to_string())
}

/// Returns the Spotify OAuth authorization endpoint.
pub fn spotify_auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify OAuth token exchange endpoint.
///
/// Used for both the client-credentials grant (catalog searches) and the
/// authorization-code grant (user playlists).
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Spotify Web API base URL.
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Anthropic API key.
///
/// # Panics
///
/// Panics if the `ANTHROPIC_API_KEY` environment variable is not set.
pub fn anthropic_api_key() -> String {
    env::var("ANTHROPIC_API_KEY").expect("ANTHROPIC_API_KEY must be set")
}

/// Returns the Anthropic API base URL.
pub fn anthropic_api_url() -> String {
    env::var("ANTHROPIC_API_URL").unwrap_or_else(|_| "https://api.anthropic.com".to_string())
}

/// Returns the model used for playlist candidate generation.
pub fn anthropic_model() -> String {
    env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| "claude-opus-4-20250514".to_string())
}
