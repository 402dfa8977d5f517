//! Error taxonomy for the generation and persistence pipelines.
//!
//! Every failure kind that can cross the request boundary lives in [`Error`].
//! Per-candidate catalog lookup failures are deliberately absent: they are
//! absorbed inside the track resolver and never surface. Everything else is
//! terminal for the request it occurs in; no retries happen at this layer.
//!
//! The [`IntoResponse`] impl reports failures to the client as an opaque 500
//! with a short human-readable message. Upstream error bodies and source
//! chains are only logged server-side.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::warning;

/// Which of the three playlist-persist steps failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistStep {
    Profile,
    Create,
    AddTracks,
}

impl std::fmt::Display for PersistStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistStep::Profile => write!(f, "profile lookup"),
            PersistStep::Create => write!(f, "playlist creation"),
            PersistStep::AddTracks => write!(f, "track append"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client-credentials exchange for the service-level catalog token
    /// failed. The stale cache entry is left untouched so the next request
    /// retries the exchange.
    #[error("client credentials exchange failed: {0}")]
    CredentialExchange(#[source] reqwest::Error),

    /// The text-generation request itself failed.
    #[error("model request failed: {0}")]
    ModelRequest(#[source] reqwest::Error),

    /// The model response contains no array-shaped substring.
    #[error("no JSON array found in model response")]
    NoCandidateArray,

    /// The array-shaped substring is not valid candidate JSON.
    #[error("model response is not a valid candidate array: {0}")]
    CandidateJson(#[source] serde_json::Error),

    /// The authorization-code exchange failed. Codes are single-use, so the
    /// exchange is never retried.
    #[error("authorization code exchange failed: {0}")]
    AuthExchange(#[source] reqwest::Error),

    /// One of the three playlist-persist steps failed. A failure at the
    /// track-append step leaves the just-created empty playlist behind.
    #[error("playlist persist failed during {step}: {source}")]
    Persist {
        step: PersistStep,
        #[source]
        source: reqwest::Error,
    },
}

impl Error {
    /// Short message exposed to the client. Internal detail stays out of the
    /// response body.
    fn public_message(&self) -> &'static str {
        match self {
            Error::CredentialExchange(_)
            | Error::ModelRequest(_)
            | Error::NoCandidateArray
            | Error::CandidateJson(_) => "Failed to generate playlist",
            Error::AuthExchange(_) => "Failed to authenticate with Spotify",
            Error::Persist { .. } => "Failed to create playlist",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        warning!("request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.public_message() })),
        )
            .into_response()
    }
}
