//! HTTP API endpoints.
//!
//! One handler per endpoint, kept thin: request bodies are deserialized by
//! axum, the work happens in the pipeline and component layers, and failures
//! bubble out as [`crate::error::Error`] which maps itself to an opaque 500.

mod auth;
mod generate;
mod health;
mod playlist;

pub use auth::{spotify_auth, spotify_callback};
pub use generate::generate_playlist;
pub use health::health;
pub use playlist::create_playlist;
