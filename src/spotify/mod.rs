//! Spotify Web API integration.
//!
//! Raw reqwest clients for the three slices of the API this service touches:
//!
//! - [`auth`] - authorization URL construction and the authorization-code
//!   token exchange for user-level access
//! - [`search`] - per-candidate catalog track resolution with isolated
//!   failure handling
//! - [`playlist`] - the three-step persist transaction against the user's
//!   account (profile, create, add tracks)
//!
//! The client-credentials token used by [`search`] is owned by
//! [`crate::management::ServiceTokenCache`], not by this module.

pub mod auth;
pub mod playlist;
pub mod search;

pub use auth::SpotifyAuth;
pub use playlist::PlaylistPersister;
pub use search::TrackResolver;
