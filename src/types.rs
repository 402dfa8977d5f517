use serde::{Deserialize, Serialize};

/// One (artist, track) pair proposed by the text model. Ephemeral; candidates
/// are never persisted and not guaranteed to exist in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SongCandidate {
    pub artist: String,
    pub track: String,
}

/// A candidate successfully matched to a concrete catalog entry. Identity is
/// the Spotify-assigned `id`; `preview_url` is absent when the catalog has no
/// preview audio for the track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedTrack {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub artist: String,
    pub preview_url: Option<String>,
    pub external_url: String,
}

/// Output of one generation cycle. `tracks` holds between zero and the
/// number of proposed candidates, in candidate order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPlaylist {
    pub vibe: String,
    #[serde(rename = "playlist")]
    pub tracks: Vec<ResolvedTrack>,
}

/// User-level access/refresh token pair from the authorization-code grant.
/// Returned to the browser client, which owns and stores it; the server never
/// retains it past the request that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserToken {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: u64,
}

/// Token payload of the client-credentials grant.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientCredentialsResponse {
    pub access_token: String,
    pub expires_in: i64,
}

// --- Anthropic Messages API ---

#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: String,
}

// --- Spotify Web API ---

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackPage {
    pub items: Vec<CatalogTrack>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogTrack {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub artists: Vec<CatalogArtist>,
    pub preview_url: Option<String>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogArtist {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

// --- HTTP surface ---

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub vibe: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUrlResponse {
    pub auth_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallbackRequest {
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaylistApiRequest {
    pub access_token: String,
    pub vibe: String,
    pub track_uris: Vec<String>,
}

/// Outcome of a successful three-step playlist persist.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistCreation {
    pub success: bool,
    pub playlist_id: String,
    pub playlist_url: String,
}
