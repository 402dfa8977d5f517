use reqwest::Client;

use crate::{
    config,
    error::{Error, PersistStep},
    types::{
        AddTracksRequest, CreatePlaylistRequest, CreatePlaylistResponse, PlaylistCreation,
        UserProfile,
    },
};

/// Persists a generated track list into the user's Spotify account.
///
/// Three sequential remote calls, each depending on the previous result:
/// resolve the account identity, create the playlist container, append the
/// tracks. There is no upstream atomicity: a failure on the append step
/// leaves the just-created empty playlist in the account.
#[derive(Debug, Clone)]
pub struct PlaylistPersister {
    client: Client,
    api_url: String,
}

impl PlaylistPersister {
    pub fn new(api_url: String) -> Self {
        PlaylistPersister {
            client: Client::new(),
            api_url,
        }
    }

    /// Builds a persister from the process environment.
    pub fn from_env() -> Self {
        Self::new(config::spotify_api_url())
    }

    /// Creates a non-public playlist named after the vibe and fills it with
    /// the supplied track URIs, authorized by the user's access token.
    ///
    /// # Errors
    ///
    /// [`Error::Persist`] tagged with the step that failed. Failures during
    /// profile lookup or playlist creation abort with nothing created; a
    /// failure during track append is not rolled back and an empty playlist
    /// remains behind.
    pub async fn persist(
        &self,
        access_token: &str,
        vibe: &str,
        track_uris: Vec<String>,
    ) -> Result<PlaylistCreation, Error> {
        let user = self.current_user(access_token).await?;
        let playlist = self.create_playlist(access_token, &user.id, vibe).await?;

        self.add_tracks(access_token, &playlist.id, track_uris)
            .await?;

        Ok(PlaylistCreation {
            success: true,
            playlist_id: playlist.id,
            playlist_url: playlist.external_urls.spotify,
        })
    }

    async fn current_user(&self, access_token: &str) -> Result<UserProfile, Error> {
        let step = PersistStep::Profile;

        let response = self
            .client
            .get(format!("{}/me", self.api_url))
            .bearer_auth(access_token)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| Error::Persist { step, source })?;

        response
            .json::<UserProfile>()
            .await
            .map_err(|source| Error::Persist { step, source })
    }

    async fn create_playlist(
        &self,
        access_token: &str,
        user_id: &str,
        vibe: &str,
    ) -> Result<CreatePlaylistResponse, Error> {
        let step = PersistStep::Create;

        let body = CreatePlaylistRequest {
            name: format!("{vibe} Vibes"),
            description: format!("AI-generated playlist for \"{vibe}\" mood by VibeStream"),
            public: false,
        };

        let response = self
            .client
            .post(format!("{}/users/{}/playlists", self.api_url, user_id))
            .bearer_auth(access_token)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| Error::Persist { step, source })?;

        response
            .json::<CreatePlaylistResponse>()
            .await
            .map_err(|source| Error::Persist { step, source })
    }

    async fn add_tracks(
        &self,
        access_token: &str,
        playlist_id: &str,
        uris: Vec<String>,
    ) -> Result<(), Error> {
        let step = PersistStep::AddTracks;

        self.client
            .post(format!("{}/playlists/{}/tracks", self.api_url, playlist_id))
            .bearer_auth(access_token)
            .json(&AddTracksRequest { uris })
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| Error::Persist { step, source })?;

        Ok(())
    }
}
