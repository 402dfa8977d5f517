use reqwest::Client;

use crate::{
    config,
    types::{ResolvedTrack, SearchResponse, SongCandidate},
    warning,
};

/// Resolves model-proposed candidates against the Spotify catalog.
///
/// Each candidate is looked up independently with a structured
/// `artist:… track:…` query limited to one result; the first hit is the
/// match (no scoring or fuzzy tie-break). A candidate whose lookup fails or
/// returns nothing is dropped, never aborting the batch, so the output is a
/// subsequence of the input in candidate order. Duplicate candidates are not
/// deduplicated.
#[derive(Debug, Clone)]
pub struct TrackResolver {
    client: Client,
    api_url: String,
}

impl TrackResolver {
    pub fn new(api_url: String) -> Self {
        TrackResolver {
            client: Client::new(),
            api_url,
        }
    }

    /// Builds a resolver from the process environment.
    pub fn from_env() -> Self {
        Self::new(config::spotify_api_url())
    }

    /// Resolves a candidate batch, authenticated with the service token.
    ///
    /// Lookups fan out concurrently; handles are awaited in candidate order
    /// so the output order matches the input order regardless of completion
    /// order. Infallible: per-candidate failures are logged and absorbed.
    pub async fn resolve(&self, candidates: &[SongCandidate], token: &str) -> Vec<ResolvedTrack> {
        let mut handles = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let resolver = self.clone();
            let candidate = candidate.clone();
            let token = token.to_string();
            handles.push(tokio::spawn(async move {
                let found = resolver.search_one(&candidate, &token).await;
                (candidate, found)
            }));
        }

        let mut tracks = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok((_, Ok(Some(track)))) => tracks.push(track),
                Ok((candidate, Ok(None))) => {
                    warning!(
                        "No catalog match for: {} - {}",
                        candidate.artist,
                        candidate.track
                    );
                }
                Ok((candidate, Err(e))) => {
                    warning!(
                        "Failed to find track: {} - {}: {}",
                        candidate.artist,
                        candidate.track,
                        e
                    );
                }
                Err(e) => {
                    warning!("Task join error: {}", e);
                }
            }
        }

        tracks
    }

    /// Looks up a single candidate, returning `None` when the catalog has no
    /// match for the structured query.
    async fn search_one(
        &self,
        candidate: &SongCandidate,
        token: &str,
    ) -> Result<Option<ResolvedTrack>, reqwest::Error> {
        let query = format!("artist:{} track:{}", candidate.artist, candidate.track);

        let response = self
            .client
            .get(format!("{}/search", self.api_url))
            .query(&[("q", query.as_str()), ("type", "track"), ("limit", "1")])
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?;

        let results = response.json::<SearchResponse>().await?;

        Ok(results.tracks.items.into_iter().next().map(|track| {
            ResolvedTrack {
                id: track.id,
                uri: track.uri,
                name: track.name,
                artist: track
                    .artists
                    .first()
                    .map(|a| a.name.clone())
                    .unwrap_or_default(),
                preview_url: track.preview_url,
                external_url: track.external_urls.spotify,
            }
        }))
    }
}
