//! Anthropic Messages API client.
//!
//! Turns a vibe string into a list of `{artist, track}` candidates by asking
//! the model for a JSON array and extracting it from the free-text reply.
//! The extraction step is a pure function ([`extract_candidates`]) so the
//! many ways a model can mangle its output can be unit-tested without any
//! network dependency.

use reqwest::Client;

use crate::{
    config,
    error::Error,
    types::{Message, MessagesRequest, MessagesResponse, SongCandidate},
};

const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

/// Client for the Anthropic Messages API.
#[derive(Debug, Clone)]
pub struct ModelClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl ModelClient {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        ModelClient {
            client: Client::new(),
            api_url,
            api_key,
            model,
        }
    }

    /// Builds a client from the process environment.
    pub fn from_env() -> Self {
        Self::new(
            config::anthropic_api_url(),
            config::anthropic_api_key(),
            config::anthropic_model(),
        )
    }

    /// Asks the model for ten song candidates matching the vibe.
    ///
    /// The model is instructed to return exactly a JSON array of ten
    /// `{"artist", "track"}` objects with no surrounding prose, but the reply
    /// is still treated as free text and run through [`extract_candidates`].
    /// The candidate count is not enforced; downstream components tolerate
    /// fewer than ten.
    ///
    /// # Errors
    ///
    /// [`Error::ModelRequest`] when the HTTP call fails or returns a
    /// non-success status; [`Error::NoCandidateArray`] and
    /// [`Error::CandidateJson`] when the reply cannot be parsed. All three
    /// abort the whole generation request.
    pub async fn generate_candidates(&self, vibe: &str) -> Result<Vec<SongCandidate>, Error> {
        let prompt = format!(
            "Generate a playlist of 10 songs that match this vibe: \"{vibe}\". \
             Return ONLY a JSON array with objects containing \"artist\" and \"track\" fields. \
             Example format: [{{\"artist\": \"Artist Name\", \"track\": \"Song Title\"}}]"
        );

        let body = MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.api_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(Error::ModelRequest)?;

        let message = response
            .json::<MessagesResponse>()
            .await
            .map_err(Error::ModelRequest)?;

        let text = message
            .content
            .first()
            .map(|block| block.text.as_str())
            .unwrap_or_default();

        extract_candidates(text)
    }
}

/// Extracts the candidate array from a free-text model reply.
///
/// Takes the substring spanning the first `[` through the last `]` and parses
/// it as a candidate array. The greedy span means a reply wrapping the array
/// in prose still parses, while a reply with stray brackets around valid JSON
/// fails loudly instead of silently truncating.
pub fn extract_candidates(text: &str) -> Result<Vec<SongCandidate>, Error> {
    let start = text.find('[').ok_or(Error::NoCandidateArray)?;
    let end = text.rfind(']').filter(|&end| end > start).ok_or(Error::NoCandidateArray)?;

    serde_json::from_str(&text[start..=end]).map_err(Error::CandidateJson)
}
