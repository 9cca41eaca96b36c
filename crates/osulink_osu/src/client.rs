//! osu! API v2 client.

use crate::config::OsuClientConfig;
use crate::conversions::{
    beatmap_from_dto, beatmapset_from_dto, scores_from_dtos, user_from_dto,
};
use crate::dto::{
    BeatmapDto, BeatmapScoresDto, BeatmapsetSearchDto, ScoreDto, TokenResponse, UserDto,
};
use crate::token::CachedToken;
use osulink_core::{Beatmap, Beatmapset, GameMode, Score, ScoreKind, User, UserRef};
use osulink_error::{OsuApiError, OsuApiErrorKind, OsuApiResult};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, error, instrument, warn};

/// Authenticated client for the osu! API.
///
/// Cloning is cheap; clones share the HTTP connection pool and the cached
/// token. Every method reports failures as [`OsuApiError`]; a 404 surfaces as
/// [`OsuApiErrorKind::Status`] so callers can tell "absent" from "broken".
#[derive(Debug, Clone)]
pub struct OsuClient {
    http: Client,
    config: OsuClientConfig,
    token: Arc<RwLock<Option<CachedToken>>>,
}

impl OsuClient {
    /// Creates a client. No request is made until the first call.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    #[instrument(skip(config), fields(client_id = config.client_id(), base_url = %config.base_url()))]
    pub fn new(config: OsuClientConfig) -> OsuApiResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("osulink/", env!("CARGO_PKG_VERSION")))
            .timeout(*config.timeout())
            .build()
            .map_err(|e| OsuApiError::new(OsuApiErrorKind::Http(e.to_string())))?;

        debug!("Created osu! API client");

        Ok(Self {
            http,
            config,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Returns a usable bearer token, exchanging credentials when the cached
    /// one is missing or about to expire.
    async fn access_token(&self) -> OsuApiResult<String> {
        {
            let cached = self.token.read().await;
            if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Instant::now())) {
                return Ok(token.access_token().to_string());
            }
        }

        let mut slot = self.token.write().await;
        // Another task may have refreshed while we waited for the lock.
        if let Some(token) = slot.as_ref().filter(|t| t.is_fresh(Instant::now())) {
            return Ok(token.access_token().to_string());
        }

        let fresh = self.request_token().await?;
        let access_token = fresh.access_token().to_string();
        *slot = Some(fresh);
        Ok(access_token)
    }

    #[instrument(skip(self))]
    async fn request_token(&self) -> OsuApiResult<CachedToken> {
        let client_id = self.config.client_id().to_string();
        let form = [
            ("client_id", client_id.as_str()),
            ("client_secret", self.config.client_secret().as_str()),
            ("grant_type", "client_credentials"),
            ("scope", "public"),
        ];

        let requested_at = Instant::now();
        let response = self
            .http
            .post(self.config.token_url())
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Token request failed");
                OsuApiError::new(OsuApiErrorKind::Token(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "Token exchange rejected");
            return Err(OsuApiError::new(OsuApiErrorKind::Token(format!(
                "status {status}: {body}"
            ))));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| OsuApiError::new(OsuApiErrorKind::Token(e.to_string())))?;

        debug!(expires_in = token.expires_in, "Obtained access token");
        Ok(CachedToken::new(
            token.access_token,
            Duration::from_secs(token.expires_in),
            requested_at,
        ))
    }

    /// Builds an API URL from path segments, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> OsuApiResult<Url> {
        let mut url = Url::parse(&self.config.api_url())
            .map_err(|e| OsuApiError::new(OsuApiErrorKind::Http(e.to_string())))?;
        url.path_segments_mut()
            .map_err(|_| {
                OsuApiError::new(OsuApiErrorKind::Http(format!(
                    "base URL cannot carry a path: {}",
                    self.config.base_url()
                )))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Authenticated GET returning a decoded JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> OsuApiResult<T> {
        let token = self.access_token().await?;

        debug!(url = %url, "Sending request");

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Request failed");
                OsuApiError::new(OsuApiErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                warn!("Access token rejected, discarding it");
                self.token.write().await.take();
            }
            let message = response.text().await.unwrap_or_default();
            return Err(OsuApiError::new(OsuApiErrorKind::Status {
                status: status.as_u16(),
                message,
            }));
        }

        response.json::<T>().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            OsuApiError::new(OsuApiErrorKind::Parse(e.to_string()))
        })
    }

    /// Fetches a user by id or username, with statistics in `mode`.
    ///
    /// Without a mode the API answers with the user's preferred mode.
    #[instrument(skip(self), fields(user = %user))]
    pub async fn user(&self, user: &UserRef, mode: Option<GameMode>) -> OsuApiResult<User> {
        let ident = user.to_string();
        let url = match mode {
            Some(mode) => self.endpoint(&["users", &ident, mode.as_str()])?,
            None => self.endpoint(&["users", &ident])?,
        };
        let dto: UserDto = self
            .get_json(url, &[("key", user.key().to_string())])
            .await?;
        user_from_dto(dto, mode)
    }

    /// Fetches a user's best or recent plays.
    #[instrument(skip(self))]
    pub async fn user_scores(
        &self,
        user_id: u32,
        kind: ScoreKind,
        mode: Option<GameMode>,
        limit: u8,
    ) -> OsuApiResult<Vec<Score>> {
        let id = user_id.to_string();
        let url = self.endpoint(&["users", &id, "scores", kind.as_str()])?;
        let mut query = vec![("limit", limit.to_string())];
        if let Some(mode) = mode {
            query.push(("mode", mode.as_str().to_string()));
        }
        if kind.includes_fails() {
            query.push(("include_fails", "1".to_string()));
        }
        let dtos: Vec<ScoreDto> = self.get_json(url, &query).await?;
        scores_from_dtos(dtos)
    }

    /// Fetches a single beatmap.
    #[instrument(skip(self))]
    pub async fn beatmap(&self, beatmap_id: u32) -> OsuApiResult<Beatmap> {
        let id = beatmap_id.to_string();
        let url = self.endpoint(&["beatmaps", &id])?;
        let dto: BeatmapDto = self.get_json(url, &[]).await?;
        beatmap_from_dto(dto)
    }

    /// Fetches the top of a beatmap's leaderboard, best first.
    #[instrument(skip(self))]
    pub async fn beatmap_scores(
        &self,
        beatmap_id: u32,
        mode: Option<GameMode>,
        limit: u8,
    ) -> OsuApiResult<Vec<Score>> {
        let id = beatmap_id.to_string();
        let url = self.endpoint(&["beatmaps", &id, "scores"])?;
        let mut query = vec![("limit", limit.to_string())];
        if let Some(mode) = mode {
            query.push(("mode", mode.as_str().to_string()));
        }
        let dto: BeatmapScoresDto = self.get_json(url, &query).await?;
        scores_from_dtos(dto.scores)
    }

    /// Searches beatmapsets by free text, keeping at most `limit` results.
    #[instrument(skip(self))]
    pub async fn search_beatmapsets(
        &self,
        query: &str,
        mode: Option<GameMode>,
        limit: u8,
    ) -> OsuApiResult<Vec<Beatmapset>> {
        let url = self.endpoint(&["beatmapsets", "search"])?;
        let mut params = vec![("q", query.to_string()), ("s", "any".to_string())];
        if let Some(mode) = mode {
            params.push(("m", mode.as_int().to_string()));
        }
        let dto: BeatmapsetSearchDto = self.get_json(url, &params).await?;
        dto.beatmapsets
            .into_iter()
            .take(usize::from(limit))
            .map(beatmapset_from_dto)
            .collect()
    }
}
