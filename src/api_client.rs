use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::Client;
use crate::config::{Config, DEFAULT_BASE_URL};
use crate::endpoint::Endpoint;
use crate::error::{ApiError, Error, JSONError};
use crate::types::*;

/// Brawl Stars API client backed by a single `reqwest::Client`.
///
/// The bearer token and `Accept` header are fixed at construction; clones
/// share the same connection pool.
#[derive(Clone, Debug)]
pub struct BrawlStarsClient {
    client: reqwest::Client,
    base_url: String,
}

impl BrawlStarsClient {
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, Error> {
        Self::from_config(&Config::new(api_key).with_base_url(base_url))
    }

    // requires BRAWL_STARS_API_KEY env var
    // can use dotenv
    pub fn from_env() -> Result<Self, Error> {
        Self::from_config(&Config::from_env()?)
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(Self {
            client: reqwest::Client::builder()
                .default_headers(headers)
                .build()
                .map_err(Error::ClientBuild)?,
            base_url: config.base_url.trim_end_matches('/').into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        paging: Option<&PagingOptions>,
    ) -> Result<T, Error> {
        let path = endpoint.path();
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(url);
        if let Some(paging) = paging {
            request = request.query(paging);
        }

        debug!(%endpoint, ?paging, "sending request");
        let response = request.send().await.map_err(|e| {
            let err = ApiError::from_transport(&e);
            warn!(%endpoint, error = %err, "request failed without a response");
            err
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::new(e.to_string(), Some(status), None))?;

        if !status.is_success() {
            let error_data = ClientError::from_body(&body);
            let err = ApiError::from_status(status, error_data);
            warn!(%endpoint, error = %err, "request rejected");
            return Err(err.into());
        }

        debug!(%endpoint, %status, bytes = body.len(), "received response");
        serde_json::from_slice(&body).map_err(|e| JSONError::new(&path, e).into())
    }
}

#[async_trait]
impl Client for BrawlStarsClient {
    async fn get_player(&self, tag: &str) -> Result<Player, Error> {
        self.request(Endpoint::Player { tag }, None).await
    }

    async fn get_player_battle_log(&self, tag: &str) -> Result<BattleList, Error> {
        self.request(Endpoint::PlayerBattleLog { tag }, None).await
    }

    async fn get_club(&self, tag: &str) -> Result<Club, Error> {
        self.request(Endpoint::Club { tag }, None).await
    }

    async fn get_club_members(
        &self,
        tag: &str,
        paging: Option<&PagingOptions>,
    ) -> Result<ClubMemberList, Error> {
        self.request(Endpoint::ClubMembers { tag }, paging).await
    }

    async fn get_brawlers(&self, paging: Option<&PagingOptions>) -> Result<BrawlerList, Error> {
        self.request(Endpoint::Brawlers, paging).await
    }

    async fn get_brawler(&self, id: u32) -> Result<BrawlerDefinition, Error> {
        self.request(Endpoint::Brawler { id }, None).await
    }

    async fn get_player_rankings(
        &self,
        country_code: &str,
        paging: Option<&PagingOptions>,
    ) -> Result<PlayerRankingList, Error> {
        self.request(Endpoint::PlayerRankings { country_code }, paging)
            .await
    }

    async fn get_club_rankings(
        &self,
        country_code: &str,
        paging: Option<&PagingOptions>,
    ) -> Result<ClubRankingList, Error> {
        self.request(Endpoint::ClubRankings { country_code }, paging)
            .await
    }

    async fn get_brawler_rankings(
        &self,
        country_code: &str,
        id: u32,
        paging: Option<&PagingOptions>,
    ) -> Result<BrawlerRankingList, Error> {
        self.request(Endpoint::BrawlerRankings { country_code, id }, paging)
            .await
    }

    async fn get_event_rotation(&self) -> Result<ScheduledEvents, Error> {
        self.request(Endpoint::EventRotation, None).await
    }
}
