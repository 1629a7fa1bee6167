use async_trait::async_trait;

use crate::error::Error;
use crate::types::{
    BattleList, BrawlerDefinition, BrawlerList, BrawlerRankingList, Club, ClubMemberList,
    ClubRankingList, PagingOptions, Player, PlayerRankingList, ScheduledEvents,
};

/// One method per Brawl Stars API endpoint.
///
/// Tags may be passed with or without the leading `#`. Country codes are
/// two-letter codes or `global` and are sent as given.
#[async_trait]
pub trait Client: Send + Sync {
    async fn get_player(&self, tag: &str) -> Result<Player, Error>;

    /// New battles can take up to 30 minutes to show up.
    async fn get_player_battle_log(&self, tag: &str) -> Result<BattleList, Error>;

    async fn get_club(&self, tag: &str) -> Result<Club, Error>;

    async fn get_club_members(
        &self,
        tag: &str,
        paging: Option<&PagingOptions>,
    ) -> Result<ClubMemberList, Error>;

    async fn get_brawlers(&self, paging: Option<&PagingOptions>) -> Result<BrawlerList, Error>;

    async fn get_brawler(&self, id: u32) -> Result<BrawlerDefinition, Error>;

    async fn get_player_rankings(
        &self,
        country_code: &str,
        paging: Option<&PagingOptions>,
    ) -> Result<PlayerRankingList, Error>;

    async fn get_club_rankings(
        &self,
        country_code: &str,
        paging: Option<&PagingOptions>,
    ) -> Result<ClubRankingList, Error>;

    async fn get_brawler_rankings(
        &self,
        country_code: &str,
        id: u32,
        paging: Option<&PagingOptions>,
    ) -> Result<BrawlerRankingList, Error>;

    async fn get_event_rotation(&self) -> Result<ScheduledEvents, Error>;
}
