use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub id: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubIdentifier {
    pub tag: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gadget {
    pub name: Value,
    pub id: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StarPower {
    pub name: Value,
    pub id: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    pub name: Value,
    pub id: u32,
    pub level: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrawlerStat {
    pub gadgets: Vec<Gadget>,
    pub star_powers: Vec<StarPower>,
    pub id: u32,
    pub rank: u32,
    pub trophies: u32,
    pub highest_trophies: u32,
    pub power: u32,
    pub gears: Vec<Gear>,
    pub name: Value,
}

/// Club membership as reported on a player profile.
///
/// The API sends an empty object for players without a club.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayerClub {
    Club(ClubIdentifier),
    NoClub {},
}

impl PlayerClub {
    pub fn club(&self) -> Option<&ClubIdentifier> {
        match self {
            PlayerClub::Club(club) => Some(club),
            PlayerClub::NoClub {} => None,
        }
    }
}

impl Default for PlayerClub {
    fn default() -> Self {
        PlayerClub::NoClub {}
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub club: PlayerClub,
    #[serde(rename = "3vs3Victories")]
    pub three_vs_three_victories: u32,
    pub is_qualified_from_championship_challenge: bool,
    pub icon: Icon,
    pub tag: String,
    pub name: String,
    pub trophies: u32,
    pub exp_level: u32,
    pub exp_points: u32,
    pub highest_trophies: u32,
    pub solo_victories: u32,
    pub duo_victories: u32,
    pub best_robo_rumble_time: u32,
    pub best_time_as_big_brawler: u32,
    pub brawlers: Vec<BrawlerStat>,
    pub name_color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClubRole {
    NotMember,
    Member,
    President,
    Senior,
    VicePresident,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMember {
    pub icon: Icon,
    pub tag: String,
    pub name: String,
    pub trophies: u32,
    pub role: ClubRole,
    pub name_color: String,
}

/// Membership policy of a club.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClubType {
    Open,
    InviteOnly,
    Closed,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub tag: String,
    pub name: String,
    pub description: String,
    pub trophies: u32,
    pub required_trophies: u32,
    pub members: Vec<ClubMember>,
    #[serde(rename = "type")]
    pub club_type: ClubType,
    pub badge_id: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrawlerDefinition {
    pub gadgets: Vec<Gadget>,
    pub name: Value,
    pub id: u32,
    pub star_powers: Vec<StarPower>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub mode: String,
    pub id: u32,
    pub map: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    pub battle_time: String,
    pub event: EventDetails,
    pub battle: Value,
}

/// Club reference on a player ranking entry; only the name is sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RankingClub {
    Club { name: String },
    NoClub {},
}

impl RankingClub {
    pub fn name(&self) -> Option<&str> {
        match self {
            RankingClub::Club { name } => Some(name),
            RankingClub::NoClub {} => None,
        }
    }
}

impl Default for RankingClub {
    fn default() -> Self {
        RankingClub::NoClub {}
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRanking {
    #[serde(default)]
    pub club: RankingClub,
    pub trophies: u32,
    pub icon: Icon,
    pub tag: String,
    pub name: String,
    pub rank: u32,
    pub name_color: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRanking {
    pub tag: String,
    pub name: String,
    pub trophies: u32,
    pub rank: u32,
    pub member_count: u32,
    pub badge_id: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEventDetails {
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<String>>,
    pub id: u32,
    pub map: Option<Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    pub event: ScheduledEventDetails,
    pub slot_id: u32,
    pub start_time: String,
    pub end_time: String,
}

/// Opaque cursors returned with every list response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingCursors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl PagingCursors {
    /// Options requesting the page after this one, if the API sent a cursor for it.
    pub fn next_page(&self, limit: Option<u32>) -> Option<PagingOptions> {
        self.after.as_ref().map(|after| PagingOptions {
            limit,
            after: Some(after.clone()),
            before: None,
        })
    }

    /// Options requesting the page before this one, if the API sent a cursor for it.
    pub fn previous_page(&self, limit: Option<u32>) -> Option<PagingOptions> {
        self.before.as_ref().map(|before| PagingOptions {
            limit,
            after: None,
            before: Some(before.clone()),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
    pub paging: PagingCursors,
}

pub type BattleList = ItemList<Battle>;
pub type ClubMemberList = ItemList<ClubMember>;
pub type BrawlerList = ItemList<BrawlerDefinition>;
pub type PlayerRankingList = ItemList<PlayerRanking>;
pub type ClubRankingList = ItemList<ClubRanking>;
pub type BrawlerRankingList = ItemList<PlayerRanking>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvents {
    pub items: Vec<ScheduledEvent>,
}

/// Error envelope sent by the API alongside non-success statuses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientError {
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub detail: Value,
}

impl ClientError {
    /// Decodes an error response body.
    ///
    /// Only a JSON object carrying `reason` or `message` counts as an
    /// envelope; anything else (`[]`, `{}`, HTML) yields `None`.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(body).ok()?;
        let object = value.as_object()?;
        if !object.contains_key("reason") && !object.contains_key("message") {
            return None;
        }
        serde_json::from_value(value).ok()
    }
}

/// Pagination parameters forwarded verbatim as query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
}

impl PagingOptions {
    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.after.is_none() && self.before.is_none()
    }
}
