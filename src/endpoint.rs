//! Request paths for every API endpoint.

use std::fmt;

/// Encodes a player or club tag for use in a path segment.
///
/// The API expects the `#` itself percent-encoded ahead of the tag, so a
/// leading `#` is stripped, the rest encoded, and `%23` prepended.
/// `"#ABC123"` and `"ABC123"` both become `"%23ABC123"`.
///
/// Unlike JavaScript's `encodeURIComponent`, `!'()*` are escaped too; real
/// tags only use `0-9A-Z`, so the paths sent are the same.
pub fn encode_tag(tag: &str) -> String {
    let bare = tag.strip_prefix('#').unwrap_or(tag);
    format!("%23{}", urlencoding::encode(bare))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Player { tag: &'a str },
    PlayerBattleLog { tag: &'a str },
    Club { tag: &'a str },
    ClubMembers { tag: &'a str },
    Brawlers,
    Brawler { id: u32 },
    PlayerRankings { country_code: &'a str },
    ClubRankings { country_code: &'a str },
    BrawlerRankings { country_code: &'a str, id: u32 },
    EventRotation,
}

impl Endpoint<'_> {
    pub fn path(&self) -> String {
        match *self {
            Endpoint::Player { tag } => format!("/players/{}", encode_tag(tag)),
            Endpoint::PlayerBattleLog { tag } => {
                format!("/players/{}/battlelog", encode_tag(tag))
            }
            Endpoint::Club { tag } => format!("/clubs/{}", encode_tag(tag)),
            Endpoint::ClubMembers { tag } => format!("/clubs/{}/members", encode_tag(tag)),
            Endpoint::Brawlers => "/brawlers".into(),
            Endpoint::Brawler { id } => format!("/brawlers/{id}"),
            Endpoint::PlayerRankings { country_code } => {
                format!("/rankings/{country_code}/players")
            }
            Endpoint::ClubRankings { country_code } => format!("/rankings/{country_code}/clubs"),
            Endpoint::BrawlerRankings { country_code, id } => {
                format!("/rankings/{country_code}/brawlers/{id}")
            }
            Endpoint::EventRotation => "/events/rotation".into(),
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
