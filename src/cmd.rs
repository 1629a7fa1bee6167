use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use crate::api_client::BrawlStarsClient;
use crate::client::Client;
use crate::error::Error;
use crate::interactive;
use crate::types::PagingOptions;

/// Call Brawl Stars API endpoints and print the JSON result.
///
/// Reads BRAWL_STARS_API_KEY (and optionally BRAWL_STARS_BASE_URL) from the
/// environment or a .env file.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "brawlstars", version)]
pub enum Cmd {
    #[command(flatten)]
    Call(Call),
    /// Pick endpoints and enter parameters from a prompt
    Interactive,
}

/// One API call with its parameters.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// Player profile by tag, e.g. '#YVCQLJ'
    Player { tag: String },
    /// Recent battles of a player
    BattleLog { tag: String },
    /// Club by tag, e.g. '#2V0G8P'
    Club { tag: String },
    ClubMembers {
        tag: String,
        #[command(flatten)]
        paging: PagingArgs,
    },
    /// All brawlers
    Brawlers {
        #[command(flatten)]
        paging: PagingArgs,
    },
    Brawler { id: u32 },
    /// Player rankings for a country code or 'global'
    PlayerRankings {
        country_code: String,
        #[command(flatten)]
        paging: PagingArgs,
    },
    /// Club rankings for a country code or 'global'
    ClubRankings {
        country_code: String,
        #[command(flatten)]
        paging: PagingArgs,
    },
    /// Rankings of one brawler for a country code or 'global'
    BrawlerRankings {
        country_code: String,
        id: u32,
        #[command(flatten)]
        paging: PagingArgs,
    },
    /// Current event rotation
    EventRotation,
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct PagingArgs {
    /// Maximum number of items to return
    #[arg(long)]
    pub limit: Option<u32>,
    /// Return items after this marker
    #[arg(long)]
    pub after: Option<String>,
    /// Return items before this marker
    #[arg(long)]
    pub before: Option<String>,
}

impl PagingArgs {
    /// `None` when no flag was given, so no query string is sent at all.
    pub fn to_options(&self) -> Option<PagingOptions> {
        let options = PagingOptions {
            limit: self.limit,
            after: self.after.clone(),
            before: self.before.clone(),
        };
        (!options.is_empty()).then_some(options)
    }
}

fn to_value<T: Serialize>(payload: T) -> Result<Value, Error> {
    serde_json::to_value(payload).map_err(|e| crate::error::JSONError::new("<output>", e).into())
}

impl Call {
    /// Performs the single API call this command stands for.
    pub async fn execute<C: Client + ?Sized>(&self, client: &C) -> Result<Value, Error> {
        match self {
            Call::Player { tag } => to_value(client.get_player(tag).await?),
            Call::BattleLog { tag } => to_value(client.get_player_battle_log(tag).await?),
            Call::Club { tag } => to_value(client.get_club(tag).await?),
            Call::ClubMembers { tag, paging } => to_value(
                client
                    .get_club_members(tag, paging.to_options().as_ref())
                    .await?,
            ),
            Call::Brawlers { paging } => {
                to_value(client.get_brawlers(paging.to_options().as_ref()).await?)
            }
            Call::Brawler { id } => to_value(client.get_brawler(*id).await?),
            Call::PlayerRankings {
                country_code,
                paging,
            } => to_value(
                client
                    .get_player_rankings(country_code, paging.to_options().as_ref())
                    .await?,
            ),
            Call::ClubRankings {
                country_code,
                paging,
            } => to_value(
                client
                    .get_club_rankings(country_code, paging.to_options().as_ref())
                    .await?,
            ),
            Call::BrawlerRankings {
                country_code,
                id,
                paging,
            } => to_value(
                client
                    .get_brawler_rankings(country_code, *id, paging.to_options().as_ref())
                    .await?,
            ),
            Call::EventRotation => to_value(client.get_event_rotation().await?),
        }
    }
}

impl Cmd {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = BrawlStarsClient::from_env()?;

        let call = match self {
            Cmd::Interactive => return interactive::run(&client).await,
            Cmd::Call(call) => call,
        };

        match call.execute(&client).await {
            Ok(value) => {
                println!("{}", serde_json::to_string_pretty(&value)?);
                Ok(())
            }
            Err(e) => Err(anyhow::anyhow!(describe_error(&e))),
        }
    }
}

/// Renders an error the way both the one-shot and interactive modes print it.
pub fn describe_error(err: &Error) -> String {
    match err.api_error() {
        Some(api_error) => {
            let status = api_error
                .status_code()
                .map(|s| s.as_u16().to_string())
                .unwrap_or_else(|| "N/A".into());
            let mut out = format!("API Error ({status}): {}", api_error.message());
            if let Some(data) = api_error.error_data() {
                if let Ok(details) = serde_json::to_string_pretty(data) {
                    out.push_str("\nDetails: ");
                    out.push_str(&details);
                }
            }
            out
        }
        None => format!("Error: {err}"),
    }
}

#[cfg(test)]
mod test {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::error::ApiError;
    use crate::types::*;

    /// Records which endpoint was called and with what arguments.
    #[derive(Default)]
    struct RecordingClient {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingClient {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn empty_list<T>() -> ItemList<T> {
        ItemList {
            items: vec![],
            paging: PagingCursors::default(),
        }
    }

    #[async_trait]
    impl Client for RecordingClient {
        async fn get_player(&self, tag: &str) -> Result<Player, Error> {
            self.record(format!("player {tag}"));
            Err(ApiError::from_status(StatusCode::NOT_FOUND, None).into())
        }
        async fn get_player_battle_log(&self, tag: &str) -> Result<BattleList, Error> {
            self.record(format!("battlelog {tag}"));
            Ok(empty_list())
        }
        async fn get_club(&self, tag: &str) -> Result<Club, Error> {
            self.record(format!("club {tag}"));
            Ok(Club {
                tag: tag.into(),
                name: "Brawlers".into(),
                description: String::new(),
                trophies: 0,
                required_trophies: 0,
                members: vec![],
                club_type: ClubType::Closed,
                badge_id: 8000000,
            })
        }
        async fn get_club_members(
            &self,
            tag: &str,
            paging: Option<&PagingOptions>,
        ) -> Result<ClubMemberList, Error> {
            self.record(format!("members {tag} {paging:?}"));
            Ok(empty_list())
        }
        async fn get_brawlers(&self, paging: Option<&PagingOptions>) -> Result<BrawlerList, Error> {
            self.record(format!("brawlers {paging:?}"));
            Ok(empty_list())
        }
        async fn get_brawler(&self, id: u32) -> Result<BrawlerDefinition, Error> {
            self.record(format!("brawler {id}"));
            Ok(BrawlerDefinition {
                gadgets: vec![],
                name: json!("SHELLY"),
                id,
                star_powers: vec![],
            })
        }
        async fn get_player_rankings(
            &self,
            country_code: &str,
            paging: Option<&PagingOptions>,
        ) -> Result<PlayerRankingList, Error> {
            self.record(format!("player-rankings {country_code} {paging:?}"));
            Ok(empty_list())
        }
        async fn get_club_rankings(
            &self,
            country_code: &str,
            paging: Option<&PagingOptions>,
        ) -> Result<ClubRankingList, Error> {
            self.record(format!("club-rankings {country_code} {paging:?}"));
            Ok(empty_list())
        }
        async fn get_brawler_rankings(
            &self,
            country_code: &str,
            id: u32,
            paging: Option<&PagingOptions>,
        ) -> Result<BrawlerRankingList, Error> {
            self.record(format!("brawler-rankings {country_code} {id} {paging:?}"));
            Ok(empty_list())
        }
        async fn get_event_rotation(&self) -> Result<ScheduledEvents, Error> {
            self.record("rotation".into());
            Ok(ScheduledEvents { items: vec![] })
        }
    }

    #[test]
    fn test_parse_subcommands() {
        assert_eq!(
            Cmd::try_parse_from(["brawlstars", "player", "#ABC123"]).unwrap(),
            Cmd::Call(Call::Player {
                tag: "#ABC123".into()
            })
        );
        assert_eq!(
            Cmd::try_parse_from([
                "brawlstars",
                "brawler-rankings",
                "global",
                "16000000",
                "--limit",
                "5"
            ])
            .unwrap(),
            Cmd::Call(Call::BrawlerRankings {
                country_code: "global".into(),
                id: 16000000,
                paging: PagingArgs {
                    limit: Some(5),
                    ..Default::default()
                },
            })
        );
        assert_eq!(
            Cmd::try_parse_from(["brawlstars", "event-rotation"]).unwrap(),
            Cmd::Call(Call::EventRotation)
        );
        assert_eq!(
            Cmd::try_parse_from(["brawlstars", "interactive"]).unwrap(),
            Cmd::Interactive
        );
        assert!(Cmd::try_parse_from(["brawlstars", "brawler", "not-a-number"]).is_err());
    }

    #[test]
    fn test_paging_args_without_flags_is_none() {
        assert_eq!(PagingArgs::default().to_options(), None);
        assert_eq!(
            PagingArgs {
                after: Some("abc".into()),
                ..Default::default()
            }
            .to_options(),
            Some(PagingOptions {
                limit: None,
                after: Some("abc".into()),
                before: None,
            })
        );
    }

    #[tokio::test]
    async fn test_execute_dispatches_to_matching_endpoint() {
        let client = RecordingClient::default();

        let value = Call::Club {
            tag: "#2V0G8P".into(),
        }
        .execute(&client)
        .await
        .unwrap();
        assert_eq!(value["type"], json!("closed"));
        assert_eq!(value["tag"], json!("#2V0G8P"));

        Call::ClubMembers {
            tag: "#2V0G8P".into(),
            paging: PagingArgs::default(),
        }
        .execute(&client)
        .await
        .unwrap();

        let value = Call::Brawlers {
            paging: PagingArgs {
                limit: Some(3),
                ..Default::default()
            },
        }
        .execute(&client)
        .await
        .unwrap();
        assert_eq!(value, json!({"items": [], "paging": {}}));

        Call::ClubRankings {
            country_code: "FI".into(),
            paging: PagingArgs::default(),
        }
        .execute(&client)
        .await
        .unwrap();

        assert_eq!(
            client.calls(),
            vec![
                "club #2V0G8P".to_string(),
                "members #2V0G8P None".to_string(),
                "brawlers Some(PagingOptions { limit: Some(3), after: None, before: None })"
                    .to_string(),
                "club-rankings FI None".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_execute_propagates_errors() {
        let client = RecordingClient::default();
        let err = Call::Player {
            tag: "#NOPE".into(),
        }
        .execute(&client)
        .await
        .unwrap_err();

        assert_eq!(
            describe_error(&err),
            "API Error (404): Request failed with status code 404"
        );
    }

    #[test]
    fn test_describe_error_includes_details() {
        let data = ClientError {
            reason: "accessDenied".into(),
            message: "Invalid authorization".into(),
            error_type: String::new(),
            detail: json!({}),
        };
        let err: Error = ApiError::from_status(StatusCode::FORBIDDEN, Some(data)).into();
        let described = describe_error(&err);

        assert!(described.starts_with("API Error (403): Invalid authorization\nDetails: "));
        assert!(described.contains("\"reason\": \"accessDenied\""));

        let err: Error = ApiError::new("connection refused", None, None).into();
        assert_eq!(describe_error(&err), "API Error (N/A): connection refused");

        assert_eq!(
            describe_error(&Error::MissingApiKey),
            "Error: API key is required to interact with the Brawl Stars API"
        );
    }
}
