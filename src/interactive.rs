//! Prompt-driven console for calling endpoints by hand.

use std::fmt;

use inquire::validator::Validation;
use inquire::{Confirm, CustomType, InquireError, Select, Text};
use tracing::debug;

use crate::client::Client;
use crate::cmd::{describe_error, Call, PagingArgs};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    GetPlayer,
    GetPlayerBattleLog,
    GetClub,
    GetClubMembers,
    GetBrawlers,
    GetBrawler,
    GetPlayerRankings,
    GetClubRankings,
    GetBrawlerRankings,
    GetEventRotation,
    Exit,
}

impl Action {
    const ALL: [Action; 11] = [
        Action::GetPlayer,
        Action::GetPlayerBattleLog,
        Action::GetClub,
        Action::GetClubMembers,
        Action::GetBrawlers,
        Action::GetBrawler,
        Action::GetPlayerRankings,
        Action::GetClubRankings,
        Action::GetBrawlerRankings,
        Action::GetEventRotation,
        Action::Exit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::GetPlayer => "getPlayer",
            Action::GetPlayerBattleLog => "getPlayerBattleLog",
            Action::GetClub => "getClub",
            Action::GetClubMembers => "getClubMembers",
            Action::GetBrawlers => "getBrawlers",
            Action::GetBrawler => "getBrawler",
            Action::GetPlayerRankings => "getPlayerRankings",
            Action::GetClubRankings => "getClubRankings",
            Action::GetBrawlerRankings => "getBrawlerRankings",
            Action::GetEventRotation => "getEventRotation",
            Action::Exit => "Exit",
        })
    }
}

const PLAYER_TAG_PROMPT: &str = "Enter Player Tag (e.g., #YVCQLJ):";
const CLUB_TAG_PROMPT: &str = "Enter Club Tag (e.g., #2V0G8P):";
const BRAWLER_ID_PROMPT: &str = "Enter Brawler ID (e.g., 16000000):";
const COUNTRY_PROMPT: &str = "Enter Country Code (e.g., FI) or 'global':";

/// Blank input means "not set"; anything else must be a number.
fn parse_limit(input: &str) -> Result<Option<u32>, std::num::ParseIntError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        trimmed.parse().map(Some)
    }
}

fn non_empty(input: String) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn prompt_paging() -> Result<PagingArgs, InquireError> {
    let use_paging = Confirm::new("Add paging options (limit, after, before)?")
        .with_default(false)
        .prompt()?;
    if !use_paging {
        return Ok(PagingArgs::default());
    }

    let limit = Text::new("Limit (optional, press Enter to skip):")
        .with_validator(|input: &str| {
            Ok(match parse_limit(input) {
                Ok(_) => Validation::Valid,
                Err(_) => {
                    Validation::Invalid("Please enter a valid number or leave blank.".into())
                }
            })
        })
        .prompt()?;
    let after = Text::new("After marker (optional, press Enter to skip):").prompt()?;
    let before = Text::new("Before marker (optional, press Enter to skip):").prompt()?;

    Ok(PagingArgs {
        // validated above
        limit: parse_limit(&limit).ok().flatten(),
        after: non_empty(after),
        before: non_empty(before),
    })
}

fn prompt_text(message: &str) -> Result<String, InquireError> {
    Text::new(message).prompt().map(|s| s.trim().to_owned())
}

fn prompt_brawler_id() -> Result<u32, InquireError> {
    CustomType::<u32>::new(BRAWLER_ID_PROMPT)
        .with_error_message("Please enter a numeric brawler ID.")
        .prompt()
}

fn prompt_call(action: Action) -> Result<Option<Call>, InquireError> {
    let call = match action {
        Action::GetPlayer => Call::Player {
            tag: prompt_text(PLAYER_TAG_PROMPT)?,
        },
        Action::GetPlayerBattleLog => Call::BattleLog {
            tag: prompt_text(PLAYER_TAG_PROMPT)?,
        },
        Action::GetClub => Call::Club {
            tag: prompt_text(CLUB_TAG_PROMPT)?,
        },
        Action::GetClubMembers => Call::ClubMembers {
            tag: prompt_text(CLUB_TAG_PROMPT)?,
            paging: prompt_paging()?,
        },
        Action::GetBrawlers => Call::Brawlers {
            paging: prompt_paging()?,
        },
        Action::GetBrawler => Call::Brawler {
            id: prompt_brawler_id()?,
        },
        Action::GetPlayerRankings => Call::PlayerRankings {
            country_code: prompt_text(COUNTRY_PROMPT)?,
            paging: prompt_paging()?,
        },
        Action::GetClubRankings => Call::ClubRankings {
            country_code: prompt_text(COUNTRY_PROMPT)?,
            paging: prompt_paging()?,
        },
        Action::GetBrawlerRankings => Call::BrawlerRankings {
            country_code: prompt_text(COUNTRY_PROMPT)?,
            id: prompt_brawler_id()?,
            paging: prompt_paging()?,
        },
        Action::GetEventRotation => Call::EventRotation,
        Action::Exit => return Ok(None),
    };
    Ok(Some(call))
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

pub async fn run<C: Client + ?Sized>(client: &C) -> anyhow::Result<()> {
    println!("Brawl Stars API Interactive Test CLI");
    println!("====================================");

    loop {
        let action = match Select::new("Choose an API function to test:", Action::ALL.to_vec())
            .prompt()
        {
            Ok(action) => action,
            Err(e) if is_cancel(&e) => Action::Exit,
            Err(e) => return Err(e.into()),
        };

        let call = match prompt_call(action) {
            Ok(Some(call)) => call,
            Ok(None) => {
                println!("Exiting CLI.");
                return Ok(());
            }
            // escape while entering parameters goes back to the menu
            Err(e) if is_cancel(&e) => continue,
            Err(e) => return Err(e.into()),
        };

        debug!(?call, "running interactive command");
        match call.execute(client).await {
            Ok(value) => {
                println!("\n--- Result ---");
                println!("{}", serde_json::to_string_pretty(&value)?);
                println!("--------------\n");
            }
            Err(e) => {
                eprintln!("\n--- Error ---");
                eprintln!("{}", describe_error(&e));
                eprintln!("-------------\n");
            }
        }

        if let Err(e) = Text::new("Press Enter to continue...").prompt() {
            if !is_cancel(&e) {
                return Err(e.into());
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_menu_lists_every_endpoint_then_exit() {
        let labels: Vec<String> = Action::ALL.iter().map(|a| a.to_string()).collect();
        assert_eq!(labels.len(), 11);
        assert_eq!(labels.first().map(String::as_str), Some("getPlayer"));
        assert_eq!(labels.last().map(String::as_str), Some("Exit"));
        assert!(labels.contains(&"getBrawlerRankings".to_string()));
    }

    #[test]
    fn test_exit_builds_no_call() {
        assert!(matches!(prompt_call(Action::Exit), Ok(None)));
        assert!(matches!(
            prompt_call(Action::GetEventRotation),
            Ok(Some(Call::EventRotation))
        ));
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(""), Ok(None));
        assert_eq!(parse_limit("   "), Ok(None));
        assert_eq!(parse_limit(" 25 "), Ok(Some(25)));
        assert!(parse_limit("ten").is_err());
    }

    #[test]
    fn test_non_empty_markers() {
        assert_eq!(non_empty("  ".into()), None);
        assert_eq!(non_empty(" abc ".into()), Some("abc".into()));
    }
}
