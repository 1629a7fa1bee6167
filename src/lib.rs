//! Typed async client for the Brawl Stars REST API.
//!
//! ```rust,ignore
//! use brawlstars::{BrawlStarsClient, Client};
//!
//! let client = BrawlStarsClient::new(&api_key)?;
//! let player = client.get_player("#YVCQLJ").await?;
//! println!("{} has {} trophies", player.name, player.trophies);
//! ```

pub mod api_client;
pub mod client;
pub mod cmd;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod interactive;
pub mod types;

pub use api_client::BrawlStarsClient;
pub use client::Client;
pub use config::Config;
pub use error::{ApiError, Error};
pub use types::*;
