use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use brawlstars::cmd::Cmd;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // RUST_LOG=brawlstars=debug shows every request
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    Cmd::parse().run().await
}
