mod config;

use anyhow::{Context, Result};
use chrono::Utc;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;

use jenga_rs::{Credentials, JengaClient};


#[tokio::main]
async fn main() -> Result<()> {
    // Basic logging: set RUST_LOG=info (or debug) to see output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    dotenv().ok();

    let cfg = Config::from_env();

    let creds = Credentials::from_env().context("could not load jenga credentials")?;
    let client = JengaClient::new(cfg.jenga_config(), creds)
        .await
        .context("could not initialise jenga session")?;

    let token = client.token();
    let prefix: String = token.access_token.chars().take(6).collect();
    let remaining = token.expires_in - Utc::now();
    info!(token = %prefix, expires_in_min = remaining.num_minutes(), "authenticated");
    if token.is_expired() {
        warn!("issued token is already expired; check the local clock");
    }

    let balance = client
        .get_account_balance(&cfg.country_code)
        .await
        .with_context(|| format!("could not get account balance for {}", cfg.country_code))?;

    println!("{balance}");
    for line in &balance.balances {
        println!("  {line}");
    }

    Ok(())
}
