// src/bin/photo_search.rs
// DOCUMENTATION: Command-line smoke test for the gateway
// PURPOSE: Run one photo search with settings from .env and print the envelope
//
// Usage: photo_search <query> [page]

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use std::env;
use unsplash_gateway::{ClientConfig, PhotoSearch, SearchGateway};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    if env::var("RUST_LOG").is_err() {
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    let mut args = env::args().skip(1);
    let query = match args.next() {
        Some(q) => q,
        None => bail!("usage: photo_search <query> [page]"),
    };
    let page: u32 = match args.next() {
        Some(p) => p.parse().context("page must be a positive integer")?,
        None => 1,
    };

    let config = ClientConfig::from_env();
    config.validate()?;
    log::info!("Searching Unsplash for {:?} (page {})", query, page);

    let gateway = SearchGateway::new(config);
    let envelope = gateway
        .search(PhotoSearch::new(query).page(page))
        .await
        .into_result()
        .context("photo search failed")?;

    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
