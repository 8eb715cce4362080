//! Looks a berry up by name and by id, lists a page, and shows the cache at work.
//!
//! Run with: `cargo run --example berry_lookup`

use pokeapi_client::constants::{berries, item_fling_effects};
use pokeapi_client::{BerryClient, CacheOptions, ClientArgs, Error, ItemClient, Pagination};
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("pokeapi_client=debug,berry_lookup=info")
        .init();

    let args = ClientArgs::default()
        .with_timeout(Duration::from_secs(10))
        .with_cache(CacheOptions::default().with_ttl(Duration::from_secs(60)));

    let berries_client = BerryClient::new(args.clone())?;

    println!("=== Lookup by name and by id ===");
    let cheri = berries_client.get_berry_by_name("cheri").await?;
    println!("{} has id {} (expected {})", cheri.name, cheri.id, berries::CHERI);

    let again = berries_client.get_berry_by_id(berries::CHERI).await?;
    println!("id {} is {}", again.id, again.name);
    println!();

    println!("=== Cache ===");
    let start = Instant::now();
    berries_client.get_berry_by_name("cheri").await?;
    println!("Second lookup took {:?}", start.elapsed());
    println!("Cached entries: {}", berries_client.base().cache().len());
    println!();

    println!("=== Listing ===");
    let page = berries_client
        .list_berries(Some(Pagination::new().with_limit(5)))
        .await?;
    println!("{} berries in total, first page:", page.count);
    for berry in &page.results {
        println!("  {}", berry.name);
    }
    println!();

    println!("=== Errors ===");
    match berries_client.get_berry_by_id(-1).await {
        Err(Error::InvalidArgument(reason)) => println!("Rejected locally: {}", reason),
        other => println!("Unexpected: {:?}", other),
    }
    match berries_client.get_berry_by_name("nonexistentberry").await {
        Err(Error::NotFound { url }) => println!("Not found: {}", url),
        other => println!("Unexpected: {:?}", other),
    }
    println!();

    let items = ItemClient::new(args)?;
    let flinch = items
        .get_item_fling_effect_by_id(item_fling_effects::FLINCH)
        .await?;
    println!("Fling effect {} is {}", flinch.id, flinch.name);

    Ok(())
}
