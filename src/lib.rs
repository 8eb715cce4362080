//! # pokeapi-client - A typed client for the read-only PokéAPI
//!
//! Per-category clients fetch PokéAPI resources by name or numeric id, or list
//! them a page at a time, and decode the JSON into typed structs. Every client
//! carries its own response cache and its own logger, and every failure comes
//! back as one variant of [`Error`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use pokeapi_client::{BerryClient, CacheOptions, ClientArgs, Pagination};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pokeapi_client::Error> {
//!     // Keep responses for five minutes
//!     let client = BerryClient::new(
//!         ClientArgs::default()
//!             .with_cache(CacheOptions::default().with_ttl(Duration::from_secs(300))),
//!     )?;
//!
//!     let cheri = client.get_berry_by_name("cheri").await?;
//!     println!("{} grows in {} hours", cheri.name, cheri.growth_time);
//!
//!     // Same entity, now served from the cache
//!     let same = client.get_berry_by_name("cheri").await?;
//!     assert_eq!(cheri, same);
//!
//!     let page = client.list_berries(Some(Pagination::new().with_limit(5))).await?;
//!     for berry in &page.results {
//!         println!("{}", berry.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typed resources** - every response decodes into a concrete struct; shape mismatches are errors
//! - **Uniform contract** - `get_<kind>_by_name`, `get_<kind>_by_id` and `list_<kinds>` for every kind
//! - **Local validation** - non-positive ids and non-slug names fail before any request
//! - **TTL response cache** - keyed by method and full URL, disabled unless a TTL is set
//! - **Structured logging** - request, response, cache-hit and error events through `tracing`
//! - **Per-client state** - no global client; cache and logger belong to one instance
//!
//! ## Error Handling
//!
//! ```no_run
//! use pokeapi_client::{ClientArgs, Error, ItemClient};
//!
//! # async fn example() -> Result<(), Error> {
//! let client = ItemClient::new(ClientArgs::default())?;
//!
//! match client.get_item_by_id(-1).await {
//!     Ok(item) => println!("{}", item.name),
//!     Err(Error::InvalidArgument(reason)) => eprintln!("rejected locally: {}", reason),
//!     Err(Error::NotFound { url }) => eprintln!("no such item: {}", url),
//!     Err(e) if e.is_timeout() => eprintln!("PokéAPI too slow"),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

mod base;
pub mod cache;
mod clients;
pub mod config;
pub mod constants;
mod error;
pub mod interceptors;
mod logger;
pub mod models;
mod resource;
mod response;
mod transport;

pub use base::BaseClient;
pub use clients::{BerryClient, ItemClient};
pub use config::{CacheOptions, ClientArgs, ClientConfig, LogOptions};
pub use error::{Error, Result};
pub use logger::Logger;
pub use resource::{Pagination, Resource, DEFAULT_PAGE_SIZE};
pub use response::RawResponse;
