//! Async read-only client for the poe.watch price-tracking API.
//!
//! [`PoeWatch`] caches three reference datasets (categories, leagues and the
//! item catalog) after fetching them, answers lookups from the cache and
//! fetches per-item price details on demand. Every outbound call passes
//! through a shared [`RequestLimiter`] so the remote API's limits are never
//! exceeded.
//!
//! ```no_run
//! use poe_watch::{ItemQuery, Options, PoeWatch};
//!
//! # async fn run() -> poe_watch::Result<()> {
//! let watch = PoeWatch::new(Options::default());
//! watch.wait_ready().await;
//!
//! let query = ItemQuery {
//!     name: Some("Exalted Orb".to_string()),
//!     ..Default::default()
//! };
//! let item = watch.request_item(&query).await?;
//! for price in item.price_data() {
//!     println!("{}: {} chaos", price.league.name, price.mean);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod limiter;
pub mod models;
pub mod query;

pub use client::{Options, PoeWatch, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use limiter::RequestLimiter;
pub use models::{
    Category, CategoryGroup, History, HistoryEntry, Item, ItemData, League, LeagueDuration,
    PriceData, SparklineField, RELIC_FRAME,
};
pub use query::{ItemQuery, LeagueQuery};
