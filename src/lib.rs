//! marketpulse: sector-news aggregation for stock heatmaps.
//!
//! For each market sector the pipeline fetches recent news from an upstream
//! provider, scores title sentiment, extracts related companies (dictionary
//! first, AI-classified fallback) and caches the result with a
//! market-hours-aware TTL. A bounded fan-out runs the pipeline across all
//! sectors of a market and rolls the survivors up into per-category
//! aggregates for a heatmap (cell size = news volume, cell color =
//! sentiment).
//!
//! ```no_run
//! use marketpulse::{Market, PulseClient};
//!
//! # async fn run() -> Result<(), marketpulse::PulseError> {
//! let client = PulseClient::builder()
//!     .from_env()
//!     .cache_dir("./cache")
//!     .build()?;
//!
//! let snapshot = client.build_heatmap(Market::Kr).await?;
//! for category in &snapshot.categories {
//!     println!("{}: volume {}", category.category_name, category.total_volume);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod classify;
pub mod core;
pub mod enrich;
pub mod heatmap;
pub mod provider;
pub mod sector;
pub mod tasks;

pub use cache::{CacheStats, FileCache};
pub use core::{Market, PulseClient, PulseClientBuilder, PulseError, SearchCredentials};
pub use heatmap::{CategoryAggregate, HeatmapSnapshot};
pub use sector::{Article, NewsSource, SectorResult};
pub use tasks::RefreshTask;
