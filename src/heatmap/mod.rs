//! Fan-out aggregator: run the sector fetch pipeline across all sectors of
//! a market with bounded concurrency, tolerate partial failure, and roll the
//! survivors up into category aggregates.

mod model;

pub use model::{CategoryAggregate, HeatmapSnapshot};

use chrono::Utc;
use futures::StreamExt;
use tracing::warn;

use crate::cache::session;
use crate::core::{Market, PulseClient, PulseError};
use crate::enrich::round2;
use crate::sector::{self, SectorResult, meta};

/// Fetch every sector of `market` concurrently (bounded by the client's
/// fan-out limit) and return the survivors. A failed sector is dropped, not
/// retried; a slow sector never cancels its siblings: all invocations
/// settle before this returns.
pub async fn fetch_all_sectors(
    client: &PulseClient,
    market: Market,
    page_size: u32,
) -> Vec<SectorResult> {
    // build the futures up front so the stream owns them; a lazily mapped
    // stream is not spawn-safe
    let fetches: Vec<_> = meta::sector_ids(market)
        .into_iter()
        .map(|id| sector::fetch_sector(client, id, page_size, 1))
        .collect();
    let results: Vec<Result<SectorResult, PulseError>> = futures::stream::iter(fetches)
        .buffer_unordered(client.fanout_limit())
        .collect()
        .await;

    results
        .into_iter()
        .filter_map(|result| match result {
            Ok(sector) => Some(sector),
            Err(e) => {
                warn!(market = %market, error = %e, "sector dropped from heatmap");
                None
            }
        })
        .collect()
}

/// Build a full heatmap snapshot for one market.
///
/// # Errors
///
/// Returns [`PulseError::NoData`] when every sector fetch failed.
pub async fn build_snapshot(
    client: &PulseClient,
    market: Market,
) -> Result<HeatmapSnapshot, PulseError> {
    let sectors = fetch_all_sectors(client, market, client.page_size()).await;
    aggregate(market, sectors)
}

/// Group sector results into category aggregates, categories ordered by
/// first appearance.
///
/// # Errors
///
/// Returns [`PulseError::NoData`] when `sectors` is empty.
pub fn aggregate(
    market: Market,
    sectors: Vec<SectorResult>,
) -> Result<HeatmapSnapshot, PulseError> {
    if sectors.is_empty() {
        return Err(PulseError::NoData);
    }

    let mut categories: Vec<CategoryAggregate> = Vec::new();
    for sector in sectors {
        match categories
            .iter_mut()
            .find(|c| c.category_id == sector.category_id)
        {
            Some(category) => category.sectors.push(sector),
            None => categories.push(CategoryAggregate {
                category_id: sector.category_id.clone(),
                category_name: sector.category_name.clone(),
                sectors: vec![sector],
                total_volume: 0.0,
                avg_change_rate: 0.0,
            }),
        }
    }

    for category in &mut categories {
        category.total_volume = category.sectors.iter().map(|s| s.news_volume).sum();
        let sum_rate: f64 = category.sectors.iter().map(|s| s.change_rate).sum();
        category.avg_change_rate = round2(sum_rate / category.sectors.len() as f64);
    }

    Ok(HeatmapSnapshot {
        market,
        updated_at: session::local_timestamp(market, Utc::now()),
        categories,
    })
}
