use serde::{Deserialize, Serialize};

use crate::core::Market;
use crate::sector::SectorResult;

/// One category's roll-up of its member sectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category_id: String,
    pub category_name: String,
    /// Member sectors, in completion-processing order.
    pub sectors: Vec<SectorResult>,
    /// Sum of member news volumes.
    pub total_volume: f64,
    /// Mean of member change rates, rounded to 2 decimals.
    pub avg_change_rate: f64,
}

/// The full per-request heatmap aggregate for one market.
///
/// Constructed fresh on every request and never persisted; only its
/// constituent sector results are cached. Category order is first-seen
/// during aggregation and therefore not stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapSnapshot {
    pub market: Market,
    /// Generation time, market-local format.
    pub updated_at: String,
    pub categories: Vec<CategoryAggregate>,
}
