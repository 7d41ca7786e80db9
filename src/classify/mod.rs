//! Classification delegate: one batched external-text-service call per
//! sector judging relevance, extracting companies and summarizing.
//!
//! The single most important failure-isolation contract in the crate lives
//! here: the verdict list is always exactly as long as the input list, and
//! every failure mode collapses to neutral defaults instead of an error.

mod api;
mod model;
mod wire;

pub use api::{classify_batch, sector_briefing};
pub use model::{ArticleText, Verdict};
