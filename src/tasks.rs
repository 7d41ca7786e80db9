//! Background cache refresh: clear everything, then re-fetch every sector of
//! a market outside any request's lifetime.

use tokio::task::JoinHandle;
use tracing::info;

use crate::core::{Market, PulseClient};

/// Handle to an in-flight background refresh.
///
/// The refresh runs independently of the handle; dropping it does not stop
/// the work. Use [`RefreshTask::cancel`] to abort, or await
/// [`RefreshTask::join`] for the completion signal.
#[derive(Debug)]
pub struct RefreshTask {
    handle: JoinHandle<usize>,
}

impl RefreshTask {
    /// Clear the cache and re-fetch all sectors of `market` in the
    /// background. The resolved value is the number of sectors refreshed.
    #[must_use]
    pub fn spawn(client: PulseClient, market: Market) -> Self {
        let handle = tokio::spawn(async move {
            client.invalidate_all();
            let refreshed = client.fetch_all_sectors(market).await.len();
            info!(market = %market, refreshed, "background cache refresh finished");
            refreshed
        });
        Self { handle }
    }

    /// Whether the refresh has settled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Abort the refresh. In-flight sector fetches stop at their next await
    /// point; already-written cache entries stay.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Wait for completion. `None` when the task was cancelled.
    pub async fn join(self) -> Option<usize> {
        self.handle.await.ok()
    }
}
