//! Review-count statistics.

use serde::Serialize;

use crate::batch::{BatchQueue, Deferred};
use crate::client::AnkiClient;
use crate::error::Result;

/// Statistics operations on the asynchronous client.
///
/// Obtained via [`AnkiClient::statistics()`].
#[derive(Debug)]
pub struct StatisticsActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

/// Statistics operations queued on a batch scope.
///
/// Obtained via [`Batch::statistics()`](crate::Batch::statistics).
#[derive(Debug)]
pub struct BatchStatistics<'a> {
    pub(crate) queue: &'a BatchQueue,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CollectionStatsParams {
    pub whole_collection: bool,
}

impl StatisticsActions<'_> {
    /// Get the number of cards reviewed today.
    pub async fn cards_reviewed_today(&self) -> Result<i64> {
        self.client
            .invoke_without_params("getNumCardsReviewedToday")
            .await
    }

    /// Get review counts per day, newest first.
    ///
    /// Each entry is a `("YYYY-MM-DD", count)` pair.
    pub async fn cards_reviewed_by_day(&self) -> Result<Vec<(String, i64)>> {
        self.client
            .invoke_without_params("getNumCardsReviewedByDay")
            .await
    }

    /// Get the collection statistics report as HTML.
    pub async fn collection_stats_html(&self, whole_collection: bool) -> Result<String> {
        self.client
            .invoke(
                "getCollectionStatsHTML",
                CollectionStatsParams { whole_collection },
            )
            .await
    }
}

impl BatchStatistics<'_> {
    /// Queue a reviewed-today count.
    pub fn cards_reviewed_today(&self) -> Result<Deferred<i64>> {
        self.queue.push::<(), _>("getNumCardsReviewedToday", None)
    }

    /// Queue a per-day review count.
    pub fn cards_reviewed_by_day(&self) -> Result<Deferred<Vec<(String, i64)>>> {
        self.queue.push::<(), _>("getNumCardsReviewedByDay", None)
    }

    /// Queue a collection stats report.
    pub fn collection_stats_html(&self, whole_collection: bool) -> Result<Deferred<String>> {
        self.queue.push(
            "getCollectionStatsHTML",
            Some(CollectionStatsParams { whole_collection }),
        )
    }
}
