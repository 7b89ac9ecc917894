use async_trait::async_trait;
use bson::doc;
use futures::TryStreamExt;
use mongodb::Collection;
use tracing::debug;

use crate::error::CleanupError;
use crate::modules::history::model::HistoryEntry;
use crate::modules::history::schema::SinceFilter;

/// Read/delete access to the listening history.
#[async_trait]
pub trait HistoryStore {
    /// Entries matching `filter`, oldest first.
    async fn find_since(&self, filter: &SinceFilter) -> Result<Vec<HistoryEntry>, CleanupError>;

    /// Removes every entry matching `filter` and returns how many went.
    async fn delete_since(&self, filter: &SinceFilter) -> Result<u64, CleanupError>;
}

pub struct HistoryCrud {
    collection: Collection<HistoryEntry>,
}

impl HistoryCrud {
    pub fn new(collection: Collection<HistoryEntry>) -> Self {
        Self { collection }
    }

    pub async fn count_since(&self, filter: &SinceFilter) -> Result<u64, CleanupError> {
        self.collection
            .count_documents(filter.to_document())
            .await
            .map_err(CleanupError::Query)
    }
}

#[async_trait]
impl HistoryStore for HistoryCrud {
    async fn find_since(&self, filter: &SinceFilter) -> Result<Vec<HistoryEntry>, CleanupError> {
        debug!(boundary = %filter.boundary(), "querying history");

        let cursor = self
            .collection
            .find(filter.to_document())
            .sort(doc! { "timestamp": 1 })
            .await
            .map_err(CleanupError::Query)?;

        cursor.try_collect().await.map_err(CleanupError::Query)
    }

    async fn delete_since(&self, filter: &SinceFilter) -> Result<u64, CleanupError> {
        debug!(boundary = %filter.boundary(), "deleting history");

        let result = self
            .collection
            .delete_many(filter.to_document())
            .await
            .map_err(CleanupError::Delete)?;

        Ok(result.deleted_count)
    }
}
