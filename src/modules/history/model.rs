use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// One played track as written by the ingestion scripts. Every field is
/// optional on read so partially imported rows still list and delete.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct HistoryEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub mongo_id: Option<ObjectId>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<bson::DateTime>,
    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub artist_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

impl HistoryEntry {
    pub fn new(
        id: impl Into<String>,
        track_name: impl Into<String>,
        artist_name: impl Into<String>,
        timestamp: bson::DateTime,
    ) -> Self {
        Self {
            id: Some(id.into()),
            timestamp: Some(timestamp),
            track_name: Some(track_name.into()),
            artist_name: Some(artist_name.into()),
            ..Default::default()
        }
    }

    pub fn timestamp_rfc3339(&self) -> Option<String> {
        self.timestamp.and_then(|t| t.try_to_rfc3339_string().ok())
    }
}
