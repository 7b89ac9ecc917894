use bson::{doc, Document};
use chrono::{DateTime, Utc};
use std::fmt;

use crate::modules::history::model::HistoryEntry;

const UNKNOWN: &str = "Unknown";

/// The "played at or after `boundary`" predicate. Listing and deleting both
/// take the same value so they can never disagree on the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinceFilter {
    boundary: DateTime<Utc>,
}

impl SinceFilter {
    pub fn new(boundary: DateTime<Utc>) -> Self {
        Self { boundary }
    }

    pub fn boundary(&self) -> DateTime<Utc> {
        self.boundary
    }

    pub fn to_document(&self) -> Document {
        doc! { "timestamp": { "$gte": bson::DateTime::from_chrono(self.boundary) } }
    }

    /// In-memory evaluation of [`Self::to_document`]. Entries without a
    /// timestamp never match, as with `$gte` on a missing field.
    pub fn matches(&self, entry: &HistoryEntry) -> bool {
        entry
            .timestamp
            .map(|t| t >= bson::DateTime::from_chrono(self.boundary))
            .unwrap_or(false)
    }
}

/// Display row for one matched entry.
pub struct EntryListing<'a> {
    pub index: usize,
    pub entry: &'a HistoryEntry,
}

impl fmt::Display for EntryListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = self.entry;
        let track = e.track_name.as_deref().unwrap_or(UNKNOWN);
        let artist = e.artist_name.as_deref().unwrap_or(UNKNOWN);
        let timestamp = e.timestamp_rfc3339().unwrap_or_else(|| UNKNOWN.to_string());
        let id = e.id.as_deref().unwrap_or(UNKNOWN);
        let mongo_id = e.mongo_id.map(|o| o.to_hex()).unwrap_or_else(|| UNKNOWN.to_string());

        writeln!(f, "{}. {} - {}", self.index, track, artist)?;
        writeln!(f, "   Timestamp: {}", timestamp)?;
        writeln!(f, "   ID: {}", id)?;
        write!(f, "   MongoDB _id: {}", mongo_id)
    }
}
