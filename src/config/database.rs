use mongodb::{bson::doc, Client, Collection, Database};
use tracing::{debug, info};

use crate::config::settings::Settings;
use crate::error::CleanupError;
use crate::modules::history::model::HistoryEntry;

/// An open MongoDB client scoped to one run. Call [`Connection::close`] on every
/// exit path; dropping it also releases the client's pool.
pub struct Connection {
    client: Client,
    db: Database,
    collection: String,
}

pub async fn connect(settings: &Settings) -> Result<Connection, CleanupError> {
    let client = Client::with_uri_str(&settings.mongodb_uri)
        .await
        .map_err(CleanupError::Connect)?;
    let db = client.database(&settings.database);

    // The driver connects lazily; ping so an unreachable server fails here.
    if let Err(e) = db.run_command(doc! { "ping": 1 }).await {
        client.shutdown().await;
        return Err(CleanupError::Connect(e));
    }

    info!(database = %settings.database, collection = %settings.collection, "connected to MongoDB");

    Ok(Connection {
        client,
        db,
        collection: settings.collection.clone(),
    })
}

impl Connection {
    pub fn history(&self) -> Collection<HistoryEntry> {
        self.db.collection(&self.collection)
    }

    pub async fn close(self) {
        debug!("shutting down MongoDB client");
        self.client.shutdown().await;
        println!("🔌 Disconnected from MongoDB");
    }
}
