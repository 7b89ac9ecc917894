use std::env;

use crate::error::CleanupError;

pub const DEFAULT_DATABASE: &str = "personal_data";
pub const DEFAULT_COLLECTION: &str = "listening_history";

/// Connection settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mongodb_uri: String,
    pub database: String,
    pub collection: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, CleanupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CleanupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mongodb_uri = get("MONGODB_URI").ok_or(CleanupError::MissingEnv("MONGODB_URI"))?;
        let database = get("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let collection = get("MONGODB_COLLECTION").unwrap_or_else(|| DEFAULT_COLLECTION.to_string());

        Ok(Self {
            mongodb_uri,
            database,
            collection,
        })
    }
}
