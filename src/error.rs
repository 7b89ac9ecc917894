use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("{0} not found in environment variables")]
    MissingEnv(&'static str),
    #[error("Failed to connect to MongoDB: {0}")]
    Connect(#[source] mongodb::error::Error),
    #[error("Query failed: {0}")]
    Query(#[source] mongodb::error::Error),
    #[error("Delete failed: {0}")]
    Delete(#[source] mongodb::error::Error),
    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}
