use thiserror::Error;

/// Failures the application absorbs at the controller boundary
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// Search text was empty after trimming; no request was made
    #[error("search text is empty")]
    EmptyQuery,

    /// Account lookup failed: unknown name, bad status or transport error
    #[error("account lookup failed for '{name}': {reason}")]
    LookupFailed { name: String, reason: String },

    /// Repository listing could not be retrieved
    #[error("repository listing failed for '{login}': {reason}")]
    ListFailed { login: String, reason: String },

    /// Durable storage could not be read or written
    #[error("storage unavailable: {0}")]
    PersistenceUnavailable(String),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
