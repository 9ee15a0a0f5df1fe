use thiserror::Error;

/// Errors a repository can report to its callers.
///
/// Only the remote path produces these; local repositories absorb every
/// storage failure.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The remote service could not be reached or timed out.
    #[error("{operation} {url} failed: {source}")]
    Transport {
        operation: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote service answered with a non-success status.
    #[error("{operation} {url} returned HTTP {status}")]
    Status {
        operation: &'static str,
        url: String,
        status: u16,
    },

    /// The remote service answered with a body that is not the expected record.
    #[error("{operation} {url} returned an undecodable body: {reason}")]
    Decode {
        operation: &'static str,
        url: String,
        reason: String,
    },

    /// The configured remote address cannot carry record paths.
    #[error("invalid remote address {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl RepositoryError {
    /// Short name of the failed operation, if the error came from one.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            RepositoryError::Transport { operation, .. }
            | RepositoryError::Status { operation, .. }
            | RepositoryError::Decode { operation, .. } => Some(*operation),
            RepositoryError::InvalidUrl { .. } | RepositoryError::Client(_) => None,
        }
    }
}
