//! Network messages - communication between App and Network layers

use crate::models::{Account, Repository};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Resolve a user name to an account
    FetchAccount {
        id: u64,
        name: String,
    },
    /// List the public repositories of an account
    FetchRepositories {
        id: u64,
        login: String,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer.
///
/// Every response carries the id of the command that produced it so the App
/// layer can drop results for selections that are no longer current.
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    AccountFetched {
        id: u64,
        account: Account,
    },
    AccountFailed {
        id: u64,
        message: String,
    },
    RepositoriesFetched {
        id: u64,
        repos: Vec<Repository>,
    },
    RepositoriesFailed {
        id: u64,
        message: String,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::AccountFetched { id, .. } => *id,
            NetworkResponse::AccountFailed { id, .. } => *id,
            NetworkResponse::RepositoriesFetched { id, .. } => *id,
            NetworkResponse::RepositoriesFailed { id, .. } => *id,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            NetworkResponse::AccountFailed { .. } | NetworkResponse::RepositoriesFailed { .. }
        )
    }
}
