//! Network actor - runs API calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::GitHubClient;

/// Network actor that turns commands into API calls.
///
/// Each command runs as its own task; nothing is retried or cancelled. Stale
/// results are filtered by the App layer using the response id.
pub struct NetworkActor {
    client: GitHubClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: GitHubClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchAccount { id, name }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, name = %name, "Fetching account");
                                let response = match client.fetch_account(&name).await {
                                    Ok(account) => {
                                        tracing::info!(id, login = %account.login, "Account fetched");
                                        NetworkResponse::AccountFetched { id, account }
                                    }
                                    Err(e) => {
                                        tracing::warn!(id, error = %e, "Account lookup failed");
                                        NetworkResponse::AccountFailed { id, message: e.to_string() }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::FetchRepositories { id, login }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, login = %login, "Fetching repositories");
                                let response = match client.fetch_repositories(&login).await {
                                    Ok(repos) => {
                                        tracing::info!(id, count = repos.len(), "Repositories fetched");
                                        NetworkResponse::RepositoriesFetched { id, repos }
                                    }
                                    Err(e) => {
                                        tracing::warn!(id, error = %e, "Repository listing failed");
                                        NetworkResponse::RepositoriesFailed { id, message: e.to_string() }
                                    }
                                };
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
