//! Network actor - runs searches in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{run_search, SearchClient};

/// Network actor that turns search commands into responses.
///
/// Every command gets its own task. Nothing is queued, retried or
/// cancelled; ordering of responses is whatever the server produces.
pub struct NetworkActor {
    client: SearchClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_searches: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: SearchClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_searches: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Search { id, query }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_searches.spawn(async move {
                                tracing::debug!(id, endpoint = client.endpoint(), "Posting search");
                                let result = run_search(&client, id, query).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_searches.abort_all();
                            break;
                        }
                    }
                }

                // Reap finished tasks
                Some(_result) = self.active_searches.join_next() => {}
            }
        }
    }
}
