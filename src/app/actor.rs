//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    fn send(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            let _ = self.network_tx.send(cmd);
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Search box
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),
            UiEvent::SubmitSearch => {
                let cmd = self.state.submit_search();
                self.send(cmd);
            }

            // Cards
            UiEvent::NextCard => self.state.next_card(),
            UiEvent::PrevCard => self.state.prev_card(),
            UiEvent::OpenCard(index) => {
                let cmd = self.state.open_card(index);
                self.send(cmd);
            }
            UiEvent::RemoveCard(index) => self.state.remove_card(index),

            // Overlay
            UiEvent::CloseOverlay => self.state.close_overlay(),
            UiEvent::NextRepo => self.state.next_repo(),
            UiEvent::PrevRepo => self.state.prev_repo(),
            UiEvent::OpenRepoLink(index) => {
                if let Some(url) = self.state.repo_link(index) {
                    tracing::info!(url = %url, "Opening repository page");
                    if let Err(e) = open::that_detached(&url) {
                        tracing::warn!(url = %url, error = %e, "Failed to open browser");
                    }
                }
            }

            UiEvent::ToggleTheme => self.state.toggle_theme(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;
    use crate::storage::{MemoryBackend, Storage};

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        net_resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        net_cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn spawn_actor(backend: MemoryBackend) -> Harness {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        let state = AppState::new(Storage::load(Box::new(backend)));
        let actor = AppActor::new(state, net_cmd_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));

        Harness {
            ui_tx,
            net_resp_tx,
            net_cmd_rx,
            render_rx,
            handle,
        }
    }

    #[tokio::test]
    async fn test_search_round_trip_through_actor() {
        let backend = MemoryBackend::new();
        let mut h = spawn_actor(backend.clone());
        let initial = h.render_rx.recv().await.unwrap();
        assert!(initial.accounts.is_empty());

        h.ui_tx.send(UiEvent::StartEditing).unwrap();
        for c in "octocat".chars() {
            h.ui_tx.send(UiEvent::CharInput(c)).unwrap();
        }
        h.ui_tx.send(UiEvent::SubmitSearch).unwrap();

        let Some(NetworkCommand::FetchAccount { id, name }) = h.net_cmd_rx.recv().await else {
            panic!("expected FetchAccount");
        };
        assert_eq!(name, "octocat");

        h.net_resp_tx
            .send(NetworkResponse::AccountFetched {
                id,
                account: Account::new("octocat"),
            })
            .unwrap();

        let mut last = None;
        while let Some(state) = h.render_rx.recv().await {
            let done = state.accounts.len() == 1;
            last = Some(state);
            if done {
                break;
            }
        }
        let last = last.unwrap();
        assert!(last.search.is_empty());
        assert!(!last.is_searching);
        assert!(backend.contents().unwrap().contains("octocat"));

        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();
        assert!(matches!(h.net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown)));
    }

    #[tokio::test]
    async fn test_remove_card_sends_no_command() {
        let backend = MemoryBackend::with_contents(r#"{"savedAccounts":[{"login":"a"}],"theme":"dark"}"#);
        let mut h = spawn_actor(backend);

        h.ui_tx.send(UiEvent::RemoveCard(0)).unwrap();
        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();

        // Only the shutdown command reaches the network layer
        assert!(matches!(h.net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown)));
        let mut last = None;
        while let Ok(state) = h.render_rx.try_recv() {
            last = Some(state);
        }
        let last = last.unwrap();
        assert!(last.accounts.is_empty());
        assert!(last.overlay.is_none());
    }
}
