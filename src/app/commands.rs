//! Command handlers - business logic for processing UI events

use crate::app::state::Overlay;
use crate::app::AppState;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse};

impl AppState {
    // ========================
    // Search box editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.search.len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.search[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.search.len() {
            self.cursor_position = self.search[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(self.search.len());
        }
    }

    pub fn enter_char(&mut self, c: char) {
        if self.cursor_position <= self.search.len() {
            self.search.insert(self.cursor_position, c);
            self.cursor_position += c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let prev_pos = self.search[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.search.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Search lifecycle
    // ========================

    /// Start an account lookup for the current search text.
    ///
    /// Returns `None` (and leaves the loading flag alone) for blank input or
    /// while another lookup is still in flight.
    pub fn submit_search(&mut self) -> Option<NetworkCommand> {
        let name = self.search.trim();
        if name.is_empty() || self.is_searching {
            return None;
        }
        let name = name.to_string();

        let id = self.next_id();
        self.is_searching = true;
        self.pending_search_id = Some(id);
        self.pending_search_name = Some(name.clone());
        self.status = None;
        tracing::info!(id, name = %name, "Search submitted");
        Some(NetworkCommand::FetchAccount { id, name })
    }

    /// Apply a network response. Responses that do not belong to the
    /// pending search or the open overlay are dropped.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::AccountFetched { id, account } => {
                if self.pending_search_id != Some(id) {
                    tracing::debug!(id, "Discarding stale account response");
                    return;
                }
                self.is_searching = false;
                self.pending_search_id = None;
                let submitted = self.pending_search_name.take();

                let login = account.login.clone();
                self.storage.add_or_replace(account.stamped_now());
                // Text edited while the lookup was in flight is left alone
                if submitted.as_deref() == Some(self.search.trim()) {
                    self.search.clear();
                    self.cursor_position = 0;
                }
                if let Some(index) = self.storage.accounts().iter().position(|a| a.login == login) {
                    self.selected_card = index;
                }
            }
            NetworkResponse::AccountFailed { id, message } => {
                if self.pending_search_id != Some(id) {
                    return;
                }
                // Search text is kept so the user can correct it
                self.is_searching = false;
                self.pending_search_id = None;
                let name = self.pending_search_name.take().unwrap_or_default();
                self.status = Some(format!("No account found for '{}'", name));
                tracing::warn!(id, error = %message, "Search failed");
            }
            NetworkResponse::RepositoriesFetched { id, repos } => match self.overlay.as_mut() {
                Some(overlay) if overlay.request_id == id => {
                    overlay.repos = repos;
                    overlay.loading = false;
                    overlay.selected_repo = 0;
                }
                _ => tracing::debug!(id, "Discarding stale repository response"),
            },
            NetworkResponse::RepositoriesFailed { id, message } => match self.overlay.as_mut() {
                Some(overlay) if overlay.request_id == id => {
                    overlay.repos.clear();
                    overlay.loading = false;
                    tracing::warn!(id, error = %message, "Showing empty repository list");
                }
                _ => tracing::debug!(id, "Discarding stale repository failure"),
            },
        }
    }

    // ========================
    // Card grid
    // ========================

    pub fn next_card(&mut self) {
        let len = self.storage.len();
        if len > 0 {
            self.selected_card = (self.selected_card + 1) % len;
        }
    }

    pub fn prev_card(&mut self) {
        let len = self.storage.len();
        if len > 0 {
            self.selected_card = self.selected_card.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Open the overlay for a saved account and request its repositories.
    /// Any previously open account is replaced; its fetch becomes stale.
    pub fn open_card(&mut self, index: usize) -> Option<NetworkCommand> {
        let account = self.storage.accounts().get(index)?.clone();
        self.selected_card = index;
        self.input_mode = InputMode::Normal;

        let id = self.next_id();
        let login = account.login.clone();
        self.overlay = Some(Overlay {
            account,
            repos: Vec::new(),
            request_id: id,
            loading: true,
            selected_repo: 0,
        });
        tracing::info!(id, login = %login, "Opening account");
        Some(NetworkCommand::FetchRepositories { id, login })
    }

    /// Remove a saved account. An overlay showing the same account stays open.
    pub fn remove_card(&mut self, index: usize) {
        let Some(login) = self.storage.accounts().get(index).map(|a| a.login.clone()) else {
            return;
        };
        self.storage.remove(&login);
        tracing::info!(login = %login, "Account removed");

        let len = self.storage.len();
        if self.selected_card >= len {
            self.selected_card = len.saturating_sub(1);
        }
    }

    // ========================
    // Detail overlay
    // ========================

    /// Close the overlay, dropping the account and its repositories
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn next_repo(&mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            if !overlay.repos.is_empty() {
                overlay.selected_repo = (overlay.selected_repo + 1).min(overlay.repos.len() - 1);
            }
        }
    }

    pub fn prev_repo(&mut self) {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.selected_repo = overlay.selected_repo.saturating_sub(1);
        }
    }

    /// External page of a repository in the open overlay
    pub fn repo_link(&mut self, index: usize) -> Option<String> {
        let overlay = self.overlay.as_mut()?;
        let url = overlay.repos.get(index)?.html_url.clone();
        overlay.selected_repo = index;
        Some(url)
    }

    // ========================
    // Theme
    // ========================

    pub fn toggle_theme(&mut self) {
        self.storage.toggle_theme();
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
