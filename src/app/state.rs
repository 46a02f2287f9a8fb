//! App state - pure data structure with no I/O logic

use crate::messages::render::OverlayView;
use crate::messages::ui_events::InputMode;
use crate::messages::RenderState;
use crate::models::{Account, Repository};
use crate::storage::Storage;

/// The open detail overlay.
///
/// `request_id` is the token of the repository fetch issued when this
/// account was opened; responses carrying any other id are stale.
#[derive(Clone, Debug)]
pub struct Overlay {
    pub account: Account,
    pub repos: Vec<Repository>,
    pub request_id: u64,
    pub loading: bool,
    pub selected_repo: usize,
}

/// Main application state - pure data, no I/O beyond the injected store
pub struct AppState {
    // Saved accounts and theme (persisted)
    pub storage: Storage,

    // Search box
    pub search: String,
    pub cursor_position: usize,
    pub input_mode: InputMode,
    pub is_searching: bool,
    pub pending_search_id: Option<u64>,
    pub pending_search_name: Option<String>,

    // One-line message shown in the status bar
    pub status: Option<String>,

    // Card grid
    pub selected_card: usize,

    // Detail overlay
    pub overlay: Option<Overlay>,

    // Popups
    pub show_help: bool,

    pub next_request_id: u64,
}

impl AppState {
    pub fn new(storage: Storage) -> Self {
        AppState {
            storage,
            search: String::new(),
            cursor_position: 0,
            input_mode: InputMode::Normal,
            is_searching: false,
            pending_search_id: None,
            pending_search_name: None,
            status: None,
            selected_card: 0,
            overlay: None,
            show_help: false,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            accounts: self.storage.accounts().to_vec(),
            theme: self.storage.theme(),
            search: self.search.clone(),
            cursor_position: self.cursor_position,
            input_mode: self.input_mode,
            is_searching: self.is_searching,
            selected_card: self.selected_card,
            overlay: self.overlay.as_ref().map(|o| OverlayView {
                account: o.account.clone(),
                repos: o.repos.clone(),
                loading: o.loading,
                selected_repo: o.selected_repo,
            }),
            show_help: self.show_help,
            status: self.status.clone(),
        }
    }
}
