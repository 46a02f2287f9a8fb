//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::InputMode;
use crate::models::{Account, Repository, Theme};

/// What the detail overlay shows
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub account: Account,
    pub repos: Vec<Repository>,
    /// Repository fetch still in flight
    pub loading: bool,
    pub selected_repo: usize,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Persisted data (read-only copies)
    pub accounts: Vec<Account>,
    pub theme: Theme,

    // Search box
    pub search: String,
    pub cursor_position: usize,
    pub input_mode: InputMode,
    pub is_searching: bool,

    // Card grid
    pub selected_card: usize,

    // Detail overlay
    pub overlay: Option<OverlayView>,

    // Popups
    pub show_help: bool,

    /// Outcome of the last search, if it needs telling
    pub status: Option<String>,
}
