//! # GitHub Explorer TUI
//!
//! A terminal client for browsing GitHub profiles.
//!
//! ## Features
//! - Look up an account by username and keep it in a saved collection
//! - Card grid of saved accounts (avatar address, login, name, bio)
//! - Detail overlay listing the account's public repositories
//! - Open a repository page in the system browser
//! - Dark/light theme, persisted with the saved accounts
//! - Keyboard and mouse input
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - terminal drawing and input mapping
//! - App Layer - state machine owning the saved-account store
//! - Network Layer (Tokio) - GitHub API calls tagged with request ids

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::Config;
pub use error::ExplorerError;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Account, Repository, Theme};
pub use network::{GitHubClient, NetworkActor};
pub use storage::{FileBackend, MemoryBackend, Storage, StorageBackend};
