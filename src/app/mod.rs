//! App layer - central state management and command processing
//!
//! The App actor owns the saved-account store and the transient UI state.
//! It receives UI events and network responses, updates state, and emits
//! fetch commands and render snapshots.

pub mod actor;
pub mod commands;
pub mod state;

pub use actor::AppActor;
pub use state::{AppState, Overlay};
