//! Messages exchanged between the terminal loop, the App actor and the
//! Network actor.
//!
//! - `UiEvent`: key presses and mouse clicks mapped to user intents
//! - `NetworkCommand` / `NetworkResponse`: API fetches and their tagged results
//! - `RenderState`: snapshot the terminal loop draws from

pub mod network;
pub mod render;
pub mod ui_events;

pub use network::{NetworkCommand, NetworkResponse};
pub use render::{OverlayView, RenderState};
pub use ui_events::UiEvent;
