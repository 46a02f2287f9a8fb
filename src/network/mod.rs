//! Network layer - GitHub API calls
//!
//! The Network actor receives fetch commands and sends back tagged responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::GitHubClient;
