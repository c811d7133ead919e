// Slack API module.
// Provides the transport boundary, paginated client, and response types.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{HttpTransport, SlackClient, Transport, WireResponse};
pub use types::*;
