// emojiboard: leaderboard of custom emoji uploaders for a Slack workspace.
// Exposes the pipeline modules for integration tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod repository;
pub mod slack;
