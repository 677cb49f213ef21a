//! Common test utilities and infrastructure
//!
//! Shared fixtures and the `BotBuilder` harness used by the bot's
//! integration test suites.

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items for convenience
pub use fixtures::TestFixtures;
pub use helpers::{BotBuilder, BotHarness, MemoryStore};
