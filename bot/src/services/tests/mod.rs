//! Service-specific tests
//!
//! HTTP services run against a local `wiremock` server, the snapshot store
//! against a temporary directory.

mod telegram;
