//! Core library components.
//!
//! Locator resolution, secret fetching, JSON flattening and cleanup
//! bookkeeping. Nothing here talks to the terminal; the CLI layer wraps it.

pub mod alias;
pub mod cleanup;
pub mod config;
pub mod constants;
pub mod inject;
pub mod naming;
pub mod pipeline;
pub mod resolve;
pub mod sink;
pub mod store;
